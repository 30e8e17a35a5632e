use super::*;

fn view(path: &str) -> View {
    render(&Route::parse(path).unwrap())
}

#[test]
fn unknown_slug_falls_back_to_works_link() {
    let View::NotFound(nf) = view("/works/does-not-exist") else {
        panic!("expected fallback");
    };
    assert_eq!(nf.title, "Project Not Found");
    assert_eq!(nf.back.href, "/works");
    assert_eq!(nf.back.label, "← Back to Works");
}

#[test]
fn unknown_path_falls_back_to_index() {
    let View::NotFound(nf) = view("/blog") else {
        panic!("expected fallback");
    };
    assert_eq!(nf.back.href, "/");
}

#[test]
fn detail_view_carries_catalog_row_and_neighbors() {
    let View::WorkDetail(d) = view("/works/void") else {
        panic!("expected detail");
    };
    assert_eq!(d.project.title, "VOID");
    assert_eq!(d.project.category, "AI, WEB3");
    assert_eq!(d.project.visit_link, "https://void-resonance.vercel.app");
    assert_eq!(d.previous.href, "/works/flipside");
    assert_eq!(d.next.href, "/works/n-ova");
    assert_eq!(d.gallery.len(), 7);
    assert_eq!(d.heading.len(), 4);
}

#[test]
fn heading_characters_are_staggered() {
    let chars = stagger_heading("Works", HEADING_STAGGER);
    assert_eq!(chars.len(), 5);
    assert_eq!(chars[0].delay, 0.8);
    assert!((chars[4].delay - 0.92).abs() < 1e-9);
}

#[test]
fn works_list_links_by_catalog_slug() {
    let View::Works(w) = view("/works") else {
        panic!("expected works");
    };
    assert_eq!(w.entries.len(), 9);
    assert_eq!(w.entries[0].title, "Kai");
    assert_eq!(w.entries[0].href, "/works/panacea");
    assert_eq!(w.categories[0], "ALL");
    assert_eq!(w.types, ["ALL", "PROJECT", "PLAY"]);

    let filtered = works(&ProjectFilter::parse("PLAY", "ALL").unwrap());
    assert_eq!(filtered.entries.len(), 1);
}

#[test]
fn home_and_contact_views_serialize_with_tags() {
    let home = serde_json::to_value(view("/")).unwrap();
    assert_eq!(home["view"], "home");
    assert_eq!(home["featured"][3]["title"], "VOID");
    assert_eq!(home["featured"][3]["href"], "/works/void");

    let contact = serde_json::to_value(view("/contact")).unwrap();
    assert_eq!(contact["view"], "contact");
    assert_eq!(contact["mailto"], "mailto:contact.panacea.dev@gmail.com");

    let profile = serde_json::to_value(view("/profile/")).unwrap();
    assert_eq!(profile["marquee"]["duration"], 30.0);
    assert!(
        profile["marquee"]["text"]
            .as_str()
            .unwrap()
            .starts_with("AI ENGINEER AND WEB DEVELOPER •")
    );
}

#[test]
fn footer_carries_local_clock() {
    // 2025-01-01T00:00:00Z is 07:00 in Ho Chi Minh City.
    let f = footer(1_735_689_600);
    assert_eq!(f.clock, "07:00:00");
    assert_eq!(f.mailto, "mailto:contact.panacea.dev@gmail.com");
    assert!(!f.socials.is_empty());
}
