use super::*;

fn menu() -> MenuOverlay {
    MenuOverlay::new(MenuConfig::default()).unwrap()
}

#[test]
fn slides_in_and_out() {
    let mut m = menu();
    let f = m.frame(false);
    assert!(!f.visible);
    assert_eq!(f.panel_x, "100%");

    m.open();
    assert!(m.is_open());
    m.tick(0.1);
    let x = m.frame(false).panel_x;
    assert_ne!(x, "100%");
    assert_ne!(x, "0%");

    assert_eq!(m.tick(0.4), PresencePhase::Open);
    let f = m.frame(false);
    assert_eq!(f.panel_x, "0%");
    assert!(f.scroll_locked);

    m.close();
    assert!(m.is_visible());
    assert!(!m.frame(false).scroll_locked);
    assert_eq!(m.tick(0.5), PresencePhase::Closed);
    assert!(!m.is_visible());
}

#[test]
fn tone_follows_footer() {
    let m = menu();
    assert_eq!(m.frame(false).tone, Tone::Light);
    assert_eq!(m.frame(true).tone, Tone::Dark);
}

#[test]
fn toggle_reverses_mid_flight() {
    let mut m = menu();
    m.toggle();
    m.tick(0.2);
    m.toggle();
    assert_eq!(m.frame(false).phase, PresencePhase::Closing);
    assert_eq!(m.tick(0.2), PresencePhase::Closed);
}

#[test]
fn lists_navigation_and_socials() {
    let f = menu().frame(false);
    assert_eq!(f.items.len(), 4);
    assert_eq!(f.socials[0].name, "GitHub");
}
