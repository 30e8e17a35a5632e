use crate::content::about;
use crate::content::nav::{CONTACT, ContactInfo, SOCIAL_LINKS, SocialLink, local_clock, mailto};
use crate::content::projects::{
    self, FEATURED, FeaturedWork, PROJECTS, Project, ProjectFilter, ProjectType,
};
use crate::motion::trigger::Stagger;
use crate::scene::expression::EXPRESSION_IMAGES;
use crate::scene::hero::{HERO_LABELS, HeroLabel};
use crate::scene::marquee::{Marquee, profile_marquee};
use crate::scene::profile::PROFILE_LINES;
use crate::scene::service::{SERVICES, Service};
use crate::site::route::Route;

/// Per-character heading entrance: children start after 0.8 s, 0.03 s apart.
pub const HEADING_STAGGER: Stagger = Stagger {
    delay_children: 0.8,
    step: 0.03,
};

/// Text link.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Link {
    /// Visible label.
    pub label: String,
    /// Target path or URL.
    pub href: String,
}

impl Link {
    fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// One heading character and its entrance delay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StaggeredChar {
    /// Character.
    pub ch: char,
    /// Seconds after mount.
    pub delay: f64,
}

/// Split a heading into individually delayed characters.
pub fn stagger_heading(text: &str, stagger: Stagger) -> Vec<StaggeredChar> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| StaggeredChar {
            ch,
            delay: stagger.delay(i),
        })
        .collect()
}

/// Page view model.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// `/`
    Home(HomeView),
    /// `/profile`
    Profile(ProfileView),
    /// `/works`
    Works(WorksView),
    /// `/works/{slug}` for a known slug.
    WorkDetail(WorkDetailView),
    /// `/contact`
    Contact(ContactView),
    /// Unknown slug or path.
    NotFound(NotFoundView),
}

/// Home page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HomeView {
    /// Hero category labels.
    pub hero_labels: Vec<HeroLabel>,
    /// Profile section lines.
    pub profile_lines: Vec<&'static str>,
    /// Service list.
    pub services: Vec<Service>,
    /// Expression card images.
    pub expression_images: Vec<&'static str>,
    /// Works section cards.
    pub featured: Vec<FeaturedEntry>,
}

/// Home-page card with its resolved link.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FeaturedEntry {
    /// Card data.
    #[serde(flatten)]
    pub work: FeaturedWork,
    /// Detail link.
    pub href: String,
}

/// Profile page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProfileView {
    /// Animated heading.
    pub heading: Vec<StaggeredChar>,
    /// Running strip; see [`crate::scene::marquee::ProfileStrip`] for its hover behaviour.
    pub marquee: Marquee,
    /// Quote lines.
    pub quote: Vec<&'static str>,
    /// Skills line.
    pub skills: String,
    /// Tools line.
    pub tools: String,
    /// Awards.
    pub awards: Vec<&'static str>,
}

/// Works list page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WorksView {
    /// Animated heading.
    pub heading: Vec<StaggeredChar>,
    /// Active filter.
    pub filter: ProjectFilter,
    /// Category selector options.
    pub categories: Vec<String>,
    /// Type selector options.
    pub types: Vec<&'static str>,
    /// Matching entries in catalog order.
    pub entries: Vec<WorkEntry>,
}

/// One works-list tile.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WorkEntry {
    /// Title.
    pub title: &'static str,
    /// Category tags.
    pub category: &'static str,
    /// Project or play.
    #[serde(rename = "type")]
    pub kind: ProjectType,
    /// Cover image.
    pub image: &'static str,
    /// Detail link.
    pub href: String,
}

/// Project detail page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WorkDetailView {
    /// Catalog row.
    pub project: Project,
    /// Animated title.
    pub heading: Vec<StaggeredChar>,
    /// Gallery image paths.
    pub gallery: Vec<String>,
    /// Previous project, wrapping.
    pub previous: Link,
    /// Next project, wrapping.
    pub next: Link,
    /// Link back to the list.
    pub back: Link,
}

/// Contact page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ContactView {
    /// Animated heading.
    pub heading: Vec<StaggeredChar>,
    /// Location and mail.
    pub contact: ContactInfo,
    /// Mail link.
    pub mailto: String,
    /// Phone number.
    pub phone: &'static str,
    /// Availability note.
    pub availability: &'static str,
    /// Collaboration channels.
    pub collaboration: String,
    /// Awards.
    pub awards: Vec<&'static str>,
    /// Social links.
    pub socials: Vec<SocialLink>,
}

/// Fallback page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NotFoundView {
    /// Message.
    pub title: String,
    /// Way out.
    pub back: Link,
}

/// Footer block shown at the bottom of every page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FooterView {
    /// Location and mail.
    pub contact: ContactInfo,
    /// Wall clock at the contact location, `HH:MM:SS`.
    pub clock: String,
    /// Mail link.
    pub mailto: String,
    /// Social links.
    pub socials: Vec<SocialLink>,
}

/// Footer block for a Unix timestamp.
pub fn footer(unix_secs: i64) -> FooterView {
    FooterView {
        contact: CONTACT,
        clock: local_clock(unix_secs),
        mailto: mailto(),
        socials: SOCIAL_LINKS.to_vec(),
    }
}

/// Build the view for a route with the default works filter.
#[tracing::instrument(level = "debug")]
pub fn render(route: &Route) -> View {
    match route {
        Route::Home => View::Home(home()),
        Route::Profile => View::Profile(profile()),
        Route::Works => View::Works(works(&ProjectFilter::default())),
        Route::WorkDetail(slug) => match projects::find(slug) {
            Some(p) => View::WorkDetail(work_detail(p)),
            None => {
                tracing::debug!(slug = %slug, "unknown project slug; rendering fallback");
                View::NotFound(NotFoundView {
                    title: "Project Not Found".to_owned(),
                    back: Link::new("← Back to Works", "/works"),
                })
            }
        },
        Route::Contact => View::Contact(contact()),
        Route::NotFound(path) => {
            tracing::debug!(path = %path, "no page for path");
            View::NotFound(NotFoundView {
                title: "Page Not Found".to_owned(),
                back: Link::new("← Back to Index", "/"),
            })
        }
    }
}

fn home() -> HomeView {
    HomeView {
        hero_labels: HERO_LABELS.to_vec(),
        profile_lines: PROFILE_LINES.to_vec(),
        services: SERVICES.to_vec(),
        expression_images: EXPRESSION_IMAGES.to_vec(),
        featured: FEATURED
            .iter()
            .map(|w| FeaturedEntry {
                work: *w,
                href: w.href(),
            })
            .collect(),
    }
}

fn profile() -> ProfileView {
    ProfileView {
        heading: stagger_heading("Profile", HEADING_STAGGER),
        marquee: profile_marquee(),
        quote: about::QUOTE.to_vec(),
        skills: about::slash_list(about::SKILLS),
        tools: about::slash_list(about::TOOLS),
        awards: about::AWARDS.to_vec(),
    }
}

/// Works list under `filter`. Entries link by catalog slug.
pub fn works(filter: &ProjectFilter) -> WorksView {
    WorksView {
        heading: stagger_heading("Works", HEADING_STAGGER),
        filter: filter.clone(),
        categories: projects::categories(&PROJECTS),
        types: vec![
            projects::ALL,
            ProjectType::Project.as_str(),
            ProjectType::Play.as_str(),
        ],
        entries: filter
            .apply(&PROJECTS)
            .into_iter()
            .map(|p| WorkEntry {
                title: p.title,
                category: p.category,
                kind: p.kind,
                image: p.image,
                href: p.href(),
            })
            .collect(),
    }
}

fn work_detail(p: &Project) -> WorkDetailView {
    let (prev, next) = projects::neighbors(p.slug);
    WorkDetailView {
        project: *p,
        heading: stagger_heading(p.title, HEADING_STAGGER),
        gallery: p.gallery(),
        previous: Link::new(prev.title, prev.href()),
        next: Link::new(next.title, next.href()),
        back: Link::new("All Works", "/works"),
    }
}

fn contact() -> ContactView {
    ContactView {
        heading: stagger_heading("Contact", HEADING_STAGGER),
        contact: CONTACT,
        mailto: mailto(),
        phone: about::PHONE,
        availability: about::AVAILABILITY,
        collaboration: about::slash_list(about::COLLABORATION),
        awards: about::AWARDS.to_vec(),
        socials: SOCIAL_LINKS.to_vec(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/view.rs"]
mod tests;
