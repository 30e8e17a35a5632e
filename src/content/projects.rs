use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ScrollworkError, ScrollworkResult};

/// Whether an entry is client work or a personal piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectType {
    /// Shipped project.
    Project,
    /// Personal or playful piece.
    Play,
}

impl ProjectType {
    /// Upper-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "PROJECT",
            Self::Play => "PLAY",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the project table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Project {
    /// URL slug, the table key.
    pub slug: &'static str,
    /// Numeric id.
    pub id: u32,
    /// Display title.
    pub title: &'static str,
    /// Comma-separated category tags, e.g. `"AI, WEB3"`.
    pub category: &'static str,
    /// Project or play.
    #[serde(rename = "type")]
    pub kind: ProjectType,
    /// Cover image path.
    pub image: &'static str,
    /// Long description.
    pub description: &'static str,
    /// Credit line.
    pub credits: &'static str,
    /// External link.
    pub visit_link: &'static str,
    /// Number of gallery images under `/works/{slug}/`.
    pub gallery_count: u32,
}

impl Project {
    /// Detail page path.
    pub fn href(&self) -> String {
        format!("/works/{}", self.slug)
    }

    /// Gallery image paths, `1.png` through `{gallery_count}.png`.
    pub fn gallery(&self) -> Vec<String> {
        (1..=self.gallery_count)
            .map(|n| format!("/works/{}/{n}.png", self.slug))
            .collect()
    }

    /// Upper-cased, trimmed category tags.
    pub fn categories(&self) -> impl Iterator<Item = String> + '_ {
        split_categories(self.category)
    }
}

/// Gallery size used when a project has no explicit count.
pub const DEFAULT_GALLERY_COUNT: u32 = 3;

/// Every project, in navigation order.
pub const PROJECTS: [Project; 9] = [
    Project {
        slug: "panacea",
        id: 6,
        title: "Kai",
        category: "PORTFOLIO",
        kind: ProjectType::Play,
        image: "/works/panacea/panacea.png",
        description: "A modern portfolio website showcasing AI engineering and web development projects. Built with Next.js, TypeScript, and Framer Motion for smooth animations and interactions.",
        credits: "Design & Development: Kai",
        visit_link: "https://iamkai.vercel.app",
        gallery_count: 8,
    },
    Project {
        slug: "sweetlife",
        id: 9,
        title: "SweetLife",
        category: "WEB, FRONTEND",
        kind: ProjectType::Project,
        image: "/works/sweetlife/sweetlife.png",
        description: "A responsive website for an ice cream restaurant, built with semantic HTML, modern CSS, and vanilla JavaScript. Focused on delightful UI, accessibility, and performance.",
        credits: "Frontend: Kai",
        visit_link: "https://sweetlife.vercel.app",
        gallery_count: 7,
    },
    Project {
        slug: "flipside",
        id: 1,
        title: "Flipside",
        category: "WEB3, DATA",
        kind: ProjectType::Project,
        image: "/works/flipside/flipside.png",
        description: "A comprehensive blockchain analytics platform providing insights into DeFi protocols, NFT markets, and Web3 ecosystem data visualization.",
        credits: "Lead Developer: Kai",
        visit_link: "https://flipside-crypto.netlify.app",
        gallery_count: 7,
    },
    Project {
        slug: "void",
        id: 2,
        title: "VOID",
        category: "AI, WEB3",
        kind: ProjectType::Project,
        image: "/works/void/void.png",
        description: "An AI-powered NFT platform that combines machine learning with blockchain technology to create intelligent digital art and gaming experiences.",
        credits: "AI Engineer: Kai",
        visit_link: "https://void-resonance.vercel.app",
        gallery_count: 7,
    },
    Project {
        slug: "n-ova",
        id: 3,
        title: "N.OVA",
        category: "AI, WEB3",
        kind: ProjectType::Project,
        image: "/works/n-ova/n-ova.png",
        description: "An AI-native Web3 identity platform that leverages machine learning for decentralized identity verification and management.",
        credits: "AI Engineer: Kai",
        visit_link: "https://n-ova.vercel.app",
        gallery_count: 14,
    },
    Project {
        slug: "genie",
        id: 4,
        title: "Genie",
        category: "AI, DATA",
        kind: ProjectType::Project,
        image: "/works/genie/genie.png",
        description: "An AI-powered mental health companion using RAG (Retrieval-Augmented Generation) to provide personalized support and guidance.",
        credits: "AI Engineer: Kai",
        visit_link: "https://genie.vercel.app",
        gallery_count: 6,
    },
    Project {
        slug: "longchau-pms",
        id: 8,
        title: "LongChau PMS",
        category: "WEB, E-COMMERCE",
        kind: ProjectType::Project,
        image: "/works/longchau-pms/longchau-pms.png",
        description: "A comprehensive pharmacy management and e-commerce platform for Long Chau Pharmacy built with Next.js, TypeScript, and Supabase, covering inventory, orders, and storefront.",
        credits: "Full-stack: Kai",
        visit_link: "https://long-chau-pms.vercel.app",
        gallery_count: 11,
    },
    Project {
        slug: "tribalyn",
        id: 7,
        title: "Tribalyn",
        category: "AI, VTON",
        kind: ProjectType::Project,
        image: "/works/tribalyn/tribalyn.png",
        description: "A virtual try-on tool for countries' traditional costumes using AI technology. Experience cultural heritage through immersive virtual fitting experiences.",
        credits: "AI Engineer: Kai",
        visit_link: "https://tribalyn.vercel.app",
        gallery_count: 5,
    },
    Project {
        slug: "climalens",
        id: 5,
        title: "ClimaLens",
        category: "AI, DATA",
        kind: ProjectType::Project,
        image: "/works/climalens/climalens.png",
        description: "A climate data analytics platform using AI to analyze environmental data and provide insights for sustainability initiatives.",
        credits: "Data Scientist: Kai",
        visit_link: "https://climalens.vercel.app",
        gallery_count: 8,
    },
];

/// Look up a project by slug.
pub fn find(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

/// Gallery size for `slug`, falling back to [`DEFAULT_GALLERY_COUNT`].
pub fn gallery_count(slug: &str) -> u32 {
    find(slug).map_or(DEFAULT_GALLERY_COUNT, |p| p.gallery_count)
}

/// Previous and next projects in navigation order, wrapping at both ends.
///
/// Unknown slugs are treated as sitting before the first entry, so "next" is the first
/// project and "previous" is the last.
pub fn neighbors(slug: &str) -> (&'static Project, &'static Project) {
    let n = PROJECTS.len();
    let (prev, next) = match PROJECTS.iter().position(|p| p.slug == slug) {
        Some(i) => ((i + n - 1) % n, (i + 1) % n),
        None => (n - 1, 0),
    };
    (&PROJECTS[prev], &PROJECTS[next])
}

/// Lowercase, collapse every run of non-alphanumerics into one `-`, trim dashes.
///
/// `"N.OVA"` -> `"n-ova"`, `"LongChau PMS"` -> `"longchau-pms"`.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn split_categories(category: &str) -> impl Iterator<Item = String> + '_ {
    category
        .split(',')
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
}

/// `ALL` followed by every distinct category tag in first-seen order.
pub fn categories<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Vec<String> {
    let mut out = vec![ALL.to_owned()];
    for p in projects {
        for c in p.categories() {
            if !out.contains(&c) {
                out.push(c);
            }
        }
    }
    out
}

/// Filter label matching everything.
pub const ALL: &str = "ALL";

/// Type selector on the works list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeFilter {
    /// No type restriction.
    #[default]
    All,
    /// Only [`ProjectType::Project`].
    Project,
    /// Only [`ProjectType::Play`].
    Play,
}

impl TypeFilter {
    fn matches(self, kind: ProjectType) -> bool {
        match self {
            Self::All => true,
            Self::Project => kind == ProjectType::Project,
            Self::Play => kind == ProjectType::Play,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = ScrollworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "PROJECT" => Ok(Self::Project),
            "PLAY" => Ok(Self::Play),
            _ => Err(ScrollworkError::validation(format!(
                "unknown project type filter '{s}'"
            ))),
        }
    }
}

/// Works-list filter state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectFilter {
    /// Selected type.
    pub kind: TypeFilter,
    /// Selected category, or `ALL`.
    pub category: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            kind: TypeFilter::All,
            category: ALL.to_owned(),
        }
    }
}

impl ProjectFilter {
    /// Build from user-provided labels.
    pub fn parse(kind: &str, category: &str) -> ScrollworkResult<Self> {
        Ok(Self {
            kind: kind.parse()?,
            category: category.trim().to_uppercase(),
        })
    }

    /// Whether `p` passes. Categories match by case-insensitive substring.
    pub fn matches(&self, p: &Project) -> bool {
        let category = self.category.eq_ignore_ascii_case(ALL)
            || p.category.to_uppercase().contains(&self.category.to_uppercase());
        category && self.kind.matches(p.kind)
    }

    /// Matching projects in navigation order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Horizontal placement of a home-page card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// 10% to 50%.
    Left,
    /// 30% to 70%.
    Center,
    /// 50% to 90%.
    Right,
}

impl Align {
    /// Left offset as a percentage of the row width.
    pub fn left_percent(self) -> f64 {
        match self {
            Self::Left => 10.0,
            Self::Center => 30.0,
            Self::Right => 50.0,
        }
    }
}

/// A card in the home-page works section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FeaturedWork {
    /// Display title; the link slug derives from it.
    pub title: &'static str,
    /// Tag line.
    pub tags: &'static str,
    /// Placement.
    pub align: Align,
    /// Thumbnail path.
    pub image: &'static str,
}

impl FeaturedWork {
    /// Detail page path.
    pub fn href(&self) -> String {
        format!("/works/{}", slugify(self.title))
    }
}

/// Home-page cards, top to bottom.
pub const FEATURED: [FeaturedWork; 9] = [
    FeaturedWork {
        title: "Panacea",
        tags: "PORTFOLIO",
        align: Align::Center,
        image: "/index/panacea.png",
    },
    FeaturedWork {
        title: "SweetLife",
        tags: "WEB, FRONTEND",
        align: Align::Left,
        image: "/index/sweetlife.png",
    },
    FeaturedWork {
        title: "Flipside",
        tags: "WEB3, DATA",
        align: Align::Left,
        image: "/index/flipside.png",
    },
    FeaturedWork {
        title: "VOID",
        tags: "AI, WEB3",
        align: Align::Right,
        image: "/index/void.png",
    },
    FeaturedWork {
        title: "N.OVA",
        tags: "AI, WEB3",
        align: Align::Center,
        image: "/index/n-ova.png",
    },
    FeaturedWork {
        title: "Genie",
        tags: "AI, DATA",
        align: Align::Left,
        image: "/index/genie.png",
    },
    FeaturedWork {
        title: "LongChau PMS",
        tags: "WEB, E-COMMERCE",
        align: Align::Right,
        image: "/index/longchau-pms.png",
    },
    FeaturedWork {
        title: "Tribalyn",
        tags: "AI, VTON",
        align: Align::Center,
        image: "/index/tribalyn.png",
    },
    FeaturedWork {
        title: "ClimaLens",
        tags: "AI, DATA",
        align: Align::Right,
        image: "/index/climalens.png",
    },
];

#[cfg(test)]
#[path = "../../tests/unit/content/projects.rs"]
mod tests;
