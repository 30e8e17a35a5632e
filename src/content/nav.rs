/// Entry in the menu overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MenuItem {
    /// Two-digit index label.
    pub number: &'static str,
    /// Upper-case label.
    pub name: &'static str,
    /// Route path.
    pub href: &'static str,
}

/// Menu entries in display order.
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        number: "01",
        name: "INDEX",
        href: "/",
    },
    MenuItem {
        number: "02",
        name: "PROFILE",
        href: "/profile",
    },
    MenuItem {
        number: "03",
        name: "WORKS",
        href: "/works",
    },
    MenuItem {
        number: "04",
        name: "CONTACT",
        href: "/contact",
    },
];

/// External profile link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SocialLink {
    /// Network name.
    pub name: &'static str,
    /// Profile URL.
    pub url: &'static str,
}

/// Social links shown in the menu and footer.
pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/kaiincode",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/kaiisme",
    },
    SocialLink {
        name: "X",
        url: "https://x.com/panacea___005",
    },
    SocialLink {
        name: "YouTube",
        url: "https://www.youtube.com/@Panacea2005",
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/__tthien/",
    },
];

/// Location and mail block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactInfo {
    /// City line.
    pub location: &'static str,
    /// Coordinates line.
    pub coordinates: &'static str,
    /// Contact address.
    pub mail: &'static str,
}

/// The site's contact block.
pub const CONTACT: ContactInfo = ContactInfo {
    location: "Ho Chi Minh City, Vietnam",
    coordinates: "10°47'14.0\"N 106°44'23.7\"E",
    mail: "contact.panacea.dev@gmail.com",
};

/// Offset of Asia/Ho_Chi_Minh from UTC; the zone has no daylight saving.
const LOCAL_UTC_OFFSET_SECS: i64 = 7 * 3600;

/// Wall-clock `HH:MM:SS` at the contact location for a Unix timestamp.
pub fn local_clock(unix_secs: i64) -> String {
    let secs = (unix_secs + LOCAL_UTC_OFFSET_SECS).rem_euclid(86_400);
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

/// Link target for the contact address.
pub fn mailto() -> String {
    format!("mailto:{}", CONTACT.mail)
}

#[cfg(test)]
#[path = "../../tests/unit/content/nav.rs"]
mod tests;
