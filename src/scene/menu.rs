use crate::animation::checkpoints::{CheckpointSeries, interpolate};
use crate::animation::ease::Ease;
use crate::animation::value::Percent;
use crate::config::MenuConfig;
use crate::content::nav::{MENU_ITEMS, MenuItem, SOCIAL_LINKS, SocialLink};
use crate::foundation::error::ScrollworkResult;
use crate::motion::presence::{Presence, PresencePhase};

/// Text tone for overlay content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// White text over dark pages.
    Light,
    /// Black text once the white footer has taken over.
    Dark,
}

impl Tone {
    /// Tone for the current footer state.
    pub fn for_footer(footer_open: bool) -> Self {
        if footer_open { Self::Dark } else { Self::Light }
    }
}

/// Slide-in navigation panel.
#[derive(Clone, Debug)]
pub struct MenuOverlay {
    presence: Presence,
    panel_x: CheckpointSeries<Percent>,
}

impl MenuOverlay {
    /// Closed overlay.
    pub fn new(cfg: MenuConfig) -> ScrollworkResult<Self> {
        Ok(Self {
            presence: Presence::new(cfg.duration, Ease::OUT_EXPO_LIKE),
            panel_x: CheckpointSeries::new([0.0, 1.0], [Percent(100.0), Percent(0.0)])?,
        })
    }

    /// Menu button.
    pub fn open(&mut self) {
        self.presence.open();
    }

    /// Close button or navigation.
    pub fn close(&mut self) {
        self.presence.close();
    }

    /// Flip.
    pub fn toggle(&mut self) {
        self.presence.toggle();
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> PresencePhase {
        self.presence.tick(dt)
    }

    /// Whether the overlay is open or opening.
    pub fn is_open(&self) -> bool {
        self.presence.is_open()
    }

    /// Whether the overlay is rendered at all.
    pub fn is_visible(&self) -> bool {
        self.presence.is_visible()
    }

    /// Outputs; `footer_open` comes from the footer scene of the current page.
    pub fn frame(&self, footer_open: bool) -> MenuFrame {
        MenuFrame {
            phase: self.presence.phase(),
            visible: self.presence.is_visible(),
            panel_x: interpolate(self.presence.value(), &self.panel_x).to_string(),
            tone: Tone::for_footer(footer_open),
            scroll_locked: self.presence.is_open(),
            items: MENU_ITEMS.to_vec(),
            socials: SOCIAL_LINKS.to_vec(),
        }
    }
}

/// Menu outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MenuFrame {
    /// Lifecycle phase.
    pub phase: PresencePhase,
    /// Whether to render.
    pub visible: bool,
    /// Panel translation, `"100%"` when off-screen.
    pub panel_x: String,
    /// Text tone.
    pub tone: Tone,
    /// Page scrolling is disabled while open.
    pub scroll_locked: bool,
    /// Navigation entries.
    pub items: Vec<MenuItem>,
    /// Social links.
    pub socials: Vec<SocialLink>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/menu.rs"]
mod tests;
