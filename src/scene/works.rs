use crate::content::projects::{FEATURED, FeaturedWork};
use crate::foundation::core::{ElementBox, Viewport};
use crate::motion::trigger::{Pose, Reveal, Stagger, TriggerOptions, TriggeredReveal};
use crate::scene::marquee::Marquee;

/// Background strip shown while no card is hovered.
pub const DEFAULT_MARQUEE: &str = "WORKS • PORTFOLIO • PROJECTS • WORKS • PORTFOLIO • PROJECTS •";

/// Home-page works section: cards rise in on first view and hovering one swaps the
/// background marquee for that project's title.
#[derive(Clone, Debug)]
pub struct WorksSection {
    cards: Vec<FeaturedWork>,
    entrances: Vec<TriggeredReveal>,
    hovered: Option<usize>,
    marquee_since: f64,
}

impl WorksSection {
    /// Mount with the featured cards at `now`.
    pub fn new(now: f64) -> Self {
        Self::with_cards(FEATURED.to_vec(), now)
    }

    /// Mount with an explicit card list.
    pub fn with_cards(cards: Vec<FeaturedWork>, now: f64) -> Self {
        let stagger = Stagger {
            delay_children: 0.0,
            step: 0.1,
        };
        Self {
            entrances: stagger
                .reveals(cards.len(), Reveal::rise(80.0, 0.8, 0.0))
                .into_iter()
                .map(|r| TriggeredReveal::new(TriggerOptions::ONCE, r))
                .collect(),
            cards,
            hovered: None,
            marquee_since: now,
        }
    }

    /// Feed layout for card `index`. Out-of-range indices are ignored.
    pub fn observe(
        &mut self,
        index: usize,
        el: Option<ElementBox>,
        viewport: Viewport,
        now: f64,
    ) -> bool {
        self.entrances
            .get_mut(index)
            .is_some_and(|t| t.update(el, viewport, now))
    }

    /// Pointer entered card `index`.
    pub fn hover(&mut self, index: usize, now: f64) {
        if index < self.cards.len() && self.hovered != Some(index) {
            self.hovered = Some(index);
            self.marquee_since = now;
        }
    }

    /// Pointer left card `index`. A stale leave for another card is ignored.
    pub fn unhover(&mut self, index: usize, now: f64) {
        if self.hovered == Some(index) {
            self.hovered = None;
            self.marquee_since = now;
        }
    }

    /// The hovered card, if any.
    pub fn hovered(&self) -> Option<&FeaturedWork> {
        self.hovered.and_then(|i| self.cards.get(i))
    }

    fn marquee(&self) -> Marquee {
        match self.hovered() {
            Some(card) => Marquee::new(
                [card.title; 4].join(" • "),
                1200.0,
                -1200.0,
                8.0,
            ),
            None => Marquee::new(DEFAULT_MARQUEE, 0.0, -2000.0, 30.0),
        }
    }

    /// Outputs at `now`.
    pub fn frame(&self, now: f64) -> WorksFrame {
        let marquee = self.marquee();
        WorksFrame {
            cards: self
                .cards
                .iter()
                .zip(&self.entrances)
                .enumerate()
                .map(|(i, (card, entrance))| CardFrame {
                    title: card.title,
                    tags: card.tags,
                    image: card.image,
                    href: card.href(),
                    left_percent: card.align.left_percent(),
                    hovered: self.hovered == Some(i),
                    pose: entrance.pose(now),
                })
                .collect(),
            marquee_x: marquee.x_at(now - self.marquee_since),
            marquee_outlined: self.hovered.is_some(),
            background: self.hovered().map(|c| c.image),
            marquee_text: marquee.text,
        }
    }
}

/// Works section outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WorksFrame {
    /// One entry per card.
    pub cards: Vec<CardFrame>,
    /// Background strip text.
    pub marquee_text: String,
    /// Background strip offset in px.
    pub marquee_x: f64,
    /// Whether the strip shows a hovered title in outline style.
    pub marquee_outlined: bool,
    /// Full-bleed background image of the hovered card.
    pub background: Option<&'static str>,
}

/// One card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CardFrame {
    /// Title.
    pub title: &'static str,
    /// Tag line.
    pub tags: &'static str,
    /// Thumbnail.
    pub image: &'static str,
    /// Detail link.
    pub href: String,
    /// Left offset in percent.
    pub left_percent: f64,
    /// Whether the pointer is over it.
    pub hovered: bool,
    /// Entrance pose.
    pub pose: Pose,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/works.rs"]
mod tests;
