use std::collections::BTreeMap;

use crate::foundation::core::{ElementBox, Progress, Viewport};
use crate::foundation::error::{ScrollworkError, ScrollworkResult};
use crate::motion::progress::ProgressSource;
use crate::motion::trigger::{TriggerOptions, ViewportTrigger};
use crate::scene::controller::{Scene, SceneFrame};

/// One scroll/resize/clock snapshot shared by every subscriber in a frame.
#[derive(Clone, Debug)]
pub struct FrameInput {
    /// Clock in seconds.
    pub time: f64,
    /// Scroll position and viewport size.
    pub viewport: Viewport,
    /// Layout boxes of mounted elements, keyed by element name.
    pub boxes: BTreeMap<String, ElementBox>,
}

impl FrameInput {
    /// Snapshot with no element boxes yet.
    pub fn new(time: f64, viewport: Viewport) -> Self {
        Self {
            time,
            viewport,
            boxes: BTreeMap::new(),
        }
    }

    /// Add an element box.
    pub fn with_box(mut self, element: impl Into<String>, el: ElementBox) -> Self {
        self.boxes.insert(element.into(), el);
        self
    }

    /// Box for `element`, if laid out.
    pub fn get(&self, element: &str) -> Option<ElementBox> {
        self.boxes.get(element).copied()
    }
}

#[derive(Debug)]
struct Section {
    scene: Box<dyn Scene>,
    target: String,
    source: ProgressSource,
    triggers: BTreeMap<String, ViewportTrigger>,
}

/// Owns every mounted section's progress source and viewport triggers.
///
/// Nothing outlives its section: unmounting drops the source and all triggers.
#[derive(Debug, Default)]
pub struct Stage {
    sections: BTreeMap<String, Section>,
}

impl Stage {
    /// Empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `scene`, tracking the element named `target`.
    #[tracing::instrument(level = "debug", skip(self, scene), fields(scene = %scene.kind()))]
    pub fn mount(
        &mut self,
        id: &str,
        scene: Box<dyn Scene>,
        target: &str,
    ) -> ScrollworkResult<()> {
        if self.sections.contains_key(id) {
            return Err(ScrollworkError::validation(format!(
                "section '{id}' is already mounted"
            )));
        }
        let source = ProgressSource::new(scene.offset());
        self.sections.insert(
            id.to_owned(),
            Section {
                scene,
                target: target.to_owned(),
                source,
                triggers: BTreeMap::new(),
            },
        );
        Ok(())
    }

    /// Attach a viewport trigger for `element` to a mounted section.
    pub fn add_trigger(
        &mut self,
        id: &str,
        element: &str,
        options: TriggerOptions,
    ) -> ScrollworkResult<()> {
        let section = self
            .sections
            .get_mut(id)
            .ok_or_else(|| ScrollworkError::validation(format!("section '{id}' is not mounted")))?;
        section
            .triggers
            .insert(element.to_owned(), ViewportTrigger::new(options));
        Ok(())
    }

    /// Release a section and everything it acquired. Returns whether it was mounted.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn unmount(&mut self, id: &str) -> bool {
        self.sections.remove(id).is_some()
    }

    /// Whether `id` is mounted.
    pub fn is_mounted(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    /// Number of live progress sources.
    pub fn active_sources(&self) -> usize {
        self.sections.len()
    }

    /// Number of live viewport triggers.
    pub fn active_triggers(&self) -> usize {
        self.sections.values().map(|s| s.triggers.len()).sum()
    }

    /// Last progress reading of a section.
    pub fn progress(&self, id: &str) -> Option<Progress> {
        self.sections.get(id).map(|s| s.source.get())
    }

    /// Run one frame: read every source and trigger from `input`, then sample every scene.
    pub fn frame(&mut self, input: &FrameInput) -> StageFrame {
        for (id, section) in &mut self.sections {
            let p = section
                .source
                .update(input.get(&section.target), input.viewport);
            for (element, trigger) in &mut section.triggers {
                trigger.update(input.get(element), input.viewport, input.time);
            }
            tracing::trace!(section = %id, progress = p.get(), "progress read");
        }

        let sections = self
            .sections
            .iter()
            .map(|(id, section)| {
                let progress = section.source.get();
                (
                    id.clone(),
                    SectionFrame {
                        progress,
                        frame: section.scene.sample(progress),
                        triggers: section
                            .triggers
                            .iter()
                            .map(|(k, t)| (k.clone(), t.is_visible()))
                            .collect(),
                    },
                )
            })
            .collect();

        StageFrame {
            time: input.time,
            sections,
        }
    }
}

/// Outputs of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StageFrame {
    /// Frame clock.
    pub time: f64,
    /// Per-section outputs keyed by section id.
    pub sections: BTreeMap<String, SectionFrame>,
}

/// One section's outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionFrame {
    /// Progress the scene was sampled at.
    pub progress: Progress,
    /// Scene outputs.
    pub frame: SceneFrame,
    /// Visibility per trigger element.
    pub triggers: BTreeMap<String, bool>,
}

#[cfg(test)]
#[path = "../../tests/unit/motion/stage.rs"]
mod tests;
