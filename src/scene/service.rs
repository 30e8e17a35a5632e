use crate::animation::checkpoints::{CheckpointSeries, interpolate};
use crate::config::RevealConfig;
use crate::foundation::core::Progress;
use crate::foundation::error::ScrollworkResult;
use crate::motion::progress::ScrollOffset;
use crate::scene::controller::{Scene, SceneFrame, SceneKind};
use crate::scene::reveal::{LineFrame, LineReveal};

/// Intro copy above the service list.
pub const SERVICE_INTRO: [&str; 2] = [
    "I combine four key areas with AI and blockchain expertise,",
    "building intelligent systems that deliver transformative digital experiences.",
];

/// One offered service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Service {
    /// Two-digit index label.
    pub number: &'static str,
    /// Service name.
    pub title: &'static str,
    /// One-paragraph pitch.
    pub description: &'static str,
}

/// Services in display order.
pub const SERVICES: [Service; 4] = [
    Service {
        number: "01",
        title: "AI/ML Solutions",
        description: "I design and build intelligent systems with LLMs, RAG pipelines, and self-refinement methods for smarter, context-aware user experiences across various AI-powered applications.",
    },
    Service {
        number: "02",
        title: "Full-Stack Web Development",
        description: "I develop modern, responsive web applications using React, Next.js, and Node.js with integrated APIs and cloud databases, focusing on performance, scalability, and exceptional user experiences.",
    },
    Service {
        number: "03",
        title: "Web3 & Blockchain",
        description: "I create decentralized platforms, NFT marketplaces, and AI-driven blockchain experiences on Solana and Ethereum. Building secure smart contracts and seamless wallet integrations for the next generation of Web3 applications.",
    },
    Service {
        number: "04",
        title: "Data Visualization",
        description: "I build interactive data dashboards, generative media tools, and immersive 3D user interfaces for digital storytelling. Transforming complex data into engaging visual narratives that drive insights and decision-making.",
    },
];

#[derive(Clone, Debug)]
struct Ring {
    rx: CheckpointSeries<f64>,
    ry: CheckpointSeries<f64>,
}

impl Ring {
    fn new<const N: usize>(inputs: [f64; N], rx: [f64; N], ry: [f64; N]) -> ScrollworkResult<Self> {
        Ok(Self {
            rx: CheckpointSeries::new(inputs, rx)?,
            ry: CheckpointSeries::new(inputs, ry)?,
        })
    }
}

/// Service section: rotating, morphing ellipse art plus the intro line reveal.
#[derive(Clone, Debug)]
pub struct ServiceScene {
    rotations: Vec<CheckpointSeries<f64>>,
    rings: Vec<Ring>,
    dot_shifts: Vec<CheckpointSeries<f64>>,
    opacities: Vec<CheckpointSeries<f64>>,
    intro: LineReveal,
}

impl ServiceScene {
    /// Build with the given intro line timing.
    #[tracing::instrument(level = "debug")]
    pub fn new(intro: RevealConfig) -> ScrollworkResult<Self> {
        let full = |to: f64| CheckpointSeries::new([0.0, 1.0], [0.0, to]);
        let pulse = |a: f64, b: f64| CheckpointSeries::new([0.0, 0.5, 1.0], [a, b, a]);

        Ok(Self {
            rotations: vec![full(360.0)?, full(-180.0)?, full(270.0)?, full(-450.0)?],
            rings: vec![
                Ring::new(
                    [0.0, 0.25, 0.5, 0.75, 1.0],
                    [80.0, 120.0, 80.0, 50.0, 80.0],
                    [80.0, 50.0, 80.0, 120.0, 80.0],
                )?,
                Ring::new(
                    [0.0, 0.33, 0.66, 1.0],
                    [120.0, 150.0, 100.0, 120.0],
                    [120.0, 100.0, 150.0, 120.0],
                )?,
                Ring::new([0.0, 0.5, 1.0], [160.0, 190.0, 160.0], [160.0, 130.0, 160.0])?,
                Ring::new(
                    [0.0, 0.4, 0.8, 1.0],
                    [200.0, 230.0, 180.0, 200.0],
                    [200.0, 180.0, 230.0, 200.0],
                )?,
            ],
            dot_shifts: vec![pulse(0.0, 15.0)?, pulse(0.0, -12.0)?],
            opacities: vec![pulse(0.25, 0.5)?, pulse(0.2, 0.45)?, pulse(0.15, 0.35)?],
            intro: LineReveal::new(intro, SERVICE_INTRO)?,
        })
    }

    /// Typed frame at `progress`.
    pub fn frame(&self, progress: Progress) -> ServiceFrame {
        let p = progress.get();
        ServiceFrame {
            rotations: sample_all(p, &self.rotations),
            radii: self
                .rings
                .iter()
                .map(|r| [interpolate(p, &r.rx), interpolate(p, &r.ry)])
                .collect(),
            dot_shifts: sample_all(p, &self.dot_shifts),
            opacities: sample_all(p, &self.opacities),
            intro: self.intro.sample(p),
            services: SERVICES.to_vec(),
        }
    }
}

fn sample_all(p: f64, series: &[CheckpointSeries<f64>]) -> Vec<f64> {
    series.iter().map(|s| interpolate(p, s)).collect()
}

impl Scene for ServiceScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Service
    }

    fn offset(&self) -> ScrollOffset {
        ScrollOffset::ENTER_TO_EXIT
    }

    fn sample(&self, progress: Progress) -> SceneFrame {
        SceneFrame::Service(self.frame(progress))
    }
}

/// Service outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ServiceFrame {
    /// Rotation in degrees for each ring group.
    pub rotations: Vec<f64>,
    /// `[rx, ry]` per ring.
    pub radii: Vec<[f64; 2]>,
    /// Orbiting dot offsets in px.
    pub dot_shifts: Vec<f64>,
    /// Pulsing stroke opacities.
    pub opacities: Vec<f64>,
    /// Intro lines.
    pub intro: Vec<LineFrame>,
    /// Static service list.
    pub services: Vec<Service>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/service.rs"]
mod tests;
