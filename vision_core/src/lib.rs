//! `vision_core` — Radar vision: what a rotating radar "sees" of circular obstacles.
//!
//! # Module layout
//! - [`types`]      — Sample type, sampling constants, identifiers
//! - [`visibility`] — Visibility engine (sampled max-intensity profile)
//! - [`vision`]     — Observable holder of the latest profile
//! - [`shade`]      — Grayscale `#rrggbb` encoding of samples
//! - [`scene`]      — Coordinator wiring radar, obstacles and vision
//! - [`metrics`]    — Peak / lit-fraction summary of a profile

pub mod metrics;
pub mod scene;
pub mod shade;
pub mod types;
pub mod visibility;
pub mod vision;

pub use metrics::ProfileSummary;
pub use scene::Scene;
pub use shade::Shade;
pub use types::{ObstacleId, Sample, DEFAULT_SAMPLE_STEP};
pub use visibility::{compute_visibility, VisibilityConfig, VisibilityEngine};
pub use vision::Vision;
