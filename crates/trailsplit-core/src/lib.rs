//! # Trailsplit Core Library
//!
//! Core business logic for Trailsplit, a hiking trail segmentation and
//! effort-estimation tool. All state lives behind [`TrailEngine`]; the
//! CLI (and any map frontend) is a thin presentation layer over this
//! crate that turns gestures and commands into engine operations.
//!
//! ## Architecture
//!
//! - **Engine**: [`TrailEngine`] owns the track, the sorted split-marker
//!   list, the effort settings, and a bounded undo history. Segments and
//!   statistics are derived from current state on every read.
//! - **Effort model**: haversine distances, smoothed elevation gain and
//!   loss, and the equivalent-km/hours formulas parameterized by
//!   [`EffortSettings`].
//! - **Storage**: versioned JSON project files with legacy migration,
//!   and a TOML settings store.
//!
//! ## Key Components
//!
//! - [`TrailEngine`]: segmentation engine and single owner of state
//! - [`compute_stats`]: per-segment statistics
//! - [`classify`]: fitness-adjusted difficulty tiers
//! - [`SettingsStore`]: persisted effort settings

pub mod difficulty;
pub mod effort;
pub mod elevation;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod project;
pub mod storage;
pub mod track;

pub use difficulty::{classify, Difficulty, Tier};
pub use effort::{compute_stats, EffortSettings, SegmentStats};
pub use engine::{Segment, TrailEngine};
pub use error::{EngineError, ProjectError, SettingsError};
pub use marker::{MarkerKind, SplitMarker};
pub use storage::SettingsStore;
pub use track::TrackPoint;
