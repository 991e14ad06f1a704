//! Recorded track samples.

use serde::{Deserialize, Serialize};

/// A single recorded track sample.
///
/// Points are immutable once ingested. Their position in the containing
/// sequence (`0..N-1`) is the canonical reference used by markers and
/// segments. Elevation comes straight from the recording device and may
/// carry GPS noise; see [`crate::elevation`] for how it is smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    /// Elevation in meters. Absent in the source data means 0.
    #[serde(default)]
    pub ele: f64,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64, ele: f64) -> Self {
        Self { lat, lon, ele }
    }
}
