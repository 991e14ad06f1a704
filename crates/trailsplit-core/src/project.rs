//! Versioned project file encoding and decoding.
//!
//! The current schema is `"2.0"`: full track points, typed markers, and
//! a save timestamp. Older files stored bare marker indices under
//! `markerIndices` (the earliest carried no version tag at all); those
//! decode through a migration branch that turns every index into a
//! plain split marker. New schema revisions get their own migration
//! branch; the current schema is never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProjectError;
use crate::marker::{MarkerKind, SplitMarker};
use crate::track::TrackPoint;

pub const CURRENT_VERSION: &str = "2.0";

pub type Result<T, E = ProjectError> = std::result::Result<T, E>;

/// On-disk shape of the current schema.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectFile<'a> {
    version: &'static str,
    track_points: &'a [TrackPoint],
    markers: &'a [SplitMarker],
    saved_at: DateTime<Utc>,
}

/// Raw decode target accepting every known schema at once. Which fields
/// are meaningful is decided by the version branch in [`decode`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    #[serde(default)]
    version: Option<String>,
    /// Kept as a raw value so "absent" and "not a sequence" stay
    /// distinguishable errors.
    #[serde(default)]
    track_points: Option<serde_json::Value>,
    #[serde(default)]
    markers: Option<Vec<SplitMarker>>,
    #[serde(default)]
    marker_indices: Option<Vec<usize>>,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
}

/// A fully decoded project, ready to swap into the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedProject {
    pub points: Vec<TrackPoint>,
    pub markers: Vec<SplitMarker>,
    pub saved_at: Option<DateTime<Utc>>,
}

/// Encode a project in the current schema, stamped with the current
/// time.
pub fn encode(points: &[TrackPoint], markers: &[SplitMarker]) -> Result<String> {
    let file = ProjectFile {
        version: CURRENT_VERSION,
        track_points: points,
        markers,
        saved_at: Utc::now(),
    };
    serde_json::to_string_pretty(&file).map_err(ProjectError::Encode)
}

/// Default file name for a save, carrying an ISO date suffix.
pub fn default_file_name(now: DateTime<Utc>) -> String {
    format!("trail-project-{}.json", now.format("%Y-%m-%d"))
}

/// Decode a project file of any supported schema version.
///
/// Never partially populates anything: the result is either a complete
/// [`DecodedProject`] or a [`ProjectError`] describing the first defect.
pub fn decode(text: &str) -> Result<DecodedProject> {
    let raw: RawProject = serde_json::from_str(text).map_err(ProjectError::Malformed)?;

    let points_value = raw.track_points.ok_or(ProjectError::MissingTrackPoints)?;
    if !points_value.is_array() {
        return Err(ProjectError::InvalidTrackPoints);
    }
    let points: Vec<TrackPoint> =
        serde_json::from_value(points_value).map_err(|_| ProjectError::InvalidTrackPoints)?;

    let markers = match raw.version.as_deref() {
        Some(CURRENT_VERSION) => raw.markers.unwrap_or_default(),
        // Pre-2.0 schemas (or untagged files) stored bare indices.
        None => migrate_legacy(raw.marker_indices),
        Some(version) if is_pre_2(version) => migrate_legacy(raw.marker_indices),
        Some(version) => return Err(ProjectError::UnsupportedVersion(version.to_string())),
    };

    for marker in &markers {
        if marker.point_index >= points.len() {
            return Err(ProjectError::MarkerOutOfRange {
                index: marker.point_index,
                point_count: points.len(),
            });
        }
    }

    Ok(DecodedProject {
        points,
        markers,
        saved_at: raw.saved_at,
    })
}

fn migrate_legacy(marker_indices: Option<Vec<usize>>) -> Vec<SplitMarker> {
    marker_indices
        .unwrap_or_default()
        .into_iter()
        .map(|point_index| SplitMarker::new(point_index, MarkerKind::Split))
        .collect()
}

fn is_pre_2(version: &str) -> bool {
    version
        .split('.')
        .next()
        .and_then(|major| major.parse::<u32>().ok())
        .is_some_and(|major| major < 2)
}
