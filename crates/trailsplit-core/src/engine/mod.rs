//! The trail segmentation engine.
//!
//! [`TrailEngine`] owns the full project state: the ordered track point
//! sequence, the sorted split-marker list, the effort settings, and the
//! undo history. Callers mutate state only through its operations, which
//! keep the marker ordering and the history bound intact. Segments and
//! statistics are derived from current state on every read, so a
//! mutation can never leave anything stale behind.
//!
//! The engine is gesture-agnostic: a map frontend resolves clicks and
//! drags into `(lat, lon)` pairs and calls [`TrailEngine::add_marker_at`]
//! or [`TrailEngine::move_marker_to`].

mod history;
pub use history::HistoryStack;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::difficulty::{self, Difficulty};
use crate::effort::{self, EffortSettings, SegmentStats};
use crate::error::{EngineError, Result};
use crate::geometry;
use crate::marker::{MarkerKind, SplitMarker};
use crate::project;
use crate::track::TrackPoint;

/// A contiguous run of track points between two consecutive markers (or
/// the track ends). Derived data; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub start_index: usize,
    pub end_index: usize,
    /// Position in the sorted marker list of the marker that closes
    /// this segment; `None` for the final segment.
    pub marker: Option<usize>,
}

/// The stateful segmentation and effort-estimation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailEngine {
    points: Vec<TrackPoint>,
    markers: Vec<SplitMarker>,
    #[serde(default)]
    settings: EffortSettings,
    #[serde(default)]
    history: HistoryStack,
}

impl TrailEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn markers(&self) -> &[SplitMarker] {
        &self.markers
    }

    pub fn settings(&self) -> EffortSettings {
        self.settings
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the track point nearest to `(lat, lon)`.
    ///
    /// This is how the presentation layer resolves click and drag-end
    /// positions onto the track.
    pub fn nearest_index(&self, lat: f64, lon: f64) -> Result<usize> {
        if self.points.is_empty() {
            return Err(EngineError::EmptyTrack);
        }
        Ok(geometry::nearest_index(&self.points, lat, lon))
    }

    /// Derive the contiguous segments induced by the current markers.
    ///
    /// Always `markers.len() + 1` segments covering `0..=N-1` with no
    /// gaps or overlaps: segment *i* runs from the previous marker's
    /// index (or 0) to marker *i*'s index, and the final segment ends at
    /// the last point. A single whole-track segment when no markers are
    /// set; empty when no track is loaded.
    pub fn segments(&self) -> Vec<Segment> {
        if self.points.is_empty() {
            return Vec::new();
        }

        let mut segments = Vec::with_capacity(self.markers.len() + 1);
        let mut start = 0;
        for (i, marker) in self.markers.iter().enumerate() {
            segments.push(Segment {
                start_index: start,
                end_index: marker.point_index,
                marker: Some(i),
            });
            start = marker.point_index;
        }
        segments.push(Segment {
            start_index: start,
            end_index: self.points.len() - 1,
            marker: None,
        });
        segments
    }

    /// Statistics for one derived segment under the current settings.
    ///
    /// A degenerate segment (zero or one point) yields all-zero stats.
    pub fn stats_for(&self, segment: &Segment) -> SegmentStats {
        let points = &self.points[segment.start_index..=segment.end_index];
        effort::compute_stats(points, &self.settings)
    }

    /// Per-segment statistics, in segment order.
    pub fn segment_stats(&self) -> Vec<SegmentStats> {
        self.segments().iter().map(|s| self.stats_for(s)).collect()
    }

    /// Field-wise sum of the per-segment statistics.
    ///
    /// Summed per segment rather than recomputed over the merged range,
    /// so the totals stay additive with the listed segments.
    pub fn cumulative_stats(&self) -> SegmentStats {
        self.segment_stats()
            .into_iter()
            .fold(SegmentStats::default(), |acc, s| acc + s)
    }

    /// Statistics for the whole track, ignoring markers.
    pub fn track_stats(&self) -> SegmentStats {
        effort::compute_stats(&self.points, &self.settings)
    }

    /// Difficulty of an effort value under the current fitness level.
    pub fn difficulty(&self, equivalent_km: f64) -> Difficulty {
        difficulty::classify(equivalent_km, self.settings.fitness_level)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the track with `points`, clearing markers and history.
    ///
    /// Rejects an empty sequence; the engine is unchanged on failure.
    pub fn import_track(&mut self, points: Vec<TrackPoint>) -> Result<()> {
        if points.is_empty() {
            return Err(EngineError::EmptyTrack);
        }
        debug!(point_count = points.len(), "track imported");
        self.points = points;
        self.markers.clear();
        self.history.clear();
        Ok(())
    }

    /// Insert a marker at `point_index`.
    ///
    /// Duplicate indices are accepted and produce a degenerate
    /// zero-length segment between the two markers.
    pub fn add_marker(&mut self, point_index: usize, kind: MarkerKind) -> Result<()> {
        self.check_point_index(point_index)?;
        self.snapshot();
        self.markers.push(SplitMarker::new(point_index, kind));
        self.sort_markers();
        debug!(point_index, kind = %kind, "marker added");
        Ok(())
    }

    /// Insert a marker at the track point nearest `(lat, lon)`; returns
    /// the resolved index.
    pub fn add_marker_at(&mut self, lat: f64, lon: f64, kind: MarkerKind) -> Result<usize> {
        let point_index = self.nearest_index(lat, lon)?;
        self.add_marker(point_index, kind)?;
        Ok(point_index)
    }

    /// Reposition the marker at list position `pos` to `new_point_index`.
    pub fn move_marker(&mut self, pos: usize, new_point_index: usize) -> Result<()> {
        self.check_marker_pos(pos)?;
        self.check_point_index(new_point_index)?;
        self.snapshot();
        self.markers[pos].point_index = new_point_index;
        self.sort_markers();
        debug!(pos, new_point_index, "marker moved");
        Ok(())
    }

    /// Reposition a marker to the track point nearest `(lat, lon)`;
    /// returns the resolved index.
    pub fn move_marker_to(&mut self, pos: usize, lat: f64, lon: f64) -> Result<usize> {
        let point_index = self.nearest_index(lat, lon)?;
        self.move_marker(pos, point_index)?;
        Ok(point_index)
    }

    /// Change the kind of the marker at list position `pos`.
    pub fn edit_marker_kind(&mut self, pos: usize, kind: MarkerKind) -> Result<()> {
        self.check_marker_pos(pos)?;
        self.snapshot();
        self.markers[pos].kind = kind;
        Ok(())
    }

    /// Remove the marker at list position `pos` and return it.
    pub fn delete_marker(&mut self, pos: usize) -> Result<SplitMarker> {
        self.check_marker_pos(pos)?;
        self.snapshot();
        let removed = self.markers.remove(pos);
        debug!(pos, point_index = removed.point_index, "marker deleted");
        Ok(removed)
    }

    /// Restore the marker layout captured before the last tracked
    /// mutation.
    ///
    /// `NothingToUndo` is a benign signal; the engine is unchanged.
    pub fn undo(&mut self) -> Result<()> {
        match self.history.pop() {
            Some(snapshot) => {
                self.markers = snapshot;
                Ok(())
            }
            None => Err(EngineError::NothingToUndo),
        }
    }

    /// Drop the track, markers, and history.
    pub fn clear(&mut self) {
        self.points.clear();
        self.markers.clear();
        self.history.clear();
    }

    /// Replace the effort settings; derived statistics reflect them on
    /// the next read.
    pub fn set_settings(&mut self, settings: EffortSettings) {
        self.settings = settings;
    }

    /// Encode the current project (points, markers, timestamp).
    pub fn save_project(&self) -> Result<String> {
        Ok(project::encode(&self.points, &self.markers)?)
    }

    /// Decode `text` and replace the full project state.
    ///
    /// All-or-nothing: on any decode failure the engine is untouched.
    /// Loading resets the undo history; undo never crosses a project
    /// boundary.
    pub fn load_project(&mut self, text: &str) -> Result<()> {
        let decoded = project::decode(text)?;
        debug!(
            point_count = decoded.points.len(),
            marker_count = decoded.markers.len(),
            "project loaded"
        );
        self.points = decoded.points;
        self.markers = decoded.markers;
        self.sort_markers();
        self.history.clear();
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn snapshot(&mut self) {
        self.history.push(self.markers.clone());
    }

    /// Marker ordering is an engine invariant, restored after every
    /// position change. The sort is stable, so equal indices keep their
    /// insertion order.
    fn sort_markers(&mut self) {
        self.markers.sort_by_key(|m| m.point_index);
    }

    fn check_point_index(&self, index: usize) -> Result<()> {
        if self.points.is_empty() {
            return Err(EngineError::EmptyTrack);
        }
        if index >= self.points.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }

    fn check_marker_pos(&self, pos: usize) -> Result<()> {
        if pos >= self.markers.len() {
            return Err(EngineError::IndexOutOfRange {
                index: pos,
                len: self.markers.len(),
            });
        }
        Ok(())
    }
}
