//! Split markers: user-placed segment boundaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a marker stands for on the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Split,
    WildCamp,
    Camping,
    Hotel,
    Rest,
}

impl MarkerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerKind::Split => "split",
            MarkerKind::WildCamp => "wild_camp",
            MarkerKind::Camping => "camping",
            MarkerKind::Hotel => "hotel",
            MarkerKind::Rest => "rest",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split" => Ok(MarkerKind::Split),
            "wild_camp" => Ok(MarkerKind::WildCamp),
            "camping" => Ok(MarkerKind::Camping),
            "hotel" => Ok(MarkerKind::Hotel),
            "rest" => Ok(MarkerKind::Rest),
            other => Err(format!(
                "unknown marker kind `{other}` (expected split, wild_camp, camping, hotel or rest)"
            )),
        }
    }
}

/// A user-placed annotation at a track index that creates a segment
/// boundary.
///
/// `point_index` references a position in the track point sequence; the
/// marker does not own the point. The engine keeps its marker list
/// sorted ascending by `point_index` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMarker {
    #[serde(rename = "pointIndex")]
    pub point_index: usize,
    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

impl SplitMarker {
    pub fn new(point_index: usize, kind: MarkerKind) -> Self {
        Self { point_index, kind }
    }
}
