//! Error types for trailsplit-core.
//!
//! Every caller-visible failure is distinguishable by kind so a frontend
//! can render an appropriate message. Numerical computations (distance,
//! smoothing, statistics) are total and never produce an error.

use thiserror::Error;

/// Errors surfaced by engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Track import or point lookup against an empty point sequence.
    #[error("track has no points")]
    EmptyTrack,

    /// A track point index or marker list position outside the valid
    /// range. Defensive boundary check; the public API should not be
    /// able to produce one through normal use.
    #[error("index {index} out of range (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Undo requested with an empty history. Benign signal: the engine
    /// state is unchanged.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Project decoding failed; the live state was left untouched.
    #[error("invalid project file: {0}")]
    Project(#[from] ProjectError),
}

/// Errors produced while encoding or decoding a project file.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("not valid JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("missing required field `trackPoints`")]
    MissingTrackPoints,

    #[error("`trackPoints` is not a sequence of track points")]
    InvalidTrackPoints,

    #[error("unsupported project version `{0}`")]
    UnsupportedVersion(String),

    #[error("marker index {index} out of range for {point_count} track points")]
    MarkerOutOfRange { index: usize, point_count: usize },

    #[error("failed to encode project: {0}")]
    Encode(serde_json::Error),
}

/// Errors from the settings store.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read/write settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
