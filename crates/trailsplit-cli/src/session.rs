//! Persisted engine session.
//!
//! The live engine state (track, markers, undo history) is kept as a
//! JSON blob in the data directory so consecutive CLI invocations act on
//! the same session. The effort settings are refreshed from the settings
//! store on every load; the store is their source of truth.

use trailsplit_core::{storage, SettingsStore, TrailEngine};

const SESSION_FILE: &str = "session.json";

pub fn load() -> Result<TrailEngine, Box<dyn std::error::Error>> {
    let path = storage::data_dir()?.join(SESSION_FILE);
    let mut engine = match std::fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => TrailEngine::new(),
    };

    let settings = SettingsStore::open()?.load_or_default();
    engine.set_settings(settings);
    Ok(engine)
}

pub fn save(engine: &TrailEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    std::fs::write(storage::data_dir()?.join(SESSION_FILE), json)?;
    Ok(())
}
