use std::path::PathBuf;

use clap::Subcommand;
use serde_json::json;

use crate::{gpx_import, render, session};

#[derive(Subcommand)]
pub enum TrackAction {
    /// Import a GPX file, replacing the current session track
    Import {
        /// Path to the GPX file
        file: PathBuf,
    },
    /// Show whole-track statistics
    Show {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TrackAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = session::load()?;

    match action {
        TrackAction::Import { file } => {
            let points = gpx_import::read_track_points(&file)?;
            engine.import_track(points)?;
            println!(
                "imported {} track points from {}",
                engine.points().len(),
                file.display()
            );
            session::save(&engine)?;
        }
        TrackAction::Show { json } => {
            if engine.points().is_empty() {
                println!("no track loaded");
                return Ok(());
            }
            let stats = engine.track_stats();
            let difficulty = engine.difficulty(stats.equivalent_km);
            if json {
                let out = json!({
                    "pointCount": engine.points().len(),
                    "stats": stats,
                    "difficulty": difficulty,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!(
                    "Full track ({}, {} points)",
                    difficulty.tier.label(),
                    engine.points().len()
                );
                render::print_stats(&stats);
            }
        }
    }
    Ok(())
}
