use clap::Subcommand;
use trailsplit_core::MarkerKind;

use crate::session;

#[derive(Subcommand)]
pub enum MarkerAction {
    /// Add a marker at a map position or track point index
    Add {
        /// Latitude of the clicked position
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude of the clicked position
        #[arg(long)]
        lon: Option<f64>,
        /// Track point index (alternative to --lat/--lon)
        #[arg(long)]
        index: Option<usize>,
        /// Marker kind: split, wild_camp, camping, hotel or rest
        #[arg(long, default_value = "split")]
        kind: MarkerKind,
    },
    /// Move a marker (addressed by its list position) to a new point
    Move {
        /// Marker position as shown by `marker list`
        pos: usize,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
        #[arg(long)]
        index: Option<usize>,
    },
    /// Change a marker's kind
    Kind {
        /// Marker position as shown by `marker list`
        pos: usize,
        kind: MarkerKind,
    },
    /// Delete a marker
    Delete {
        /// Marker position as shown by `marker list`
        pos: usize,
    },
    /// List markers in track order
    List {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

/// Resolve the `--index` / `--lat --lon` alternatives into a point index.
fn resolve_target(
    engine: &trailsplit_core::TrailEngine,
    index: Option<usize>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<usize, Box<dyn std::error::Error>> {
    match (index, lat, lon) {
        (Some(index), None, None) => Ok(index),
        (None, Some(lat), Some(lon)) => Ok(engine.nearest_index(lat, lon)?),
        _ => Err("provide either --index or both --lat and --lon".into()),
    }
}

pub fn run(action: MarkerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = session::load()?;

    match action {
        MarkerAction::Add { lat, lon, index, kind } => {
            let point_index = resolve_target(&engine, index, lat, lon)?;
            engine.add_marker(point_index, kind)?;
            println!("added {kind} marker at point {point_index}");
            session::save(&engine)?;
        }
        MarkerAction::Move { pos, lat, lon, index } => {
            let point_index = resolve_target(&engine, index, lat, lon)?;
            engine.move_marker(pos, point_index)?;
            println!("moved marker {pos} to point {point_index}");
            session::save(&engine)?;
        }
        MarkerAction::Kind { pos, kind } => {
            engine.edit_marker_kind(pos, kind)?;
            println!("marker {pos} is now {kind}");
            session::save(&engine)?;
        }
        MarkerAction::Delete { pos } => {
            let removed = engine.delete_marker(pos)?;
            println!(
                "deleted {} marker at point {}",
                removed.kind, removed.point_index
            );
            session::save(&engine)?;
        }
        MarkerAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(engine.markers())?);
            } else if engine.markers().is_empty() {
                println!("no markers");
            } else {
                for (pos, marker) in engine.markers().iter().enumerate() {
                    println!("{pos}: {} @ point {}", marker.kind, marker.point_index);
                }
            }
        }
    }
    Ok(())
}
