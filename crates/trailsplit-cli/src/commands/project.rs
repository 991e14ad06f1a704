use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use trailsplit_core::project;

use crate::session;

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Write the current project to a JSON file
    Save {
        /// Output path; defaults to trail-project-YYYY-MM-DD.json
        path: Option<PathBuf>,
    },
    /// Load a project file, replacing the session
    Load {
        /// Path to a project JSON file (current or legacy schema)
        path: PathBuf,
    },
    /// Drop the current session state
    Clear,
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = session::load()?;

    match action {
        ProjectAction::Save { path } => {
            let text = engine.save_project()?;
            let path = path.unwrap_or_else(|| PathBuf::from(project::default_file_name(Utc::now())));
            std::fs::write(&path, text)?;
            println!("saved project to {}", path.display());
        }
        ProjectAction::Load { path } => {
            let text = std::fs::read_to_string(&path)?;
            engine.load_project(&text)?;
            println!(
                "loaded {} track points and {} markers from {}",
                engine.points().len(),
                engine.markers().len(),
                path.display()
            );
            session::save(&engine)?;
        }
        ProjectAction::Clear => {
            engine.clear();
            session::save(&engine)?;
            println!("session cleared");
        }
    }
    Ok(())
}
