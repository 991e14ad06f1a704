use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod gpx_import;
mod render;
mod session;

#[derive(Parser)]
#[command(name = "trailsplit", version, about = "Trail segmentation and effort estimation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track import and overview
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Split marker editing
    Marker {
        #[command(subcommand)]
        action: commands::marker::MarkerAction,
    },
    /// Derived segments with statistics and totals
    Segments {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Undo the last marker edit
    Undo,
    /// Effort settings management
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Project file save/load
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Track { action } => commands::track::run(action),
        Commands::Marker { action } => commands::marker::run(action),
        Commands::Segments { json } => commands::segments::run(json),
        Commands::Undo => commands::undo::run(),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Project { action } => commands::project::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
