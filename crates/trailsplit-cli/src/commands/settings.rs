use clap::Subcommand;
use trailsplit_core::{EffortSettings, SettingsStore};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print a setting (fitness_level or backpack_weight_kg)
    Get { key: String },
    /// Update a setting
    Set { key: String, value: String },
    /// Print all settings as JSON
    List,
    /// Restore default settings
    Reset,
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::open()?;

    match action {
        SettingsAction::Get { key } => {
            let settings = store.load_or_default();
            match key.as_str() {
                "fitness_level" => println!("{}", settings.fitness_level),
                "backpack_weight_kg" => println!("{}", settings.backpack_weight_kg),
                other => return Err(format!("unknown key: {other}").into()),
            }
        }
        SettingsAction::Set { key, value } => {
            let mut settings = store.load_or_default();
            match key.as_str() {
                "fitness_level" => {
                    settings.fitness_level = value
                        .parse()
                        .map_err(|_| format!("cannot parse '{value}' as a fitness level"))?;
                }
                "backpack_weight_kg" => {
                    settings.backpack_weight_kg = value
                        .parse()
                        .map_err(|_| format!("cannot parse '{value}' as a weight"))?;
                }
                other => return Err(format!("unknown key: {other}").into()),
            }
            store.save(&settings)?;
            println!("ok");
        }
        SettingsAction::List => {
            let settings = store.load_or_default();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Reset => {
            store.save(&EffortSettings::default())?;
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
