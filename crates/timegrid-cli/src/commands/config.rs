use clap::Subcommand;
use timegrid_core::{ConfigStore, FileConfigStore, TimetableConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "timetableOverlap", "timetablePriority")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value (JSON for "timetablePriority", "null" to disable)
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction, store: &FileConfigStore) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = store.load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = store.load()?;
            config.set(&key, &value)?;
            store.save(&config)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = store.load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            store.save(&TimetableConfig::default())?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
