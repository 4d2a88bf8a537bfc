use clap::Subcommand;
use timegrid_core::{ConfigStore, FileConfigStore};

#[derive(Subcommand)]
pub enum PriorityAction {
    /// Show the stored course priority list, highest first
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PriorityAction, store: &FileConfigStore) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PriorityAction::Show { json } => {
            let config = store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config.timetable_priority)?);
            } else if !config.priority_enabled() {
                println!("priority ordering disabled");
            } else {
                for (rank, course) in config.priority_list().as_slice().iter().enumerate() {
                    println!("{:>3}. {course}", rank + 1);
                }
            }
        }
    }
    Ok(())
}
