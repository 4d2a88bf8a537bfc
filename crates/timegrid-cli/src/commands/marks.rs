use std::path::PathBuf;

use clap::Subcommand;
use timegrid_core::{average_mark, Mark};

#[derive(Subcommand)]
pub enum MarksAction {
    /// Average of the numeric marks in a JSON file
    Average {
        /// JSON array of marks
        file: PathBuf,
    },
}

pub fn run(action: MarksAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MarksAction::Average { file } => {
            let content = std::fs::read_to_string(&file)
                .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
            let marks: Vec<Mark> = serde_json::from_str(&content)?;
            match average_mark(&marks) {
                Some(avg) => println!("{avg:.2}"),
                None => println!("no numeric marks"),
            }
        }
    }
    Ok(())
}
