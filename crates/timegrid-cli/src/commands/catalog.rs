use std::path::Path;

use timegrid_core::{load_week, CourseCatalog};

pub fn run(week: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let week = load_week(week).map_err(|e| format!("cannot read week {}: {e}", week.display()))?;
    for course in CourseCatalog::from_week(&week).iter() {
        println!("{course}");
    }
    Ok(())
}
