use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use timegrid_core::{
    layout, load_week, ConfigStore, FileConfigStore, LayoutOptions, TimetableSession, ViewMode,
};

#[derive(Args)]
pub struct LayoutArgs {
    /// Week JSON file (array of days, Sunday first)
    pub week: PathBuf,
    /// Show a single day (1 = Monday) instead of the whole week
    #[arg(long)]
    pub day: Option<usize>,
    /// Grid width, time axis included
    #[arg(long, default_value_t = 400.0)]
    pub width: f64,
    /// Viewport height; one hour row is a fifteenth of it
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,
    /// Do not write priority list changes back to the config
    #[arg(long)]
    pub no_persist: bool,
}

pub fn run(args: LayoutArgs, store: FileConfigStore) -> Result<(), Box<dyn std::error::Error>> {
    let week = load_week(&args.week)
        .map_err(|e| format!("cannot read week {}: {e}", args.week.display()))?;
    let view = match args.day {
        Some(selected) => ViewMode::Day { selected },
        None => ViewMode::Week,
    };
    let options = LayoutOptions::for_viewport(args.width, args.height);

    let model = if args.no_persist {
        let config = store.load()?;
        layout(&week, &config, view, &options)
    } else {
        let runtime = tokio::runtime::Runtime::new()?;
        let _guard = runtime.enter();
        let mut session = TimetableSession::open(Arc::new(store));
        let model = session.refresh(&week, view, &options);
        let report = runtime.block_on(session.flush());
        if report.failed > 0 {
            eprintln!("warning: course priority list could not be saved");
        }
        model
    };

    for warning in &model.warnings {
        tracing::warn!("{warning}");
    }
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}
