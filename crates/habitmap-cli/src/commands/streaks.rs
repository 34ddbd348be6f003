use chrono::{Datelike, Local};
use clap::Args;
use habitmap_core::{ActivityLog, StreakMap};
use std::path::PathBuf;

#[derive(Args)]
pub struct StreaksArgs {
    /// JSON file mapping YYYY-MM-DD to true/false
    #[arg(short, long)]
    pub entries: PathBuf,
    /// Calendar year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,
}

pub fn run(args: StreaksArgs) -> Result<(), Box<dyn std::error::Error>> {
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let log = ActivityLog::load(&args.entries)?;
    let summary = StreakMap::compute(year, &log).summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
