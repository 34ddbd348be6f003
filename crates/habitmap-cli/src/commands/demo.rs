use chrono::NaiveDate;
use clap::Args;
use habitmap_core::{ActivityLog, Locale};
use std::path::PathBuf;

use super::{build_renderer, load_config, output_dir};

const DEMO_YEAR: i32 = 2026;
const DEMO_LABEL: &str = "НЕ ЕСТЬ СЛАДКУЮ ЕДУ 🍰";

#[derive(Args)]
pub struct DemoArgs {
    /// Output PNG path (defaults to a unique name in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Label language: en or ru
    #[arg(long, default_value = "ru")]
    pub locale: Locale,
    /// Config file (defaults to ~/.config/habitmap/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Streak of Jan 3-13, a miss on the 14th, and a fresh start on the 15th.
pub fn demo_log() -> ActivityLog {
    let mut log = ActivityLog::new();
    if let (Some(first), Some(last), Some(restart)) = (
        NaiveDate::from_ymd_opt(DEMO_YEAR, 1, 3),
        NaiveDate::from_ymd_opt(DEMO_YEAR, 1, 13),
        NaiveDate::from_ymd_opt(DEMO_YEAR, 1, 15),
    ) {
        log.mark_range(first, last);
        log.mark(restart);
    }
    log
}

pub fn run(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let dir = output_dir(&config);
    let renderer = build_renderer(config, Some(args.locale), None)?;

    let log = demo_log();
    let artifact = match args.output {
        Some(path) => renderer.render_to_file(DEMO_YEAR, DEMO_LABEL, &log, &path)?,
        None => renderer.render_to_dir(DEMO_YEAR, DEMO_LABEL, &log, &dir)?,
    };
    println!("{}", artifact.path.display());
    Ok(())
}
