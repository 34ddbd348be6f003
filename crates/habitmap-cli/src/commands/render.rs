use chrono::{Datelike, Local};
use clap::Args;
use habitmap_core::{ActivityLog, Locale};
use std::path::PathBuf;

use super::{build_renderer, load_config, output_dir};

#[derive(Args)]
pub struct RenderArgs {
    /// Habit name shown as the title
    #[arg(short, long)]
    pub label: String,
    /// JSON file mapping YYYY-MM-DD to true/false
    #[arg(short, long)]
    pub entries: PathBuf,
    /// Calendar year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,
    /// Output PNG path (defaults to a unique name in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Label language: en or ru
    #[arg(long)]
    pub locale: Option<Locale>,
    /// Quality multiplier
    #[arg(long)]
    pub multiplier: Option<f64>,
    /// Config file (defaults to ~/.config/habitmap/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let dir = output_dir(&config);
    let renderer = build_renderer(config, args.locale, args.multiplier)?;

    let year = args.year.unwrap_or_else(|| Local::now().year());
    let log = ActivityLog::load(&args.entries)?;

    let artifact = match args.output {
        Some(path) => renderer.render_to_file(year, &args.label, &log, &path)?,
        None => renderer.render_to_dir(year, &args.label, &log, &dir)?,
    };
    println!("{}", artifact.path.display());
    Ok(())
}
