use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "habitmap", version, about = "Habit streak calendar renderer")]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a year calendar to PNG
    Render(commands::render::RenderArgs),
    /// Print streak statistics for a year
    Streaks(commands::streaks::StreaksArgs),
    /// Render the built-in sample calendar
    Demo(commands::demo::DemoArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Streaks(args) => commands::streaks::run(args),
        Commands::Demo(args) => commands::demo::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
