use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gantt_grid::commands::Command;
use gantt_grid::{GridConfig, GridResult};

/// Compute Gantt grid-body geometry and print it as JSON
#[derive(Parser)]
#[command(name = "gantt-grid", version, about, long_about = None)]
struct Args {
    /// Grid configuration file (defaults to grid.json in the config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `gantt_grid=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Initialize logging on stderr so stdout carries only the JSON output.
fn init_logging(level: Option<&str>) {
    let env_filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> GridResult<()> {
    let config_path = args.config.unwrap_or_else(GridConfig::default_path);

    match args.command {
        Command::Layout(cmd) => println!("{}", cmd.execute(&config_path)?),
        Command::InitConfig(cmd) => println!("{}", cmd.execute(&config_path)?),
    }
    Ok(())
}
