//! Permissions Enhancer - headless inspector
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use penh_app::config::{load_settings, load_settings_file};
use permissions_enhancer::{inspect_file, Action};

/// Inspect how a permissions table is grouped, counted and collapsed
#[derive(Parser, Debug)]
#[command(name = "penh")]
#[command(about = "Inspect how a permissions table is grouped and collapsed", long_about = None)]
struct Args {
    /// Saved permissions page (XHTML)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Settings file (defaults to .penh/config.toml in the current directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Action to apply, in order: expand-all, collapse-all, collapse-inactive, toggle=NAME
    #[arg(long = "action", value_name = "ACTION")]
    actions: Vec<Action>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    penh_core::logging::init()?;

    let settings = match &args.config {
        Some(path) => load_settings_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            load_settings(&cwd)
        }
    };

    tracing::info!("Inspecting {}", args.file.display());
    let (report, warnings) = inspect_file(&args.file, settings, &args.actions)?;

    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
