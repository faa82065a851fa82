//! # Flyer Layout CLI
//!
//! Usage:
//!   flyer-layout flyer.json -o plan.json
//!   cat flyer.json | flyer-layout
//!   flyer-layout --example > flyer.json

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use flyer_layout::document::FlyerDocument;
use flyer_layout::layout::capacity::LayoutConstants;
use flyer_layout::layout::LayoutEngine;

/// Compute the page plan of a saved flyer layout.
#[derive(Debug, Parser)]
#[command(name = "flyer-layout", version, about)]
struct Cli {
    /// Layout document to read. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write the plan here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with header/footer/divider reserves.
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Print a sample layout document and exit.
    #[arg(long)]
    example: bool,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Logging is best-effort; a second logger is the only failure mode.
    let _ = WriteLogger::init(level, Config::default(), io::stderr());

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        eprintln!("✗ {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.example {
        print!("{}", example_flyer_json());
        return Ok(());
    }

    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let engine = match &cli.constants {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let constants: LayoutConstants = serde_json::from_str(&json)
                .with_context(|| format!("Invalid layout constants in {}", path.display()))?;
            LayoutEngine::with_constants(constants)
        }
        None => LayoutEngine::new(),
    };

    let document = FlyerDocument::from_json(&input)?;
    let plan = engine.layout(&document)?;

    let json = if cli.compact {
        serde_json::to_string(&plan)?
    } else {
        serde_json::to_string_pretty(&plan)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote plan to {}", path.display());
            eprintln!("✓ {} pages written to {}", plan.page_count(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn example_flyer_json() -> &'static str {
    r##"{
  "paperSize": "a4",
  "orientation": "portrait",
  "columns": 3,
  "layout": { "cardHeight": 280, "rowGap": 16 },
  "header": { "show": true },
  "footer": { "showFooter": true },
  "products": [
    { "id": "d1", "type": "divider", "name": "Açougue" },
    { "id": "1", "name": "Picanha Bovina Premium", "isHighlight": true, "cols": 2 },
    { "id": "2", "name": "Coxa com Sobrecoxa" },
    { "id": "3", "name": "Acém Bovino Picado" },
    { "id": "4", "name": "Linguiça Toscana" },
    { "id": "5", "name": "Bife de Chorizo" },
    { "id": "d2", "type": "divider", "name": "Hortifruti" },
    { "id": "6", "name": "Tomate Italiano" },
    { "id": "7", "name": "Banana Prata" },
    { "id": "8", "name": "Alface Crespa" },
    { "id": "9", "name": "Melancia", "rows": 2 },
    { "id": "10", "name": "Batata Inglesa" },
    { "id": "11", "name": "Cebola" }
  ]
}
"##
}
