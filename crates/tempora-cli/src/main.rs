//! Tempora CLI - Command-line interface for the Tempora date normalizer.

use clap::Parser;
use tempora_cli::commands::{self, PropertyMode};
use tempora_cli::{Cli, Command, Config, Formatter};
use tempora_extractor::DatesNormalizer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> tempora_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent
    let path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_from(&path)?;
    debug!("Using configuration at {}", path.display());

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let mode = if cli.generic {
        PropertyMode::Generic
    } else {
        PropertyMode::Date
    };

    match cli.command {
        Command::Normalize(args) => {
            let normalizer = DatesNormalizer::new(config.normalizer.clone())?;
            commands::execute_normalize(args, &normalizer, mode, &formatter)?;
        }
        Command::Batch(args) => {
            let normalizer = DatesNormalizer::new(config.normalizer.clone())?;
            commands::execute_batch(args, &normalizer, mode, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &path, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `-v` flags win over `RUST_LOG`, which wins over `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
