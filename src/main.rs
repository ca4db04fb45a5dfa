//! Gridlog - render JSON or delimited text as a bordered grid

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridlog::{Cell, Grid, GridLog, GridOptions, PartialOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gridlog")]
#[command(author = "Gridlog Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Render rows of values as a bordered text grid", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Treat input as text, one row per line, cells split on this string
    #[arg(short, long, value_name = "STR")]
    delimiter: Option<String>,

    /// Use plain ASCII borders
    #[arg(short, long)]
    ascii: bool,

    /// Spaces on each side of a cell
    #[arg(short, long, value_name = "N")]
    padding: Option<usize>,

    /// Indent width for structured values
    #[arg(short, long, value_name = "N")]
    indent: Option<usize>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "GRIDLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default options to the configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    fn flag_overrides(&self) -> PartialOptions {
        PartialOptions {
            structured_indent: self.indent,
            cell_padding: self.padding,
            emit_to_console: None,
            use_ascii_borders: self.ascii.then_some(true),
        }
    }

    /// Flags win over the file. Output always goes to stdout.
    fn resolve_options(&self, file: PartialOptions) -> PartialOptions {
        file.overlay(self.flag_overrides()).emit_to_console(true)
    }
}

fn setup_logging(verbosity: u8) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Rendered grids own stdout, so logs go to a file
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gridlog")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "gridlog.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| PartialOptions::default_path().filter(|path| path.exists()))
}

fn init_config(force: bool) -> Result<()> {
    let Some(path) = PartialOptions::default_path() else {
        anyhow::bail!("Could not determine a configuration directory.");
    };

    if path.exists() && !force {
        anyhow::bail!("Configuration already exists. Use --force to overwrite.");
    }

    GridOptions::default().save(&path)?;
    println!("Created {}", path.display());
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn parse_delimited(input: &str, delimiter: &str) -> Grid {
    let rows = input
        .lines()
        .map(|line| line.split(delimiter).map(Cell::from).collect())
        .collect();
    Grid::from_rows(rows)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the duration of the program
    let _logging_guard = setup_logging(cli.verbose)?;

    if let Some(Commands::Init { force }) = cli.command {
        return init_config(force);
    }

    let mut overrides = PartialOptions::default();
    if let Some(path) = config_path(cli.config.clone()) {
        tracing::info!(path = %path.display(), "loading options");
        overrides = PartialOptions::load(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    }
    let overrides = cli.resolve_options(overrides);

    let input = read_input(cli.input.as_deref())?;
    let grid = match &cli.delimiter {
        Some(delimiter) => parse_delimited(&input, delimiter),
        None => Grid::from_json(serde_json::from_str(&input).context("Input is not valid JSON")?),
    };

    let log = GridLog::new();
    if log.apply_options(overrides).render(grid)?.is_none() {
        tracing::warn!("no rows to render");
    }

    Ok(())
}
