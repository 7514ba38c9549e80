//! `alphastrip` CLI - Flatten transparent PNG files onto white, in place.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alphastrip::image::Compression;
use alphastrip::{AlphaStripper, Config, ConsoleProgress, PalettePolicy, DEFAULT_PATTERN};

/// Remove alpha channels from PNG files by compositing them onto white.
///
/// Matching files are overwritten in place; no backup is made.
#[derive(Parser, Debug)]
#[command(name = "alphastrip")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the images.
    #[arg(value_name = "DIRECTORY", env = "ALPHASTRIP_DIR")]
    directory: PathBuf,

    /// File-name glob selecting which files to process.
    #[arg(short, long, default_value = DEFAULT_PATTERN, env = "ALPHASTRIP_PATTERN")]
    pattern: String,

    /// Alpha-blend palette images with a transparency key instead of pasting them opaquely.
    #[arg(long)]
    blend_palette: bool,

    /// PNG compression used when rewriting files.
    #[arg(long, value_enum, default_value_t = CompressionArg::Best)]
    compression: CompressionArg,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CompressionArg {
    Fast,
    Default,
    Best,
}

impl From<CompressionArg> for Compression {
    fn from(value: CompressionArg) -> Self {
        match value {
            CompressionArg::Fast => Self::Fast,
            CompressionArg::Default => Self::Default,
            CompressionArg::Best => Self::Best,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the progress lines
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("alphastrip={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    // Per-file errors are reported on stdout and do not change the exit status
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        palette_policy: if args.blend_palette {
            PalettePolicy::Blend
        } else {
            PalettePolicy::Opaque
        },
        compression: args.compression.into(),
    };

    let stripper = AlphaStripper::new(config);
    let mut console = ConsoleProgress::new(io::stdout().lock());

    let report = stripper
        .process_with(&args.directory, &args.pattern, &mut console)
        .with_context(|| format!("Failed to process {}", args.directory.display()))?;

    tracing::info!(
        "{} fixed, {} skipped, {} failed",
        report.fixed(),
        report.skipped(),
        report.errors()
    );

    Ok(())
}
