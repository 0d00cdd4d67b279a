//! `pixelfx` CLI - apply wave, grayscale, glitch and noise filters to an image.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pixelfx::{Config, Filter, Pipeline};

/// Run a chain of glitch-style filters over an image.
///
/// Example: `pixelfx in.png out.png -f wave:12 -f glitch -f noise:0.2 --seed 7`
#[derive(Parser, Debug)]
#[command(name = "pixelfx")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image to read.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the result; the extension picks the format.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Filter step, repeatable, run in the order given:
    /// `wave:AMPLITUDE`, `grayscale`, `glitch`, `noise:INTENSITY`.
    #[arg(short, long = "filter", value_name = "FILTER")]
    filters: Vec<Filter>,

    /// JPEG quality (1-100), ignored for other formats.
    #[arg(short, long, default_value_t = pixelfx::image::DEFAULT_JPEG_QUALITY, value_name = "INT")]
    quality: u8,

    /// Seed for glitch and noise; omit for a different result every run.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Log each filter step.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pixelfx=debug" } else { "pixelfx=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    anyhow::ensure!(
        args.input.is_file(),
        "no image at {}",
        args.input.display()
    );

    if args.filters.is_empty() {
        tracing::warn!("No filters given, the image is only re-encoded");
    }

    let steps = args
        .filters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");

    let mut pipeline = Pipeline::new(Config {
        filters: args.filters,
        output_quality: args.quality,
        seed: args.seed,
    })
    .context("invalid filter configuration")?;

    pipeline
        .process(&args.input, &args.output)
        .with_context(|| format!("could not filter {}", args.input.display()))?;

    println!(
        "{} -> {} [{}]",
        args.input.display(),
        args.output.display(),
        if steps.is_empty() { "no filters" } else { steps.as_str() }
    );

    Ok(())
}
