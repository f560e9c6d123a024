//! `barline` binary: renders one status line and exits.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use barline::{Bar, Config};
use barline_render::{BarWriter, CursorGuard, OutputFormat};
use chrono::Utc;
use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "barline", version)]
#[command(about = "Print one status line for i3bar, dzen2, xmobar, lemonbar or a terminal")]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "PATH", default_value = "barline.yaml")]
    config: PathBuf,

    /// Output format, overriding the configuration
    #[arg(long, value_name = "FMT")]
    output_format: Option<OutputFormat>,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let mut config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(format) = args.output_format {
        config.general.output_format = format;
    }
    let format = config.general.output_format;
    tracing::info!(format = %format, modules = config.modules.len(), "starting");

    let _cursor = CursorGuard::new(format);
    let mut bar = Bar::new(config);
    let line = bar.render_line(Utc::now());

    let mut writer = BarWriter::new(io::stdout().lock(), format);
    writer.start().context("writing preamble")?;
    writer.write_line(&line).context("writing status line")?;
    Ok(())
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    // stdout belongs to the bar consumer.
    let filter = EnvFilter::try_from_env("BARLINE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
