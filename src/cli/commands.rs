use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use crate::converter::{ConvertOptions, convert_archive};
use crate::utils::default_target_path;

/// Printed when the binary is started without a source archive
pub const USAGE: &str = "usage: mbox-comments source [target=source.json]";

#[derive(Parser, Debug)]
#[command(name = "mbox-comments")]
#[command(version)]
#[command(about = "Convert a blog comment mail archive into a JSON array", long_about = None)]
pub struct Cli {
    /// Mail archive to convert
    pub source: Option<PathBuf>,

    /// Output file [default: <SOURCE>.json]
    pub target: Option<PathBuf>,

    /// Log and skip comment blocks that cannot be parsed instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(source) = cli.source else {
        println!("{}", USAGE);
        return Ok(());
    };
    let target = cli.target.unwrap_or_else(|| default_target_path(&source));
    let options = ConvertOptions { skip_malformed: cli.skip_malformed };

    let summary = convert_archive(&source, &target, &options)?;

    if summary.skipped > 0 {
        info!(
            "Wrote {} comments to {} ({} skipped)",
            summary.converted,
            target.display(),
            summary.skipped
        );
    } else {
        info!("Wrote {} comments to {}", summary.converted, target.display());
    }

    Ok(())
}

// RUST_LOG takes precedence over --verbose
fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
