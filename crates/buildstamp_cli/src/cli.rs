//! Command-line arguments and the stamp command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use buildstamp_core::{StampConfig, Stamper, DEFAULT_MANIFEST};

/// buildstamp - stamp a package manifest's version with the build time
#[derive(Parser, Debug)]
#[command(name = "buildstamp")]
#[command(version, about = "Stamp a package manifest's version with the build time")]
#[command(long_about = r#"
Rewrites the `version` field of a JSON package manifest so that its build
metadata is the current local time, e.g. 1.2.3 -> 1.2.3+2024.01.02.03.04.05.
Existing build metadata is replaced. All other fields are kept as they are.

Run without arguments to stamp ./package.json.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Manifest error (missing file, invalid JSON, bad version field)
"#)]
pub struct Cli {
    /// Manifest to stamp
    #[arg(short, long, env = "BUILDSTAMP_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Print the new version without writing the manifest
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(cli: &Cli) -> Result<()> {
    info!("Stamping manifest: {:?}", cli.manifest);

    let config = StampConfig::new(&cli.manifest).dry_run(cli.dry_run);
    let stamp = Stamper::new(config)
        .stamp()
        .with_context(|| format!("Failed to stamp {}", cli.manifest.display()))?;

    if !cli.quiet {
        if stamp.written {
            println!("Build version set to: {}", stamp.new_version);
        } else {
            println!("Build version would be: {}", stamp.new_version);
        }
    }

    Ok(())
}
