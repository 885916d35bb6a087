//! Manifest version stamping.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::clock::{BuildTimestamp, Clock, SystemClock};
use crate::config::StampConfig;
use crate::error::StampResult;
use crate::manifest::Manifest;
use crate::version::Version;

/// Outcome of a successful stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub manifest_path: PathBuf,
    pub previous_version: String,
    pub new_version: String,
    /// False for dry runs.
    pub written: bool,
}

/// Rewrites a manifest's version with the current build timestamp.
pub struct Stamper {
    config: StampConfig,
    clock: Box<dyn Clock>,
}

impl Stamper {
    /// Create a stamper that reads the system clock.
    pub fn new(config: StampConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: StampConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
        }
    }

    /// Stamp the configured manifest.
    ///
    /// Nothing is written unless the manifest parses and its version is
    /// valid.
    pub fn stamp(&self) -> StampResult<Stamp> {
        let mut manifest = Manifest::read(&self.config.manifest_path)?;
        let timestamp = BuildTimestamp::now(self.clock.as_ref());

        let previous = manifest.version()?.to_string();
        let version = Version::parse(&previous)?.with_build(timestamp.to_string());
        debug!("Base version {:?}, build {}", version.base, timestamp);

        let new_version = version.to_string();
        manifest.set_version(new_version.clone());

        if self.config.dry_run {
            info!("Dry run, leaving {:?} untouched", manifest.path());
        } else {
            manifest.write(self.config.indent)?;
        }

        info!("Build version set to: {}", new_version);

        Ok(Stamp {
            manifest_path: manifest.path().to_path_buf(),
            previous_version: previous,
            new_version,
            written: !self.config.dry_run,
        })
    }
}

/// Stamp the manifest at `path` with the current local time.
pub fn stamp(path: impl AsRef<Path>) -> StampResult<Stamp> {
    Stamper::new(StampConfig::new(path.as_ref())).stamp()
}
