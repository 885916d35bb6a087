//! Stamping configuration.

use std::path::PathBuf;

/// Manifest stamped when no path is given.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Stamping configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampConfig {
    /// Manifest to rewrite
    pub manifest_path: PathBuf,
    /// Spaces per indentation level when writing the manifest
    pub indent: usize,
    /// Compute the new version without writing it
    pub dry_run: bool,
}

impl StampConfig {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            indent: 2,
            dry_run: false,
        }
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for StampConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST)
    }
}
