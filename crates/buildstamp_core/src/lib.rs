//! # buildstamp_core
//!
//! Build-version stamping for package manifests.
//!
//! A stamp replaces the build metadata of a manifest's `version` field with
//! the local wall-clock time of the build, leaving the base version and every
//! other field untouched:
//!
//! ```text
//! 1.2.3                     -> 1.2.3+2024.01.02.03.04.05
//! 1.2.3+2023.12.31.23.59.59 -> 1.2.3+2024.01.02.03.04.05
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use buildstamp_core::{StampConfig, Stamper};
//!
//! let config = StampConfig::new("package.json");
//! let stamp = Stamper::new(config).stamp().unwrap();
//! println!("Build version set to: {}", stamp.new_version);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod manifest;
pub mod stamper;
pub mod version;

pub use clock::{BuildTimestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use config::{StampConfig, DEFAULT_MANIFEST};
pub use error::{StampError, StampResult};
pub use manifest::Manifest;
pub use stamper::{stamp, Stamp, Stamper};
pub use version::Version;
