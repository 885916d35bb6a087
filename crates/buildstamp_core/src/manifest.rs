//! Package manifest reading and writing.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StampError, StampResult};

/// Name of the field that carries the version string.
pub const VERSION_FIELD: &str = "version";

/// A JSON manifest loaded in full. Key order is kept as read.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn read(path: impl AsRef<Path>) -> StampResult<Self> {
        let path = path.as_ref();
        debug!("Reading manifest from {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StampError::NotFound(path.to_path_buf()),
            _ => StampError::Io(e),
        })?;

        // Editors on some platforms prepend a byte-order mark
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        Self::parse(path, content)
    }

    /// Parse manifest content that was read from `path`.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> StampResult<Self> {
        let path = path.into();
        match serde_json::from_str::<Value>(content)? {
            Value::Object(document) => Ok(Self { path, document }),
            other => Err(StampError::InvalidFormat {
                path,
                message: format!("expected a JSON object, found {}", kind_of(&other)),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw `version` string.
    pub fn version(&self) -> StampResult<&str> {
        match self.document.get(VERSION_FIELD) {
            Some(Value::String(version)) => Ok(version),
            Some(other) => Err(StampError::InvalidFormat {
                path: self.path.clone(),
                message: format!("`{}` must be a string, found {}", VERSION_FIELD, kind_of(other)),
            }),
            None => Err(StampError::MissingField(VERSION_FIELD.to_string())),
        }
    }

    /// Replace the `version` string in place, keeping its position.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.document
            .insert(VERSION_FIELD.to_string(), Value::String(version.into()));
    }

    /// Render the manifest with `indent` spaces per level and a trailing newline.
    pub fn to_json(&self, indent: usize) -> StampResult<String> {
        let indent = vec![b' '; indent];
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        self.document.serialize(&mut ser)?;
        buf.push(b'\n');

        String::from_utf8(buf).map_err(|e| StampError::InvalidFormat {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Overwrite the manifest file.
    ///
    /// Content goes to a temporary file next to the manifest which then
    /// replaces it, so readers see either the old or the new file in full.
    /// A symlinked manifest is written through to its target.
    pub fn write(&self, indent: usize) -> StampResult<()> {
        let content = self.to_json(indent)?;

        let target = match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(StampError::Io(e)),
        };
        debug!("Writing manifest to {:?}", target);

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(&target) {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }

        tmp.persist(&target).map_err(|e| StampError::Persist {
            path: target.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_version_field() {
        let manifest = Manifest::parse("package.json", r#"{"name": "app", "version": "1.2.3"}"#).unwrap();
        assert_eq!(manifest.version().unwrap(), "1.2.3");
    }

    #[test]
    fn test_missing_version() {
        let manifest = Manifest::parse("package.json", r#"{"name": "app"}"#).unwrap();
        assert!(matches!(manifest.version(), Err(StampError::MissingField(f)) if f == "version"));
    }

    #[test]
    fn test_non_string_version() {
        let manifest = Manifest::parse("package.json", r#"{"version": 3}"#).unwrap();
        assert!(matches!(manifest.version(), Err(StampError::InvalidFormat { .. })));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = Manifest::parse("package.json", r#"["1.2.3"]"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, found an array"));
    }

    #[test]
    fn test_to_json_keeps_key_order_and_indents() {
        let mut manifest = Manifest::parse(
            "package.json",
            r#"{"name":"app","version":"1.0.0","scripts":{"build":"tsc"},"private":true}"#,
        )
        .unwrap();
        manifest.set_version("1.0.0+2024.01.02.03.04.05");

        let expected = "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0+2024.01.02.03.04.05\",\n  \"scripts\": {\n    \"build\": \"tsc\"\n  },\n  \"private\": true\n}\n";
        assert_eq!(manifest.to_json(2).unwrap(), expected);
    }

    #[test]
    fn test_read_skips_byte_order_mark() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, "\u{feff}{\"version\": \"1.2.3\"}").unwrap();

        let mut manifest = Manifest::read(&path).unwrap();
        assert_eq!(manifest.version().unwrap(), "1.2.3");

        manifest.set_version("1.2.3+2024.01.02.03.04.05");
        manifest.write(2).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"version\": \"1.2.3+2024.01.02.03.04.05\"\n}\n"
        );
    }

    #[test]
    fn test_large_numbers_round_trip_exactly() {
        let manifest = Manifest::parse(
            "package.json",
            r#"{"version":"1.0.0","build":12345678901234567890123,"ratio":0.10000000000000000555}"#,
        )
        .unwrap();

        let json = manifest.to_json(2).unwrap();
        assert!(json.contains("\"build\": 12345678901234567890123,"));
        assert!(json.contains("\"ratio\": 0.10000000000000000555\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_follows_symlink() {
        let temp = tempdir().unwrap();
        let real = temp.path().join("real.json");
        let link = temp.path().join("package.json");
        fs::write(&real, r#"{"version": "1.2.3"}"#).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut manifest = Manifest::read(&link).unwrap();
        manifest.set_version("1.2.3+2024.01.02.03.04.05");
        manifest.write(2).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(&real).unwrap(),
            "{\n  \"version\": \"1.2.3+2024.01.02.03.04.05\"\n}\n"
        );
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);
    }
}
