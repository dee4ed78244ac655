//! Persisting generated configurations.
//!
//! Output layout for a template `tuning.properties`:
//!
//! ```text
//! <output_dir>/
//!   tuning-min@1-max@5.ini
//!   tuning-min@2-max@5.ini
//!   ...
//!   tuning-manifest.yaml     # only with --manifest
//! ```
//!
//! Every file starts with `#Config #<n>`, where `n` counts written files from
//! 1 regardless of how identifiers are formed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sweepgen_core::{Configuration, properties};
use thiserror::Error;

use crate::io::atomic_write;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Manifest(String),
}

/// One written configuration, as listed in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 1-based, matches the `Config #<n>` header
    pub index: usize,
    pub identifier: String,
    pub file: String,
    /// Resolved values of the properties that were swept
    pub swept: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub template: String,
    pub configurations: Vec<ManifestEntry>,
}

/// Writes configurations as `<base>-<identifier>.ini` files.
///
/// Identifiers are not guaranteed unique by the expansion; a repeated one is
/// written as `<base>-<identifier>-<n>.ini` instead of overwriting.
#[derive(Debug)]
pub struct ConfigWriter {
    output_dir: PathBuf,
    base_name: String,
    swept: Vec<String>,
    written: usize,
    used_files: HashSet<String>,
    entries: Vec<ManifestEntry>,
}

impl ConfigWriter {
    /// `swept` names the properties whose values appear in the manifest.
    pub fn new(output_dir: &Path, base_name: &str, swept: Vec<String>) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            base_name: base_name.to_string(),
            swept,
            written: 0,
            used_files: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Number of files written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write one configuration and return the path written.
    pub fn write(
        &mut self,
        identifier: &str,
        configuration: &Configuration,
    ) -> Result<PathBuf, WriteError> {
        let index = self.written + 1;
        let file_name = self.file_name_for(identifier, index);
        let path = self.output_dir.join(&file_name);

        let content = properties::render(configuration, &format!("Config #{index}"));
        atomic_write(&path, &content).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(file = %path.display(), identifier, "wrote configuration");

        let swept = self
            .swept
            .iter()
            .filter_map(|name| {
                configuration
                    .get(name)
                    .map(|value| (name.clone(), value.to_string()))
            })
            .collect();
        self.entries.push(ManifestEntry {
            index,
            identifier: identifier.to_string(),
            file: file_name,
            swept,
        });
        self.written = index;

        Ok(path)
    }

    /// Write `<base>-manifest.yaml` listing every file written so far.
    pub fn write_manifest(&self) -> Result<PathBuf, WriteError> {
        let manifest = Manifest {
            template: self.base_name.clone(),
            configurations: self.entries.clone(),
        };
        let yaml =
            serde_saphyr::to_string(&manifest).map_err(|e| WriteError::Manifest(e.to_string()))?;

        let path = self
            .output_dir
            .join(format!("{}-manifest.yaml", sanitize_filename(&self.base_name)));
        atomic_write(&path, &yaml).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn file_name_for(&mut self, identifier: &str, index: usize) -> String {
        let stem = sanitize_filename(&format!("{}-{}", self.base_name, identifier));
        let preferred = format!("{stem}.ini");
        if self.used_files.insert(preferred.clone()) {
            return preferred;
        }

        tracing::warn!(
            identifier,
            index,
            "identifier already used in this run, appending sequence number"
        );
        (index..)
            .map(|n| format!("{stem}-{n}.ini"))
            .find(|candidate| self.used_files.insert(candidate.clone()))
            .unwrap_or(preferred)
    }
}

/// Replace characters that are unsafe in file names.
///
/// Identifier characters (`.`, `@`, `-`) are kept.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use sweepgen_core::PropertyMap;
    use tempfile::TempDir;

    fn config(pairs: &[(&str, &str)]) -> Configuration {
        let properties: PropertyMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Configuration::from(properties)
    }

    #[test]
    fn test_write_names_and_header() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = ConfigWriter::new(temp_dir.path(), "tuning", vec!["depth".to_string()]);

        let first = writer.write("4", &config(&[("depth", "4"), ("name", "x")])).unwrap();
        let second = writer.write("6", &config(&[("depth", "6"), ("name", "x")])).unwrap();

        assert_eq!(first, temp_dir.path().join("tuning-4.ini"));
        assert_eq!(second, temp_dir.path().join("tuning-6.ini"));
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            "#Config #1\ndepth=4\nname=x\n"
        );
        assert!(fs::read_to_string(&second).unwrap().starts_with("#Config #2\n"));
        assert_eq!(writer.written(), 2);
    }

    #[test]
    fn test_repeated_identifier_gets_sequence_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = ConfigWriter::new(temp_dir.path(), "tuning", vec![]);

        let a = writer.write("dup", &config(&[("v", "1")])).unwrap();
        let b = writer.write("dup", &config(&[("v", "2")])).unwrap();

        assert_eq!(a, temp_dir.path().join("tuning-dup.ini"));
        assert_eq!(b, temp_dir.path().join("tuning-dup-2.ini"));
        assert_eq!(fs::read_to_string(&a).unwrap(), "#Config #1\nv=1\n");
        assert_eq!(fs::read_to_string(&b).unwrap(), "#Config #2\nv=2\n");
    }

    #[test]
    fn test_sequence_suffix_skips_names_already_taken() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = ConfigWriter::new(temp_dir.path(), "tuning", vec![]);

        writer.write("x-3", &config(&[("v", "1")])).unwrap();
        writer.write("x", &config(&[("v", "2")])).unwrap();
        let third = writer.write("x", &config(&[("v", "3")])).unwrap();

        assert_eq!(third, temp_dir.path().join("tuning-x-4.ini"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("tuning-x-3.ini")).unwrap(),
            "#Config #1\nv=1\n"
        );
        assert_eq!(fs::read_to_string(&third).unwrap(), "#Config #3\nv=3\n");
    }

    #[test]
    fn test_manifest_lists_swept_values() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = ConfigWriter::new(temp_dir.path(), "tuning", vec!["a".to_string()]);
        writer.write("1", &config(&[("a", "1"), ("b", "fixed")])).unwrap();
        writer.write("2", &config(&[("a", "2"), ("b", "fixed")])).unwrap();

        let path = writer.write_manifest().unwrap();
        assert_eq!(path, temp_dir.path().join("tuning-manifest.yaml"));

        let manifest: Manifest =
            serde_saphyr::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(manifest.template, "tuning");
        assert_eq!(manifest.configurations.len(), 2);
        assert_eq!(manifest.configurations[1].file, "tuning-2.ini");
        assert_eq!(manifest.configurations[1].swept.get("a").map(String::as_str), Some("2"));
        assert!(!manifest.configurations[1].swept.contains_key("b"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = ConfigWriter::new(&temp_dir.path().join("absent"), "tuning", vec![]);
        let err = writer.write("0", &config(&[("a", "1")])).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
        assert_eq!(writer.written(), 0);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("tuning-min@1-max@0.5"), "tuning-min@1-max@0.5");
        assert_eq!(sanitize_filename("a/b c:d"), "a_b_c_d");
    }
}
