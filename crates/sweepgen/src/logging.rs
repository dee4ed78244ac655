//! Tracing setup for the command-line tool.
//!
//! Logs go to stderr by default. With a log file they are appended to it, and
//! a file that grew past [`LogRotation::max_bytes`] is first cut down to its
//! most recent [`LogRotation::keep_bytes`].

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::io::atomic_write;

const MIB: u64 = 1024 * 1024;

/// Size limits for the log file, configurable under `log_rotation` in
/// `config.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogRotation {
    /// Truncate once the file is larger than this
    pub max_bytes: u64,
    /// Bytes of recent log kept after truncation
    pub keep_bytes: u64,
}

impl Default for LogRotation {
    fn default() -> Self {
        Self {
            max_bytes: 5 * MIB,
            keep_bytes: MIB,
        }
    }
}

impl LogRotation {
    /// Cut `path` down to its last `keep_bytes` if it exceeds `max_bytes`.
    ///
    /// Returns whether the file was truncated. The kept tail starts at a line
    /// boundary.
    fn apply(&self, path: &Path) -> io::Result<bool> {
        let len = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if len <= self.max_bytes {
            return Ok(false);
        }

        let mut tail = Vec::new();
        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(self.keep_bytes)))?;
        file.read_to_end(&mut tail)?;

        let tail = String::from_utf8_lossy(&tail);
        let kept = match tail.find('\n') {
            Some(newline) => &tail[newline + 1..],
            None => &tail[..],
        };
        atomic_write(
            path,
            &format!("# sweepgen: log truncated from {len} bytes\n{kept}"),
        )?;
        Ok(true)
    }
}

/// Initialize logging.
///
/// `RUST_LOG` overrides `level`. Without `log_file`, output goes to stderr.
pub fn init_logging(
    level: &str,
    log_file: Option<&Path>,
    rotation: LogRotation,
) -> color_eyre::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sweepgen={level},sweepgen_core={level}")));

    let mut rotated = Ok(false);
    let (writer, to_file) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            rotated = rotation.apply(path);
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), true)
        }
        None => (BoxMakeWriter::new(io::stderr), false),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(!to_file)
                .with_target(to_file),
        )
        .try_init()?;

    if let Some(path) = log_file {
        match rotated {
            Ok(true) => tracing::info!(log = %path.display(), "log file truncated"),
            Ok(false) => {}
            Err(e) => tracing::warn!(log = %path.display(), error = %e, "log rotation failed"),
        }
    }
    Ok(())
}
