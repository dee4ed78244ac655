//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a sibling `.tmp` file, then renamed over
/// the target, so an interrupted run never leaves a half-written
/// configuration behind.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content)?;
    fs::rename(temp_path, path)?;

    Ok(())
}
