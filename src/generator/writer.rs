use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Result of [`write_if_absent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written
    Created,
    /// A file was already present and was left untouched
    Skipped,
}

/// Create `path` with `content` unless something already exists there.
///
/// Parent directories are created as needed. An existing file is never
/// opened for writing, so user edits to generated files survive re-runs.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file
/// cannot be written.
pub fn write_if_absent(path: &Path, content: &str) -> anyhow::Result<WriteOutcome> {
    if path.exists() {
        debug!(path = %path.display(), "file exists, leaving it untouched");
        return Ok(WriteOutcome::Skipped);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    // create_new closes the gap between the exists() check and the open.
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::Skipped),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", path.display()));
        }
    };
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "file created");
    Ok(WriteOutcome::Created)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_parents_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("File.java");
        assert_eq!(write_if_absent(&path, "one").unwrap(), WriteOutcome::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");
    }

    #[test]
    fn test_second_write_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("File.java");
        write_if_absent(&path, "one").unwrap();
        assert_eq!(write_if_absent(&path, "one").unwrap(), WriteOutcome::Skipped);
        assert_eq!(write_if_absent(&path, "two").unwrap(), WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");
    }

    #[test]
    fn test_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        assert!(write_if_absent(&blocker.join("File.java"), "x").is_err());
    }
}
