//! Message catalog (`messages.properties`) maintenance.
//!
//! The catalog is a line-oriented `key=value` file with `#` comments. The
//! generator only ever appends to it: existing lines are never reordered or
//! rewritten, and a key is added at most once.

use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// File name of the catalog inside the resources directory
pub const CATALOG_FILE_NAME: &str = "messages.properties";

/// Result of [`merge_message_entry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The catalog did not exist and was created with the entry
    Created,
    /// The entry was appended to an existing catalog
    Appended,
    /// The key was already present; nothing was written
    EntryExists,
}

/// Locate the resources directory for an output tree.
///
/// An explicitly configured directory always wins. Otherwise the output base
/// is searched for a Maven/Gradle `src` anchor (preferring `src/main`) and
/// `{project}/src/main/resources` is used. Without an anchor the catalog goes
/// to `{output_base}/resources`, which keeps it inside the output tree.
pub fn resolve_resources_dir(explicit: Option<&Path>, output_base: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let components: Vec<Component<'_>> = output_base.components().collect();
    let is_src = |c: &Component<'_>| matches!(c, Component::Normal(s) if *s == "src");
    let is_main = |c: Option<&Component<'_>>| matches!(c, Some(Component::Normal(s)) if *s == "main");
    let anchor = components
        .iter()
        .enumerate()
        .rev()
        .find(|(i, c)| is_src(c) && is_main(components.get(i + 1)))
        .or_else(|| components.iter().enumerate().rev().find(|(_, c)| is_src(c)))
        .map(|(i, _)| i);

    match anchor {
        Some(idx) => {
            let project_root: PathBuf = components[..idx].iter().collect();
            project_root.join("src").join("main").join("resources")
        }
        None => {
            debug!(
                output_base = %output_base.display(),
                "no src anchor in output path, keeping catalog inside the output tree"
            );
            output_base.join("resources")
        }
    }
}

/// Whether a non-comment, non-blank line of `content` defines `key`.
pub fn contains_key(content: &str, key: &str) -> bool {
    let prefix = format!("{key}=");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .any(|line| line.starts_with(&prefix))
}

/// Add `key=message` to the catalog at `catalog_path` unless `key` is defined.
///
/// A missing catalog is created (with its parent directories) holding exactly
/// one line. When appending, a newline is inserted first if the file does not
/// already end with one.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, created or appended to.
pub fn merge_message_entry(
    catalog_path: &Path,
    key: &str,
    message: &str,
) -> anyhow::Result<MergeOutcome> {
    let entry = format!("{key}={message}\n");

    let existing = match fs::read_to_string(catalog_path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read catalog {}", catalog_path.display()));
        }
    };

    let Some(existing) = existing else {
        if let Some(parent) = catalog_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(catalog_path, &entry)
            .with_context(|| format!("Failed to create catalog {}", catalog_path.display()))?;
        return Ok(MergeOutcome::Created);
    };

    if contains_key(&existing, key) {
        debug!(key, catalog = %catalog_path.display(), "catalog entry already present");
        return Ok(MergeOutcome::EntryExists);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(catalog_path)
        .with_context(|| format!("Failed to open catalog {}", catalog_path.display()))?;
    let separator = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    file.write_all(format!("{separator}{entry}").as_bytes())
        .with_context(|| format!("Failed to append to catalog {}", catalog_path.display()))?;
    Ok(MergeOutcome::Appended)
}
