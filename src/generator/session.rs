use std::fmt;
use std::path::{Path, PathBuf};

use super::catalog::MergeOutcome;
use super::kind::FileKind;
use super::writer::WriteOutcome;

/// What happened to one generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Skipped,
    /// Catalog entry appended to an existing catalog
    Appended,
    /// Catalog already held the key
    EntryExists,
    /// Catalog update failed and was downgraded to a warning
    Failed,
}

impl From<WriteOutcome> for Outcome {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Created => Outcome::Created,
            WriteOutcome::Skipped => Outcome::Skipped,
        }
    }
}

impl From<MergeOutcome> for Outcome {
    fn from(outcome: MergeOutcome) -> Self {
        match outcome {
            MergeOutcome::Created => Outcome::Created,
            MergeOutcome::Appended => Outcome::Appended,
            MergeOutcome::EntryExists => Outcome::EntryExists,
        }
    }
}

/// One line of the run report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub kind: FileKind,
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match self.outcome {
            Outcome::Created => write!(f, "✅ Created {}: {path}", self.kind),
            Outcome::Skipped => write!(f, "ℹ️  Exists (skipped) {}: {path}", self.kind),
            Outcome::Appended => write!(f, "✅ Added entry to {}: {path}", self.kind),
            Outcome::EntryExists => {
                write!(f, "ℹ️  Entry exists (skipped) in {}: {path}", self.kind)
            }
            Outcome::Failed => write!(f, "⚠️  Could not update {}: {path}", self.kind),
        }
    }
}

/// State of one generation run
///
/// Passed by `&mut` through every generation call. Independent sessions never
/// observe each other, so two runs in one process each write the shared
/// exception package at most once.
#[derive(Debug, Default)]
pub struct GenerationSession {
    shared_files_attempted: bool,
    reports: Vec<FileReport>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the shared exception files were already attempted.
    pub fn shared_files_attempted(&self) -> bool {
        self.shared_files_attempted
    }

    pub(crate) fn mark_shared_files_attempted(&mut self) {
        self.shared_files_attempted = true;
    }

    /// Record an outcome and print its status line.
    pub fn record(&mut self, kind: FileKind, path: &Path, outcome: impl Into<Outcome>) {
        let report = FileReport {
            kind,
            path: path.to_path_buf(),
            outcome: outcome.into(),
        };
        println!("{report}");
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    /// Number of reports with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.reports.iter().filter(|r| r.outcome == outcome).count()
    }

    /// One-line summary of the run.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} created, {} skipped, {} catalog entries added",
            self.count(Outcome::Created),
            self.count(Outcome::Skipped) + self.count(Outcome::EntryExists),
            self.count(Outcome::Appended),
        );
        let failed = self.count(Outcome::Failed);
        if failed > 0 {
            summary.push_str(&format!(", {failed} warnings"));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_summary() {
        let mut session = GenerationSession::new();
        assert!(!session.shared_files_attempted());
        session.record(FileKind::Entity, Path::new("A.java"), WriteOutcome::Created);
        session.record(FileKind::Dto, Path::new("ADTO.java"), WriteOutcome::Skipped);
        session.record(
            FileKind::MessageCatalog,
            Path::new("messages.properties"),
            MergeOutcome::Appended,
        );
        assert_eq!(session.count(Outcome::Created), 1);
        assert_eq!(session.reports().len(), 3);
        assert_eq!(
            session.summary(),
            "1 created, 1 skipped, 1 catalog entries added"
        );

        session.record(FileKind::MessageCatalog, Path::new("m"), Outcome::Failed);
        assert!(session.summary().ends_with(", 1 warnings"));

        session.mark_shared_files_attempted();
        assert!(session.shared_files_attempted());
    }

    #[test]
    fn test_status_lines() {
        let report = FileReport {
            kind: FileKind::Service,
            path: PathBuf::from("x/ProductoService.java"),
            outcome: Outcome::Skipped,
        };
        assert_eq!(
            report.to_string(),
            "ℹ️  Exists (skipped) service: x/ProductoService.java"
        );
    }
}
