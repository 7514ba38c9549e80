//! Per-file outcomes and progress reporting.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ErrorKind;
use crate::image::Transparency;

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Transparency was removed and the file rewritten.
    Fixed { transparency: Transparency },
    /// The file had no transparency and was left untouched.
    Skipped,
    /// The file could not be processed.
    Error { kind: ErrorKind, message: String },
}

/// Outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl FileReport {
    /// File name used in progress lines, falling back to the full path.
    #[must_use]
    pub fn name(&self) -> String {
        display_name(&self.path)
    }
}

/// Ordered outcomes of one run over a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingReport {
    pub directory: PathBuf,
    pub files: Vec<FileReport>,
}

impl ProcessingReport {
    #[must_use]
    pub fn fixed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Fixed { .. }))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Error { .. }))
    }

    /// Outcome recorded for a file name, if it was processed.
    #[must_use]
    pub fn outcome_of(&self, name: &str) -> Option<&Outcome> {
        self.files
            .iter()
            .find(|f| f.path.file_name().is_some_and(|n| n == name))
            .map(|f| &f.outcome)
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Observer notified as a run progresses.
pub trait Progress {
    fn begin(&mut self, _directory: &Path) {}
    fn started(&mut self, _path: &Path) {}
    fn finished(&mut self, _report: &FileReport) {}
    fn done(&mut self, _report: &ProcessingReport) {}
}

impl Progress for () {}

/// Human-readable progress lines written to any `Write` sink.
///
/// ```text
/// Processing AppIcon-20.png...
/// ✓ Fixed AppIcon-20.png
/// ```
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        let written = self
            .out
            .write_fmt(args)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());
        if let Err(err) = written {
            tracing::debug!("Dropped progress line: {err}");
        }
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn begin(&mut self, directory: &Path) {
        self.line(format_args!(
            "Removing alpha channels from {}...",
            directory.display()
        ));
    }

    fn started(&mut self, path: &Path) {
        self.line(format_args!("Processing {}...", display_name(path)));
    }

    fn finished(&mut self, report: &FileReport) {
        let name = report.name();
        match &report.outcome {
            Outcome::Fixed { .. } => self.line(format_args!("✓ Fixed {name}")),
            Outcome::Skipped => self.line(format_args!("- {name} already has no alpha channel")),
            Outcome::Error { message, .. } => {
                self.line(format_args!("✗ Error processing {name}: {message}"));
            }
        }
    }

    fn done(&mut self, _report: &ProcessingReport) {
        self.line(format_args!("Done removing alpha channels!"));
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
