//! Directory-level alpha stripping.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{Error, Result};
use crate::image::{self, Compression, Transparency};
use crate::report::{FileReport, Outcome, ProcessingReport, Progress};

use super::composite::{flatten, Mask};

/// Default file-name pattern: iOS app icon set entries.
pub const DEFAULT_PATTERN: &str = "AppIcon-*.png";

/// How palette images with a transparency key are flattened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PalettePolicy {
    /// Paste palette colors opaquely; keyed pixels keep their palette color.
    #[default]
    Opaque,
    /// Blend keyed pixels onto white like an alpha channel.
    Blend,
}

/// Configuration for the stripper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Treatment of palette images with a `tRNS` key.
    pub palette_policy: PalettePolicy,

    /// PNG compression used when rewriting files.
    pub compression: Compression,
}

/// What [`AlphaStripper::process_file`] did to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Fixed(Transparency),
    Skipped,
}

/// Flattens transparent images onto white, in place.
#[derive(Debug, Clone, Default)]
pub struct AlphaStripper {
    config: Config,
}

impl AlphaStripper {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Process every file in `directory` whose name matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the run cannot start: the directory is
    /// missing or unreadable, or the pattern is invalid. Per-file failures
    /// are recorded in the report.
    pub fn process<P: AsRef<Path>>(&self, directory: P, pattern: &str) -> Result<ProcessingReport> {
        self.process_with(directory, pattern, &mut ())
    }

    /// Like [`process`](Self::process), notifying `progress` along the way.
    ///
    /// # Errors
    ///
    /// See [`process`](Self::process).
    pub fn process_with<P: AsRef<Path>>(
        &self,
        directory: P,
        pattern: &str,
        progress: &mut impl Progress,
    ) -> Result<ProcessingReport> {
        let directory = resolve_directory(directory.as_ref())?;
        let pattern = Pattern::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let files = matching_files(&directory, &pattern)?;
        tracing::debug!(
            "Found {} file(s) matching {} in {}",
            files.len(),
            pattern.as_str(),
            directory.display()
        );

        progress.begin(&directory);

        let mut report = ProcessingReport {
            directory,
            files: Vec::with_capacity(files.len()),
        };

        for path in files {
            progress.started(&path);

            let outcome = match self.process_file(&path) {
                Ok(FileAction::Fixed(transparency)) => Outcome::Fixed { transparency },
                Ok(FileAction::Skipped) => Outcome::Skipped,
                Err(err) => {
                    tracing::warn!("{err}");
                    Outcome::Error {
                        kind: err.kind(),
                        message: err.to_string(),
                    }
                }
            };

            let file = FileReport { path, outcome };
            progress.finished(&file);
            report.files.push(file);
        }

        progress.done(&report);
        Ok(report)
    }

    /// Strip transparency from a single file.
    ///
    /// Opaque images are not rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or rewritten.
    pub fn process_file(&self, path: &Path) -> Result<FileAction> {
        let source = image::load_image(path)?;

        let mask = match source.transparency() {
            Transparency::None => {
                tracing::debug!("{} is already opaque", path.display());
                return Ok(FileAction::Skipped);
            }
            Transparency::AlphaChannel => Mask::Alpha,
            Transparency::PaletteKey => match self.config.palette_policy {
                PalettePolicy::Opaque => Mask::None,
                PalettePolicy::Blend => Mask::Alpha,
            },
        };

        let transparency = source.transparency();
        let canvas = flatten(source.pixels(), mask);
        drop(source);

        image::save_png(&canvas, path, self.config.compression)?;

        Ok(FileAction::Fixed(transparency))
    }
}

/// Canonicalize `directory` and check that it is a directory.
fn resolve_directory(directory: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(directory).map_err(|source| Error::DirectoryNotFound {
        path: directory.to_path_buf(),
        source,
    })?;

    if !resolved.is_dir() {
        return Err(Error::NotADirectory { path: resolved });
    }

    Ok(resolved)
}

/// Regular files directly inside `directory` whose name matches, by name.
fn matching_files(directory: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory).map_err(|source| Error::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry in {}: {err}", directory.display());
                continue;
            }
        };

        let path = entry.path();
        if name_matches(&entry.file_name(), pattern) && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Match a file name against `pattern`; names that are not UTF-8 never match.
fn name_matches(name: &OsStr, pattern: &Pattern) -> bool {
    match name.to_str() {
        Some(name) => pattern.matches(name),
        None => {
            tracing::warn!("Skipping file with non-UTF-8 name {}", name.to_string_lossy());
            false
        }
    }
}
