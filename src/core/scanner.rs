//! Scanner - single-threaded walk of the source tree
//!
//! Collects every matching file before anything is moved, so a destination
//! that sits inside the source tree is never picked up again mid-run.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::{DirEntry, WalkDir};

use super::ImageFile;
use crate::config::OrganizeConfig;
use crate::error::{OrganizeError, Result};

/// Files found by a scan
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files in walk order (not sorted)
    pub files: Vec<ImageFile>,
    /// Files and symlinks that failed either filter
    pub skipped: usize,
}

/// Recursive scanner for one extension
pub struct Scanner {
    source: PathBuf,
    matcher: GlobMatcher,
    extension: String,
}

impl Scanner {
    pub fn new(config: &OrganizeConfig) -> Result<Self> {
        let pattern = config.glob_pattern();
        let matcher = GlobBuilder::new(&pattern)
            .build()
            .map_err(|source| OrganizeError::Pattern {
                pattern: pattern.clone(),
                source,
            })?
            .compile_matcher();

        Ok(Self {
            source: config.source.clone(),
            matcher,
            extension: config.extension.clone(),
        })
    }

    /// Walk the source root. Any unreadable entry, including a missing
    /// root, aborts the scan.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut result = ScanResult::default();

        for entry in WalkDir::new(&self.source).follow_links(false) {
            let entry = entry.map_err(|source| OrganizeError::SourceAccess {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.source.clone()),
                source,
            })?;

            // Links are moved as links, never followed
            let file_type = entry.file_type();
            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }

            match self.accept(&entry) {
                Some(file) => {
                    tracing::trace!("Found {}", file.path.display());
                    result.files.push(file);
                }
                None => result.skipped += 1,
            }
        }

        tracing::debug!(
            "Scanned {}: {} matching, {} skipped",
            self.source.display(),
            result.files.len(),
            result.skipped
        );

        Ok(result)
    }

    /// Both checks must pass: the name matches the glob and the parsed
    /// suffix equals the extension. `.png` on its own matches the glob
    /// but has no suffix.
    fn accept(&self, entry: &DirEntry) -> Option<ImageFile> {
        if !self.matcher.is_match(entry.file_name()) {
            return None;
        }

        ImageFile::from_path(entry.path())
            .filter(|file| file.suffix.as_os_str() == OsStr::new(&self.extension))
    }
}
