//! Reorganizer - the move loop
//!
//! Scan first, then for each file: make sure its stem folder exists, pick
//! the next counter value, rename the file into place.

use std::fs;
use std::path::Path;
use std::time::Instant;

use super::scanner::Scanner;
use super::{ImageFile, MoveCounter, MovedFile, OrganizeSummary};
use crate::config::OrganizeConfig;
use crate::error::{OrganizeError, Result};

/// Moves matching files from the source tree into per-stem folders
pub struct Reorganizer {
    config: OrganizeConfig,
    scanner: Scanner,
}

impl Reorganizer {
    pub fn new(config: OrganizeConfig) -> Result<Self> {
        let scanner = Scanner::new(&config)?;
        Ok(Self { config, scanner })
    }

    /// Run once over the whole source tree.
    ///
    /// Stops at the first error. Files moved before that point stay moved.
    pub fn run(&self) -> Result<OrganizeSummary> {
        let start = Instant::now();
        let scan = self.scanner.scan()?;

        create_dir(&self.config.dest)?;

        let mut summary = OrganizeSummary {
            skipped: scan.skipped,
            ..OrganizeSummary::default()
        };
        let mut counter = MoveCounter::new();

        for file in &scan.files {
            let moved = self.relocate(file, &mut counter, &mut summary.directories_created)?;
            summary.moved.push(moved);
        }

        summary.duration = start.elapsed();

        tracing::info!(
            "Moved {} files into {} ({} new folders, {} skipped) in {:?}",
            summary.moved.len(),
            self.config.dest.display(),
            summary.directories_created,
            summary.skipped,
            summary.duration
        );

        Ok(summary)
    }

    /// Move one file and advance the counter only if the move succeeded
    fn relocate(
        &self,
        file: &ImageFile,
        counter: &mut MoveCounter,
        directories_created: &mut usize,
    ) -> Result<MovedFile> {
        let stem_dir = file.stem_dir(&self.config.dest);
        if !stem_dir.is_dir() {
            create_dir(&stem_dir)?;
            *directories_created += 1;
        }

        let to = file.destination(&self.config.dest, counter.current());
        if fs::symlink_metadata(&to).is_ok() {
            return Err(OrganizeError::DestinationOccupied { path: to });
        }

        fs::rename(&file.path, &to).map_err(|source| OrganizeError::Move {
            from: file.path.clone(),
            to: to.clone(),
            source,
        })?;

        tracing::debug!("{} -> {}", file.path.display(), to.display());

        let moved = MovedFile {
            from: file.path.clone(),
            to,
            counter: counter.current(),
        };
        counter.advance();

        Ok(moved)
    }
}

/// `create_dir_all`, which is a no-op for an existing directory and fails
/// if the path is taken by a file
fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| OrganizeError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
