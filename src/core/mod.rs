//! Core module - file discovery and the move loop
//!
//! Contains the reorganizer engine, the scanner, and the small value types
//! passed between them.

mod engine;
mod scanner;

pub use engine::Reorganizer;
pub use scanner::{ScanResult, Scanner};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A `.png` (or other target) file found during the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Where the file currently lives
    pub path: PathBuf,
    /// File name without its final extension
    pub stem: OsString,
    /// Final extension including the dot, empty if there is none
    pub suffix: OsString,
}

impl ImageFile {
    /// Split a path into stem and suffix. Returns `None` only when the
    /// path has no file name. Names need not be UTF-8.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_os_string();
        let mut suffix = OsString::new();
        if let Some(ext) = path.extension() {
            suffix.push(".");
            suffix.push(ext);
        }

        Some(Self {
            path: path.to_path_buf(),
            stem,
            suffix,
        })
    }

    /// Folder under `dest_root` this file belongs in
    pub fn stem_dir(&self, dest_root: &Path) -> PathBuf {
        dest_root.join(&self.stem)
    }

    /// `<dest_root>/<stem>/<stem><counter>-<stem><suffix>`
    pub fn destination(&self, dest_root: &Path, counter: u64) -> PathBuf {
        let mut name = self.stem.clone();
        name.push(counter.to_string());
        name.push("-");
        name.push(&self.stem);
        name.push(&self.suffix);
        self.stem_dir(dest_root).join(name)
    }
}

/// Run-global move counter. Starts at 0 every run and is never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveCounter(u64);

impl MoveCounter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    /// Called once per completed move
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

/// One completed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub counter: u64,
}

/// Outcome of a run that finished without error
#[derive(Debug, Default)]
pub struct OrganizeSummary {
    /// Moves in the order they happened
    pub moved: Vec<MovedFile>,
    /// Files seen in the source tree that did not match
    pub skipped: usize,
    /// Stem folders that did not exist before this run
    pub directories_created: usize,
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        let file = ImageFile::from_path(Path::new("pokemon/sub/25.png")).unwrap();
        assert_eq!(file.stem, "25");
        assert_eq!(file.suffix, ".png");
    }

    #[test]
    fn test_split_multiple_dots() {
        let file = ImageFile::from_path(Path::new("a.b.png")).unwrap();
        assert_eq!(file.stem, "a.b");
        assert_eq!(file.suffix, ".png");
    }

    #[test]
    fn test_dotfile_has_no_suffix() {
        let file = ImageFile::from_path(Path::new("pokemon/.png")).unwrap();
        assert_eq!(file.stem, ".png");
        assert_eq!(file.suffix, "");
    }

    #[test]
    fn test_destination_layout() {
        let file = ImageFile::from_path(Path::new("pokemon/1.png")).unwrap();
        assert_eq!(
            file.destination(Path::new("organized"), 0),
            PathBuf::from("organized/1/10-1.png")
        );
        assert_eq!(
            file.destination(Path::new("organized"), 11),
            PathBuf::from("organized/1/111-1.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_raw_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("pokemon").join(OsStr::from_bytes(b"\xff.png"));
        let file = ImageFile::from_path(&path).unwrap();
        assert_eq!(file.stem.as_os_str(), OsStr::from_bytes(b"\xff"));
        assert_eq!(file.suffix, ".png");
        assert_eq!(
            file.destination(Path::new("organized"), 3),
            Path::new("organized")
                .join(OsStr::from_bytes(b"\xff"))
                .join(OsStr::from_bytes(b"\xff3-\xff.png"))
        );
    }

    #[test]
    fn test_counter_advances_by_one() {
        let mut counter = MoveCounter::new();
        assert_eq!(counter.current(), 0);
        counter.advance();
        counter.advance();
        assert_eq!(counter.current(), 2);
    }
}
