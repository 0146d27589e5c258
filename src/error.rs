//! Error types for a reorganize run
//!
//! Nothing here is retried. The first error ends the run and whatever was
//! already moved stays where it landed.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, OrganizeError>;

#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    /// Source root missing, or some directory under it could not be read
    #[error("Cannot read source tree at {path}")]
    SourceAccess {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Cannot create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot move {from} to {to}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `rename` replaces existing files on Unix, so this is checked first
    #[error("Destination already exists: {path}")]
    DestinationOccupied { path: PathBuf },

    #[error("Invalid glob pattern {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_path() {
        let err = OrganizeError::CreateDir {
            path: PathBuf::from("organized/25"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Cannot create directory organized/25");
    }

    #[test]
    fn test_source_chain_preserved() {
        use std::error::Error;

        let err = OrganizeError::Move {
            from: PathBuf::from("a.png"),
            to: PathBuf::from("b/a0-a.png"),
            source: io::Error::new(io::ErrorKind::Other, "cross-device link"),
        };
        let cause = err.source().expect("move error carries its io cause");
        assert_eq!(cause.to_string(), "cross-device link");
    }
}
