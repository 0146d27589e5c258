//! Configuration Module - where files come from and where they go
//!
//! With no overrides this is always `pokemon` -> `organized`, matching
//! `.png` files only.

use std::path::PathBuf;

use crate::cli::Cli;

/// Default source tree, relative to the working directory
pub const DEFAULT_SOURCE: &str = "pokemon";
/// Default destination root, relative to the working directory
pub const DEFAULT_DEST: &str = "organized";
/// The only extension that gets relocated
pub const TARGET_EXTENSION: &str = ".png";

/// Settings for one reorganize run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeConfig {
    /// Root of the tree to scan (recursively)
    pub source: PathBuf,
    /// Root under which one folder per stem is created
    pub dest: PathBuf,
    /// Extension including the leading dot
    pub extension: String,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            dest: PathBuf::from(DEFAULT_DEST),
            extension: TARGET_EXTENSION.to_string(),
        }
    }
}

impl OrganizeConfig {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            ..Self::default()
        }
    }

    /// Build from parsed command line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.source.clone(), cli.dest.clone())
    }

    /// Glob applied to file names during the scan, e.g. `*.png`
    pub fn glob_pattern(&self) -> String {
        format!("*{}", self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = OrganizeConfig::default();
        assert_eq!(config.source, PathBuf::from("pokemon"));
        assert_eq!(config.dest, PathBuf::from("organized"));
        assert_eq!(config.extension, ".png");
        assert_eq!(config.glob_pattern(), "*.png");
    }

    #[test]
    fn test_no_args_matches_default() {
        let cli = Cli::parse_from(["stem-sort"]);
        assert_eq!(OrganizeConfig::from_cli(&cli), OrganizeConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["stem-sort", "--source", "in", "--dest", "out"]);
        let config = OrganizeConfig::from_cli(&cli);
        assert_eq!(config.source, PathBuf::from("in"));
        assert_eq!(config.dest, PathBuf::from("out"));
        assert_eq!(config.extension, ".png");
    }
}
