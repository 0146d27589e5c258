//! CLI module - Command line interface definitions

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_DEST, DEFAULT_SOURCE};

/// Stem Sort - move .png files into one folder per file stem
///
/// Every `<source>/**/<stem>.png` ends up at
/// `<dest>/<stem>/<stem><n>-<stem>.png`, where `n` counts up across the run.
/// Files are moved, not copied.
#[derive(Parser, Debug)]
#[command(name = "stem-sort")]
#[command(version)]
#[command(about = "Move .png files into one folder per file stem", long_about = None)]
pub struct Cli {
    /// Directory tree to scan for .png files
    #[arg(long, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Directory that receives one subfolder per stem
    #[arg(long, default_value = DEFAULT_DEST)]
    pub dest: PathBuf,

    /// Log every move to stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Anything else on the command line is accepted and ignored
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}
