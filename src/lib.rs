//! Stem Sort Library
//!
//! Moves every `.png` file found under a source tree into a folder named
//! after the file's stem, renaming it with a run-global counter so files
//! that share a stem never collide.
//!
//! # Example
//!
//! ```no_run
//! use stem_sort::{OrganizeConfig, Reorganizer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let summary = Reorganizer::new(OrganizeConfig::default())?.run()?;
//!     println!("Moved {} files", summary.moved.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use config::OrganizeConfig;
pub use core::{ImageFile, MoveCounter, MovedFile, OrganizeSummary, Reorganizer, Scanner};
pub use error::{OrganizeError, Result};
