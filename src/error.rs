//! Error taxonomy shared by every stage of the conversion pipeline.
//!
//! Only genuine failures live here. A missing section is modelled as `None` by the section
//! locator and degrades to "leave unchanged" or "append as new section" at the call site.

use thiserror::Error;

/// Failures that stop a conversion before anything is written.
#[derive(Debug, Error)]
pub enum Error {
    /// A replacement rule carried a pattern that does not compile.
    #[error("error in replacement {slot}: {source}")]
    Pattern {
        /// One-based slot of the offending rule.
        slot: usize,
        /// Compilation failure reported by the regex engine.
        #[source]
        source: regex::Error,
    },
    /// There is no document or selection to convert.
    #[error("No active file.")]
    NoActiveDocument,
    /// Reading or writing a document failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The configuration file or an override could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A write plan could not be serialised.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
