//! Error types for the landing page.
//!
//! Nothing here is fatal to the page: callers log the error and fall back
//! (default brand, previous scroll offset, error panel).

use thiserror::Error;

/// Failure to resolve or load a brand content dataset.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Brand name not in the known set
    #[error("unknown brand '{0}' (expected one of: imed, autinosis)")]
    UnknownBrand(String),

    /// Embedded JSON dataset failed to deserialize
    #[error("failed to parse content for brand '{brand}': {source}")]
    Parse {
        brand: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Dataset parsed but violates a content rule
    #[error("invalid content for brand '{brand}': {reason}")]
    Invalid { brand: &'static str, reason: String },
}

/// Failure to read the viewport scroll position.
#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no global window (not running in a browser)")]
    NoWindow,

    #[error("failed to read window.scrollY: {0}")]
    Read(String),
}
