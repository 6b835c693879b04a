//! Typed errors for the recommendation system.
//!
//! Catalog failures are not in here: a [`SpotifyError`] is always absorbed
//! by falling back to the local dataset. What remains are failures that
//! the fallback cannot paper over.
//!
//! [`SpotifyError`]: crate::spotify::SpotifyError

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during recommendation generation.
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// The dataset file exists but could not be read or parsed
    #[error("Failed to read dataset '{path}': {reason}")]
    Dataset { path: PathBuf, reason: String },

    /// The request itself is malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RecommendationError {
    pub fn dataset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        RecommendationError::Dataset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
