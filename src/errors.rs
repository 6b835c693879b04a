use thiserror::Error;

use crate::recommendations::RecommendationError;
use crate::spotify::SpotifyError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),

    #[error("Spotify error: {0}")]
    Spotify(#[from] SpotifyError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(format!("Serialization error: {}", e))
    }
}
