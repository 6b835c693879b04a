use thiserror::Error;

/// Errors from the Spotify search client.
///
/// Every variant means the catalog could not answer. The recommender treats
/// this whole type as "search unavailable" and falls back to the local
/// dataset; any other error type propagates.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Spotify credentials not found: set {0}")]
    MissingCredentials(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limited by Spotify")]
    RateLimited,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SpotifyError::InvalidResponse(err.to_string())
        } else {
            SpotifyError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SpotifyError {
    fn from(err: serde_json::Error) -> Self {
        SpotifyError::InvalidResponse(err.to_string())
    }
}
