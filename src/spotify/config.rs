pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SEARCH_URL: &str = "https://api.spotify.com/v1/search";
pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;
/// Tokens are refreshed this long before Spotify says they expire.
pub const TOKEN_EXPIRY_MARGIN_SECONDS: u64 = 60;
/// Largest `limit` the search endpoint accepts.
pub const MAX_SEARCH_LIMIT: usize = 50;

pub const CLIENT_ID_ENV: &str = "SPOTIPY_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "SPOTIPY_CLIENT_SECRET";

/// Client-credentials pair for the Spotify Web API.
///
/// Both fields are optional so a partially-filled value can be layered
/// over another (explicit flags over environment). Blank strings count as
/// missing. Validation happens when a client is built, not here.
#[derive(Clone, Default)]
pub struct SpotifyCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl SpotifyCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }

    /// Read `SPOTIPY_CLIENT_ID` / `SPOTIPY_CLIENT_SECRET`.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var(CLIENT_ID_ENV).ok(),
            client_secret: std::env::var(CLIENT_SECRET_ENV).ok(),
        }
    }

    /// Fill whichever fields are missing here from `other`.
    pub fn with_fallback(self, other: SpotifyCredentials) -> Self {
        Self {
            client_id: non_blank(self.client_id).or_else(|| non_blank(other.client_id)),
            client_secret: non_blank(self.client_secret)
                .or_else(|| non_blank(other.client_secret)),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id())
            .field("client_secret", &self.client_secret().map(|_| "***"))
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
