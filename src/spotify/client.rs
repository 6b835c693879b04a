use parking_lot::Mutex;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::{Duration, Instant};

use super::config::*;
use super::error::SpotifyError;
use super::models::{CatalogTrack, SearchResponse, TokenResponse};
use crate::providers::TrackSearch;

struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    /// The token is treated as expired `TOKEN_EXPIRY_MARGIN_SECONDS` early.
    fn from_response(token: TokenResponse, issued_at: Instant) -> Self {
        let lifetime = token
            .expires_in
            .saturating_sub(TOKEN_EXPIRY_MARGIN_SECONDS);
        Self {
            value: token.access_token,
            expires_at: issued_at + Duration::from_secs(lifetime),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Map a token endpoint response to its body or an error.
fn check_token_status(status: StatusCode, body: String) -> Result<String, SpotifyError> {
    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
        return Err(SpotifyError::Auth(format!("HTTP {} - {}", status, body)));
    }

    if !status.is_success() {
        return Err(SpotifyError::Http {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Map a search response to its body or an error.
fn check_search_status(status: StatusCode, body: String) -> Result<String, SpotifyError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(SpotifyError::Auth(format!("HTTP {} - {}", status, body)));
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SpotifyError::RateLimited);
    }

    if !status.is_success() {
        return Err(SpotifyError::Http {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Blocking Spotify Web API client using the client-credentials flow.
///
/// The bearer token is fetched lazily on the first search and reused until
/// shortly before it expires.
pub struct SpotifyClient {
    client: Client,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<AccessToken>>,
}

impl SpotifyClient {
    /// Build a client, failing fast if either credential is missing.
    pub fn new(credentials: &SpotifyCredentials) -> Result<Self, SpotifyError> {
        let (client_id, client_secret) =
            match (credentials.client_id(), credentials.client_secret()) {
                (Some(id), Some(secret)) => (id.to_string(), secret.to_string()),
                (id, secret) => {
                    let mut missing = Vec::new();
                    if id.is_none() {
                        missing.push(CLIENT_ID_ENV);
                    }
                    if secret.is_none() {
                        missing.push(CLIENT_SECRET_ENV);
                    }
                    return Err(SpotifyError::MissingCredentials(missing.join(" and ")));
                }
            };

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .user_agent(concat!("moodtunes/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            client_id,
            client_secret,
            token: Mutex::new(None),
        })
    }

    fn access_token(&self) -> Result<String, SpotifyError> {
        let mut guard = self.token.lock();

        if let Some(token) = guard.as_ref() {
            if !token.is_expired() {
                return Ok(token.value.clone());
            }
            log::debug!("Spotify access token expired, requesting a new one");
        }

        let token = self.request_token()?;
        let value = token.value.clone();
        *guard = Some(token);
        Ok(value)
    }

    fn clear_token(&self) {
        self.token.lock().take();
    }

    fn request_token(&self) -> Result<AccessToken, SpotifyError> {
        log::debug!("Requesting Spotify access token");

        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()?;

        let status = response.status();
        let text = check_token_status(status, response.text()?).inspect_err(|e| {
            log::warn!("Spotify token request failed: {}", e);
        })?;

        let token: TokenResponse = serde_json::from_str(&text)?;

        log::info!(
            "Obtained Spotify {} token (valid for {}s)",
            if token.token_type.is_empty() { "access" } else { token.token_type.as_str() },
            token.expires_in
        );

        Ok(AccessToken::from_response(token, Instant::now()))
    }

    /// Search the catalog for tracks.
    ///
    /// `limit` is clamped to what the API accepts (1 to 50).
    pub fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<CatalogTrack>, SpotifyError> {
        let token = self.access_token()?;
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT).to_string();

        log::debug!("Spotify search: q={:?} limit={}", query, limit);

        let response = self
            .client
            .get(SEARCH_URL)
            .bearer_auth(&token)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .send()?;

        let status = response.status();
        let text = match check_search_status(status, response.text()?) {
            Ok(text) => text,
            Err(err) => {
                if matches!(err, SpotifyError::Auth(_)) {
                    self.clear_token();
                }
                log::warn!("Search failed for {:?}: {}", query, err);
                return Err(err);
            }
        };

        let parsed: SearchResponse = serde_json::from_str(&text)?;
        let tracks = parsed.into_tracks();

        log::debug!("Spotify search {:?} returned {} tracks", query, tracks.len());

        Ok(tracks)
    }
}

impl TrackSearch for SpotifyClient {
    fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<CatalogTrack>, SpotifyError> {
        SpotifyClient::search_tracks(self, query, limit)
    }
}
