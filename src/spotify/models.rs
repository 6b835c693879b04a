use serde::{Deserialize, Serialize};

/// Body of a client-credentials token response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: u64,
}

/// `GET /v1/search?type=track` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Paging<ApiTrack>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTrack {
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<ApiArtist>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub album: Option<ApiAlbum>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiArtist {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAlbum {
    #[serde(default)]
    pub images: Vec<ApiImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiImage {
    pub url: Option<String>,
}

/// A track as returned by a catalog search, flattened to what the
/// recommender needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTrack {
    pub id: Option<String>,
    pub name: Option<String>,
    pub artists: Vec<String>,
    pub preview_url: Option<String>,
    pub album_image_url: Option<String>,
}

impl CatalogTrack {
    /// Artist names joined the way they are displayed.
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

impl From<ApiTrack> for CatalogTrack {
    fn from(track: ApiTrack) -> Self {
        let album_image_url = track
            .album
            .and_then(|a| a.images.into_iter().next())
            .and_then(|img| img.url);

        CatalogTrack {
            id: track.id,
            name: track.name,
            artists: track.artists.into_iter().filter_map(|a| a.name).collect(),
            preview_url: track.preview_url,
            album_image_url,
        }
    }
}

impl SearchResponse {
    pub fn into_tracks(self) -> Vec<CatalogTrack> {
        self.tracks
            .map(|page| page.items.into_iter().map(CatalogTrack::from).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "tracks": {
                "items": [
                    {
                        "id": "abc",
                        "name": "Walking on Sunshine",
                        "artists": [{"name": "Katrina"}, {"name": "The Waves"}],
                        "preview_url": null,
                        "album": {"images": [{"url": "https://i.scdn.co/a.jpg"}, {"url": "https://i.scdn.co/b.jpg"}]}
                    },
                    {
                        "id": null,
                        "name": "Broken",
                        "artists": [],
                        "album": {"images": []}
                    }
                ]
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let tracks = response.into_tracks();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id.as_deref(), Some("abc"));
        assert_eq!(tracks[0].artist_line(), "Katrina, The Waves");
        assert_eq!(
            tracks[0].album_image_url.as_deref(),
            Some("https://i.scdn.co/a.jpg")
        );
        assert_eq!(tracks[0].preview_url, None);
        assert_eq!(tracks[1].id, None);
        assert_eq!(tracks[1].album_image_url, None);
    }

    #[test]
    fn test_missing_tracks_key() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_tracks().is_empty());
    }
}
