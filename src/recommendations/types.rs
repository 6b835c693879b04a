//! Data types for the recommendation system.

use crate::spotify::CatalogTrack;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::str::FromStr;

use super::errors::RecommendationError;

/// Language used when the caller asks for none.
pub const DEFAULT_LANGUAGE: &str = "english";
pub const DEFAULT_TRACKS_PER_LANGUAGE: usize = 2;
pub const DEFAULT_CSV_PATH: &str = "data/spotify_features.csv";

/// A recommended track, from either the catalog search or the local dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub track: Option<String>,
    /// Artist name(s), comma-separated
    pub artist: Option<String>,
    /// Catalog track ID, the identity used for de-duplication
    pub id: Option<String>,
    /// 30-second preview URL (if available)
    pub preview_url: Option<String>,
    /// Album cover URL (if available)
    pub album_image_url: Option<String>,
    /// The language this track was requested for. Not necessarily the
    /// language it is sung in.
    pub language: String,
}

impl Track {
    pub fn from_catalog(item: CatalogTrack, language: &str) -> Self {
        let artist = item.artist_line();
        Track {
            track: item.name,
            artist: Some(artist),
            id: item.id,
            preview_url: item.preview_url,
            album_image_url: item.album_image_url,
            language: language.to_string(),
        }
    }
}

/// Per-language recommendations, keyed by the requested language string.
pub type RecommendationMap = HashMap<String, Vec<Track>>;

/// Which source to consult first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    /// Catalog search first, local dataset for gaps.
    #[default]
    External,
    /// Local dataset only.
    CsvOnly,
}

impl FromStr for Preference {
    type Err = RecommendationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "external" | "spotify" => Ok(Preference::External),
            "csv" | "csv-only" | "csv_only" => Ok(Preference::CsvOnly),
            other => Err(RecommendationError::InvalidRequest(format!(
                "unknown preference '{}' (expected 'external' or 'csv')",
                other
            ))),
        }
    }
}

/// Everything needed to produce one list of recommendations.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    /// Mood string as detected or typed; canonicalized by the recommenders.
    pub mood: String,
    pub languages: Vec<String>,
    pub n_per_lang: usize,
    pub preference: Preference,
    pub csv_path: PathBuf,
}

impl RecommendationRequest {
    pub fn new(mood: impl Into<String>, languages: Vec<String>) -> Self {
        Self {
            mood: mood.into(),
            languages,
            ..Default::default()
        }
    }

    pub fn with_tracks_per_language(mut self, n_per_lang: usize) -> Self {
        self.n_per_lang = n_per_lang;
        self
    }

    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    pub fn with_csv_path(mut self, csv_path: impl Into<PathBuf>) -> Self {
        self.csv_path = csv_path.into();
        self
    }
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            mood: String::new(),
            languages: Vec::new(),
            n_per_lang: DEFAULT_TRACKS_PER_LANGUAGE,
            preference: Preference::default(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

/// Trim, drop blanks and case-insensitive duplicates (first one wins), and
/// fall back to [`DEFAULT_LANGUAGE`] when nothing is left.
pub fn normalize_languages(languages: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for lang in languages {
        let trimmed = lang.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            out.push(trimmed.to_string());
        }
    }

    if out.is_empty() {
        out.push(DEFAULT_LANGUAGE.to_string());
    }
    out
}

/// Concatenate per-language lists in the given language order.
///
/// Languages with no entry in `map` contribute nothing.
pub fn flatten(languages: &[String], map: &RecommendationMap) -> Vec<Track> {
    languages
        .iter()
        .filter_map(|lang| map.get(lang))
        .flat_map(|tracks| tracks.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, language: &str) -> Track {
        Track {
            track: Some(format!("Song {}", id)),
            artist: Some("Someone".to_string()),
            id: Some(id.to_string()),
            preview_url: None,
            album_image_url: None,
            language: language.to_string(),
        }
    }

    #[test]
    fn test_normalize_languages() {
        let langs = vec![
            " Hindi ".to_string(),
            "".to_string(),
            "english".to_string(),
            "HINDI".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(normalize_languages(&langs), vec!["Hindi", "english"]);
    }

    #[test]
    fn test_empty_languages_default() {
        assert_eq!(normalize_languages(&[]), vec![DEFAULT_LANGUAGE]);
        assert_eq!(
            normalize_languages(&[" ".to_string()]),
            vec![DEFAULT_LANGUAGE]
        );
    }

    #[test]
    fn test_flatten_follows_language_order() {
        let mut map = RecommendationMap::new();
        map.insert("english".to_string(), vec![track("e1", "english"), track("e2", "english")]);
        map.insert("kannada".to_string(), vec![track("k1", "kannada")]);
        map.insert("hindi".to_string(), vec![]);

        let langs = vec![
            "kannada".to_string(),
            "hindi".to_string(),
            "english".to_string(),
            "tamil".to_string(),
        ];
        let ids: Vec<_> = flatten(&langs, &map)
            .into_iter()
            .filter_map(|t| t.id)
            .collect();

        assert_eq!(ids, vec!["k1", "e1", "e2"]);
    }

    #[test]
    fn test_preference_parsing() {
        assert_eq!("external".parse::<Preference>().unwrap(), Preference::External);
        assert_eq!("Spotify".parse::<Preference>().unwrap(), Preference::External);
        assert_eq!("csv-only".parse::<Preference>().unwrap(), Preference::CsvOnly);
        assert!("radio".parse::<Preference>().is_err());
    }

    #[test]
    fn test_track_from_catalog() {
        let item = CatalogTrack {
            id: Some("x".to_string()),
            name: Some("Title".to_string()),
            artists: vec!["A".to_string(), "B".to_string()],
            preview_url: Some("https://p.scdn.co/x".to_string()),
            album_image_url: None,
        };

        let t = Track::from_catalog(item, "hindi");
        assert_eq!(t.artist.as_deref(), Some("A, B"));
        assert_eq!(t.language, "hindi");
        assert_eq!(t.id.as_deref(), Some("x"));
    }
}
