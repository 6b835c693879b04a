//! Recommendations from a remote catalog search.

use std::collections::HashSet;

use super::types::{RecommendationMap, Track};
use crate::mood::Mood;
use crate::providers::TrackSearch;
use crate::spotify::CatalogTrack;

/// Fewest candidates requested per language, to leave room for duplicates.
const MIN_CANDIDATES: usize = 10;

/// How many search results to ask for when `n_per_lang` are wanted.
pub fn candidate_limit(n_per_lang: usize) -> usize {
    MIN_CANDIDATES.max(n_per_lang.saturating_mul(3))
}

/// Query string sent to the catalog for one language.
pub fn search_query(mood: &Mood, language: &str) -> String {
    format!("{} {}", mood, language.trim())
}

/// Keep the first `n_per_lang` results with a unique, non-empty ID.
fn take_unique(items: Vec<CatalogTrack>, n_per_lang: usize, language: &str) -> Vec<Track> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for item in items {
        if out.len() >= n_per_lang {
            break;
        }
        let Some(id) = item.id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        if !seen.insert(id.to_string()) {
            continue;
        }
        out.push(Track::from_catalog(item, language));
    }

    out
}

/// Search the catalog once per language.
///
/// A failed search is logged and recorded as an empty list for that
/// language; the remaining languages are still searched.
pub fn recommend_from_search<S: TrackSearch + ?Sized>(
    mood: &str,
    languages: &[String],
    n_per_lang: usize,
    search: &S,
) -> RecommendationMap {
    let mood = Mood::canonicalize(mood);
    let limit = candidate_limit(n_per_lang);
    let mut results = RecommendationMap::new();

    for lang in languages {
        if n_per_lang == 0 {
            results.insert(lang.clone(), Vec::new());
            continue;
        }

        let query = search_query(&mood, lang);
        let items = match search.search_tracks(&query, limit) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Search for '{}' failed: {}", query, e);
                Vec::new()
            }
        };

        let tracks = take_unique(items, n_per_lang, lang);
        log::debug!("Search '{}': kept {} tracks", query, tracks.len());
        results.insert(lang.clone(), tracks);
    }

    results
}
