//! Recommendation orchestration.
//!
//! ```text
//! [Request] → [Catalog search per language] → [Dataset for empty languages] → flatten
//!                      │
//!                      └─ client unavailable → [Dataset for all languages] → flatten
//! ```

use rand::Rng;

use super::errors::RecommendationError;
use super::local::recommend_from_csv;
use super::search::recommend_from_search;
use super::types::{flatten, normalize_languages, Preference, RecommendationRequest, Track};
use crate::providers::TrackSearch;
use crate::spotify::{SpotifyClient, SpotifyCredentials};

/// Produce a flat, language-grouped list of recommendations.
///
/// With [`Preference::External`] a Spotify client is built from
/// `credentials`; if that fails the whole request is served from the local
/// dataset instead. Only dataset errors propagate.
pub fn recommend<R: Rng + ?Sized>(
    request: &RecommendationRequest,
    credentials: &SpotifyCredentials,
    rng: &mut R,
) -> Result<Vec<Track>, RecommendationError> {
    let languages = normalize_languages(&request.languages);

    log::info!(
        "Recommending for mood '{}' in {:?} ({} per language, {:?})",
        request.mood,
        languages,
        request.n_per_lang,
        request.preference
    );

    match request.preference {
        Preference::CsvOnly => csv_only(request, &languages, rng),
        Preference::External => match SpotifyClient::new(credentials) {
            Ok(client) => search_then_fill(request, &languages, &client, rng),
            Err(e) => {
                log::warn!("Catalog search unavailable ({}), using local dataset", e);
                csv_only(request, &languages, rng)
            }
        },
    }
}

/// Same as [`recommend`], with an already-built search client.
pub fn recommend_with_search<S, R>(
    request: &RecommendationRequest,
    search: &S,
    rng: &mut R,
) -> Result<Vec<Track>, RecommendationError>
where
    S: TrackSearch + ?Sized,
    R: Rng + ?Sized,
{
    let languages = normalize_languages(&request.languages);

    match request.preference {
        Preference::CsvOnly => csv_only(request, &languages, rng),
        Preference::External => search_then_fill(request, &languages, search, rng),
    }
}

fn csv_only<R: Rng + ?Sized>(
    request: &RecommendationRequest,
    languages: &[String],
    rng: &mut R,
) -> Result<Vec<Track>, RecommendationError> {
    let map = recommend_from_csv(
        &request.mood,
        languages,
        request.n_per_lang,
        &request.csv_path,
        rng,
    )?;
    Ok(flatten(languages, &map))
}

fn search_then_fill<S, R>(
    request: &RecommendationRequest,
    languages: &[String],
    search: &S,
    rng: &mut R,
) -> Result<Vec<Track>, RecommendationError>
where
    S: TrackSearch + ?Sized,
    R: Rng + ?Sized,
{
    let mut map = recommend_from_search(&request.mood, languages, request.n_per_lang, search);

    let missing: Vec<String> = languages
        .iter()
        .filter(|lang| map.get(*lang).is_none_or(|tracks| tracks.is_empty()))
        .cloned()
        .collect();

    if !missing.is_empty() {
        log::info!("No search results for {:?}, filling from dataset", missing);

        let mut filled = recommend_from_csv(
            &request.mood,
            &missing,
            request.n_per_lang,
            &request.csv_path,
            rng,
        )?;
        for lang in missing {
            let tracks = filled.remove(&lang).unwrap_or_default();
            map.insert(lang, tracks);
        }
    }

    Ok(flatten(languages, &map))
}
