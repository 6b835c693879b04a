//! Recommendations from the local dataset.
//!
//! Rows are filtered by language and, when the dataset carries `valence`
//! and `energy`, by a per-mood heuristic. A random sample of the survivors
//! is returned for each language.

use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use std::path::Path;

use super::dataset::{Dataset, DatasetRow, LANGUAGE_COLUMN};
use super::errors::RecommendationError;
use super::types::{RecommendationMap, Track};
use crate::mood::Mood;

const JOY_MIN_VALENCE: f64 = 0.6;
const JOY_MIN_ENERGY: f64 = 0.5;
const SADNESS_MAX_VALENCE: f64 = 0.35;
const SADNESS_MAX_ENERGY: f64 = 0.45;
const ANGER_MIN_ENERGY: f64 = 0.7;

/// Whether a row fits the mood. Moods without a heuristic accept every row.
fn matches_mood(mood: &Mood, row: &DatasetRow) -> bool {
    match mood {
        Mood::Joy => matches!(
            (row.valence, row.energy),
            (Some(v), Some(e)) if v >= JOY_MIN_VALENCE && e >= JOY_MIN_ENERGY
        ),
        Mood::Sadness => matches!(
            (row.valence, row.energy),
            (Some(v), Some(e)) if v <= SADNESS_MAX_VALENCE && e <= SADNESS_MAX_ENERGY
        ),
        Mood::Anger => row.energy.is_some_and(|e| e >= ANGER_MIN_ENERGY),
        _ => true,
    }
}

fn row_to_track(row: &DatasetRow, language: &str) -> Track {
    Track {
        track: row.track.clone(),
        artist: row.artist.clone(),
        id: row.id.clone(),
        preview_url: row.preview_url.clone(),
        album_image_url: row.album_image_url.clone(),
        language: language.to_string(),
    }
}

/// Sample up to `n_per_lang` matching rows for each language.
///
/// Every requested language gets an entry, possibly empty.
pub fn recommend_from_dataset<R: Rng + ?Sized>(
    mood: &Mood,
    languages: &[String],
    n_per_lang: usize,
    dataset: &Dataset,
    rng: &mut R,
) -> RecommendationMap {
    let filter_language = dataset.has_column(LANGUAGE_COLUMN);
    let filter_mood = dataset.has_mood_features();

    let mut results = RecommendationMap::new();

    for lang in languages {
        let wanted = lang.trim().to_lowercase();

        // First row wins when an id repeats; rows without an id are kept.
        let mut seen: HashSet<&str> = HashSet::new();
        let candidates: Vec<&DatasetRow> = dataset
            .rows()
            .iter()
            .filter(|row| !filter_language || row.language.as_deref() == Some(wanted.as_str()))
            .filter(|row| !filter_mood || matches_mood(mood, row))
            .filter(|row| match row.id.as_deref() {
                Some(id) => seen.insert(id),
                None => true,
            })
            .collect();

        let amount = n_per_lang.min(candidates.len());
        let tracks: Vec<Track> = index::sample(rng, candidates.len(), amount)
            .into_iter()
            .map(|i| row_to_track(candidates[i], lang))
            .collect();

        log::debug!(
            "Dataset: {} candidates for '{}' ({}), picked {}",
            candidates.len(),
            lang,
            mood,
            tracks.len()
        );

        results.insert(lang.clone(), tracks);
    }

    results
}

/// Load the dataset at `csv_path` and recommend from it.
///
/// A missing file gives an empty list for every language.
pub fn recommend_from_csv<R: Rng + ?Sized>(
    mood: &str,
    languages: &[String],
    n_per_lang: usize,
    csv_path: &Path,
    rng: &mut R,
) -> Result<RecommendationMap, RecommendationError> {
    let mood = Mood::canonicalize(mood);
    let dataset = Dataset::load(csv_path)?;
    Ok(recommend_from_dataset(&mood, languages, n_per_lang, &dataset, rng))
}
