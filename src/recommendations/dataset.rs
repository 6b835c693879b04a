//! Local track-feature dataset.
//!
//! A CSV file with a header row. Every column is optional; the ones we
//! recognise are:
//!
//! ```text
//! language, valence, energy, track, artist, id, preview_url, album_image_url
//! ```
//!
//! Extra columns are ignored. A missing file loads as an empty dataset.

use std::io::Read;
use std::path::Path;

use super::errors::RecommendationError;

pub const LANGUAGE_COLUMN: &str = "language";
pub const VALENCE_COLUMN: &str = "valence";
pub const ENERGY_COLUMN: &str = "energy";

/// One row of the dataset. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetRow {
    /// Trimmed and lower-cased
    pub language: Option<String>,
    /// `None` if absent or not a number
    pub valence: Option<f64>,
    /// `None` if absent or not a number
    pub energy: Option<f64>,
    pub track: Option<String>,
    pub artist: Option<String>,
    pub id: Option<String>,
    pub preview_url: Option<String>,
    pub album_image_url: Option<String>,
}

/// An in-memory, read-only copy of the dataset file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Load the dataset at `path`.
    ///
    /// A missing file is not an error and yields an empty dataset. A file
    /// that exists but cannot be read or parsed is.
    pub fn load(path: &Path) -> Result<Self, RecommendationError> {
        if !path.exists() {
            log::info!("Dataset '{}' not found, using empty dataset", path.display());
            return Ok(Self::default());
        }

        let file = std::fs::File::open(path).map_err(|e| RecommendationError::dataset(path, e))?;
        let dataset = Self::from_reader(file).map_err(|e| RecommendationError::dataset(path, e))?;

        log::debug!(
            "Loaded {} rows from '{}' (columns: {:?})",
            dataset.len(),
            path.display(),
            dataset.columns
        );

        Ok(dataset)
    }

    /// Parse CSV data with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let language = column(LANGUAGE_COLUMN);
        let valence = column(VALENCE_COLUMN);
        let energy = column(ENERGY_COLUMN);
        let track = column("track");
        let artist = column("artist");
        let id = column("id");
        let preview_url = column("preview_url");
        let album_image_url = column("album_image_url");

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let get = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            let number = |idx: Option<usize>| get(idx).and_then(|s| s.parse::<f64>().ok());

            rows.push(DatasetRow {
                language: get(language).map(|s| s.to_lowercase()),
                valence: number(valence),
                energy: number(energy),
                track: get(track),
                artist: get(artist),
                id: get(id),
                preview_url: get(preview_url),
                album_image_url: get(album_image_url),
            });
        }

        Ok(Self {
            columns: headers.iter().map(str::to_string).collect(),
            rows,
        })
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Whether mood heuristics can be applied at all.
    pub fn has_mood_features(&self) -> bool {
        self.has_column(VALENCE_COLUMN) && self.has_column(ENERGY_COLUMN)
    }
}
