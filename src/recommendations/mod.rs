//! Mood-driven track recommendations.
//!
//! Searches the Spotify catalog for each requested language and falls back
//! to a local CSV dataset for any language the search could not serve.

pub mod dataset;
pub mod engine;
pub mod errors;
pub mod local;
pub mod search;
pub mod types;

pub use dataset::Dataset;
pub use engine::{recommend, recommend_with_search};
pub use errors::RecommendationError;
pub use local::{recommend_from_csv, recommend_from_dataset};
pub use search::recommend_from_search;
pub use types::{
    flatten, normalize_languages, Preference, RecommendationMap, RecommendationRequest, Track,
};
