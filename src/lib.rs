//! moodtunes - music recommendations from a detected mood.
//!
//! A mood string (from a face or text classifier, or typed by hand) is
//! canonicalized, then used to search the Spotify catalog once per
//! preferred language. Languages the catalog cannot serve are filled from a
//! local CSV dataset of track features.
//!
//! ```no_run
//! use moodtunes::recommendations::{recommend, RecommendationRequest};
//! use moodtunes::spotify::SpotifyCredentials;
//!
//! let request = RecommendationRequest::new("happy", vec!["hindi".to_string()]);
//! let tracks = recommend(&request, &SpotifyCredentials::from_env(), &mut rand::rng())
//!     .expect("dataset unreadable");
//! for track in tracks {
//!     println!("{:?} - {:?}", track.track, track.artist);
//! }
//! ```

pub mod cli;
pub mod errors;
pub mod mood;
pub mod providers;
pub mod recommendations;
pub mod spotify;

pub use errors::AppError;
pub use mood::{canonicalize_mood, Mood};
pub use recommendations::{recommend, RecommendationRequest, Track};
