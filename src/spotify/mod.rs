pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::SpotifyClient;
pub use config::*;
pub use error::SpotifyError;
pub use models::CatalogTrack;
