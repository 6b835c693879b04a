use crate::spotify::{CatalogTrack, SpotifyError};

/// A remote catalog that can answer free-text track searches.
pub trait TrackSearch {
    /// Search for up to `limit` tracks matching `query`, in the catalog's
    /// own relevance order.
    fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<CatalogTrack>, SpotifyError>;
}
