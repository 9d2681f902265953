//! Upstream catalog client.
//!
//! This module defines the [`CatalogSource`] trait that the orchestrator, the
//! detail assembler and search are written against, along with the raw
//! record types the provider returns.
//!
//! # Module layout
//!
//! - [`types`] -- Raw provider records, decoded but not yet normalized.
//! - [`tmdb`] -- The reqwest-backed TMDB v3 implementation.

pub mod tmdb;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use tmdb::TmdbClient;
pub use types::{
    Genre, RawCoreRecord, RawEpisode, RawImage, RawImageSet, RawListItem, RawSeason, RawVideo,
};

// ---------------------------------------------------------------------------
// Query vocabulary
// ---------------------------------------------------------------------------

/// The two kinds of title the catalog deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// Path segment the provider uses for this kind.
    pub fn path_segment(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }

    /// Parse a caller-supplied type tag. Accepts the provider's `tv` alias.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "movie" => Some(MediaKind::Movie),
            "series" | "tv" => Some(MediaKind::Series),
            _ => None,
        }
    }
}

/// Curated, provider-ranked listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    /// Trending this week.
    Trending,
    Popular,
    TopRated,
    /// Upcoming releases; "on the air" for series.
    Upcoming,
}

// ---------------------------------------------------------------------------
// Source trait
// ---------------------------------------------------------------------------

/// Async trait over the upstream metadata provider.
///
/// Every call either returns decoded data or fails with
/// [`Error::Upstream`](crate::error::Error::Upstream). Implementations must
/// not retry and must not impose a timeout beyond the transport default.
///
/// Sources are shared across request tasks behind an `Arc`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Genre set for a media kind.
    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>>;

    /// First page of titles in a genre, sorted by popularity.
    async fn discover_by_genre(&self, kind: MediaKind, genre_id: u64) -> Result<Vec<RawListItem>>;

    /// First page of a curated listing, in provider rank order.
    async fn listing(&self, kind: MediaKind, listing: Listing) -> Result<Vec<RawListItem>>;

    /// Core metadata for one title.
    async fn core_record(&self, kind: MediaKind, id: u64) -> Result<RawCoreRecord>;

    /// Videos (trailers, teasers) attached to a title.
    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<RawVideo>>;

    /// Artwork attached to a title.
    async fn images(&self, kind: MediaKind, id: u64) -> Result<RawImageSet>;

    /// Titles the provider recommends alongside `id`.
    async fn recommendations(&self, kind: MediaKind, id: u64) -> Result<Vec<RawListItem>>;

    /// One season of a series, with its episodes.
    async fn season(&self, series_id: u64, season_number: u32) -> Result<RawSeason>;

    /// Free-text search within one media kind.
    async fn search(&self, kind: MediaKind, query: &str) -> Result<Vec<RawListItem>>;

    /// Free-text search across every media type the provider knows.
    async fn search_multi(&self, query: &str) -> Result<Vec<RawListItem>>;

    async fn trending(&self, kind: MediaKind) -> Result<Vec<RawListItem>> {
        self.listing(kind, Listing::Trending).await
    }

    async fn popular(&self, kind: MediaKind) -> Result<Vec<RawListItem>> {
        self.listing(kind, Listing::Popular).await
    }

    async fn top_rated(&self, kind: MediaKind) -> Result<Vec<RawListItem>> {
        self.listing(kind, Listing::TopRated).await
    }

    async fn upcoming(&self, kind: MediaKind) -> Result<Vec<RawListItem>> {
        self.listing(kind, Listing::Upcoming).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments() {
        assert_eq!(MediaKind::Movie.path_segment(), "movie");
        assert_eq!(MediaKind::Series.path_segment(), "tv");
    }

    #[test]
    fn parse_accepts_tv_alias() {
        assert_eq!(MediaKind::parse("movie"), Some(MediaKind::Movie));
        assert_eq!(MediaKind::parse("Series"), Some(MediaKind::Series));
        assert_eq!(MediaKind::parse("tv"), Some(MediaKind::Series));
        assert_eq!(MediaKind::parse("game"), None);
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MediaKind::Series).unwrap(), "\"series\"");
    }
}
