//! Display-ready entities returned to callers.
//!
//! Everything here is built fresh per request by the shaper and assemblers and
//! is never mutated once a response has been put together.

use serde::Serialize;

use crate::upstream::MediaKind;

// ---------------------------------------------------------------------------
// Catalog rows
// ---------------------------------------------------------------------------

/// One title in a row, a search result or a suggestion list.
///
/// Identity is `(id, kind)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    /// Poster URL, `null` when the provider supplied no poster path.
    pub poster: Option<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// A named, ordered, length-capped row of titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub title: String,
    pub items: Vec<CatalogItem>,
}

/// Editorially pinned featured title shown atop a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub title: &'static str,
    pub description: &'static str,
    pub images: HeroImages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroImages {
    pub logo: &'static str,
    pub backdrop: &'static str,
}

/// A hero plus its rows, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub hero: Hero,
    pub collections: Vec<Collection>,
}

// ---------------------------------------------------------------------------
// Detail pages
// ---------------------------------------------------------------------------

/// A single title stitched together from its core record, videos, images,
/// recommendations and, for series, every season's episodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tagline: Option<String>,
    pub genres: Vec<String>,
    /// Release date for movies, first air date for series.
    pub date: String,
    /// Movies only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Series only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<u32>,
    pub suggested: Vec<CatalogItem>,
    /// YouTube watch URL of the first video, or empty.
    pub trailer: String,
    pub images: DetailImages,
    /// Series only, flattened in season-then-episode order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<Episode>>,
}

/// Artwork slots of a detail page. An absent asset is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailImages {
    pub backdrop: String,
    pub poster: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub number: u32,
    pub title: String,
    /// Only filled by the single-season listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: Option<String>,
    pub runtime: u32,
}
