//! Raw provider records.
//!
//! These mirror the provider's JSON closely and keep every field optional
//! that the provider is known to omit or null. Defaults are applied in one
//! place, [`crate::shaper::normalize`], never here.

use serde::Deserialize;

/// A genre as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// An entry in any ranked list: discovery, listings, recommendations, search.
///
/// Movies carry `title`, series carry `name`; multi-search mixes both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Only present in multi-search results ("movie", "tv", "person").
    #[serde(default)]
    pub media_type: Option<String>,
}

/// Core metadata for a movie or a series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCoreRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVideo {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawImage {
    pub file_path: String,
}

/// Artwork grouped by kind, in provider order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImageSet {
    #[serde(default)]
    pub backdrops: Vec<RawImage>,
    #[serde(default)]
    pub logos: Vec<RawImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeason {
    #[serde(default)]
    pub episodes: Option<Vec<RawEpisode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEpisode {
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub still_path: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
}
