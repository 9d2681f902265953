//! One normalization pass per raw record type.
//!
//! Every field fallback the gateway applies lives here, so the defaults can
//! be audited in one table instead of being scattered across call sites:
//!
//! | record      | field               | source                          | default |
//! |-------------|---------------------|---------------------------------|---------|
//! | list entry  | `title`             | `title`, else `name`            | `""`    |
//! | list entry  | `poster_path`       | `poster_path`                   | absent  |
//! | list entry  | `backdrop_path`     | `backdrop_path`                 | absent  |
//! | core record | `title`             | `title`, else `name`            | `""`    |
//! | core record | `description`       | `overview`                      | `""`    |
//! | core record | `tagline`           | `tagline`                       | `null`  |
//! | core record | `genres`            | `genres[].name`                 | `[]`    |
//! | core record | `date`              | `release_date`, else `first_air_date` | `""` |
//! | core record | `runtime`           | `runtime`                       | `0`     |
//! | core record | `seasons`           | `number_of_seasons`             | `0`     |
//! | episode     | `number`            | `episode_number`                | `0`     |
//! | episode     | `title`             | `name`                          | `""`    |
//! | episode     | `description`       | `overview`                      | `""`    |
//! | episode     | `runtime`           | `runtime`                       | `0`     |
//! | season      | `episodes`          | `episodes`                      | `[]`    |
//!
//! Empty strings count as absent for paths and taglines, so an empty path can
//! never turn into a URL.

use crate::upstream::{RawCoreRecord, RawEpisode, RawListItem, RawSeason};

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn text(primary: Option<String>, fallback: Option<String>) -> String {
    present(primary).or(present(fallback)).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub media_type: Option<String>,
}

impl From<RawListItem> for ListEntry {
    fn from(raw: RawListItem) -> Self {
        Self {
            id: raw.id,
            title: text(raw.title, raw.name),
            poster_path: present(raw.poster_path),
            backdrop_path: present(raw.backdrop_path),
            media_type: present(raw.media_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreEntry {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tagline: Option<String>,
    pub genres: Vec<String>,
    pub date: String,
    pub runtime: u32,
    pub seasons: u32,
    pub poster_path: Option<String>,
}

impl From<RawCoreRecord> for CoreEntry {
    fn from(raw: RawCoreRecord) -> Self {
        Self {
            id: raw.id,
            title: text(raw.title, raw.name),
            description: raw.overview.unwrap_or_default(),
            tagline: present(raw.tagline),
            genres: raw
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.name)
                .collect(),
            date: text(raw.release_date, raw.first_air_date),
            runtime: raw.runtime.unwrap_or(0),
            seasons: raw.number_of_seasons.unwrap_or(0),
            poster_path: present(raw.poster_path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeEntry {
    pub number: u32,
    pub title: String,
    pub description: String,
    pub still_path: Option<String>,
    pub runtime: u32,
}

impl From<RawEpisode> for EpisodeEntry {
    fn from(raw: RawEpisode) -> Self {
        Self {
            number: raw.episode_number.unwrap_or(0),
            title: raw.name.unwrap_or_default(),
            description: raw.overview.unwrap_or_default(),
            still_path: present(raw.still_path),
            runtime: raw.runtime.unwrap_or(0),
        }
    }
}

/// Episodes of a season, in provider order.
pub fn season_episodes(raw: RawSeason) -> Vec<EpisodeEntry> {
    raw.episodes
        .unwrap_or_default()
        .into_iter()
        .map(EpisodeEntry::from)
        .collect()
}
