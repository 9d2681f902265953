//! Scripted in-memory [`CatalogSource`] for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{Genre, RawCoreRecord, RawEpisode, RawImageSet, RawListItem, RawSeason, RawVideo};
use super::{CatalogSource, Listing, MediaKind};
use crate::error::{Error, Result};

/// Source whose answers are fixed up front. Any call without a scripted
/// answer, or whose operation is listed in `failing`, returns an upstream
/// error. Every call is recorded in order.
#[derive(Default)]
pub struct StubSource {
    pub genres: HashMap<MediaKind, Vec<Genre>>,
    pub by_genre: HashMap<(MediaKind, u64), Vec<RawListItem>>,
    pub listings: HashMap<(MediaKind, Listing), Vec<RawListItem>>,
    pub cores: HashMap<(MediaKind, u64), RawCoreRecord>,
    pub videos: HashMap<(MediaKind, u64), Vec<RawVideo>>,
    pub images: HashMap<(MediaKind, u64), RawImageSet>,
    pub recommendations: HashMap<(MediaKind, u64), Vec<RawListItem>>,
    pub seasons: HashMap<(u64, u32), RawSeason>,
    pub searches: HashMap<MediaKind, Vec<RawListItem>>,
    pub multi: Vec<RawListItem>,
    pub failing: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn fail(mut self, call: &str) -> Self {
        self.failing.insert(call.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.contains(&call) {
            return Err(Error::upstream("stub", format!("scripted failure: {call}")));
        }
        Ok(())
    }
}

fn missing(call: &str) -> Error {
    Error::upstream("stub", format!("no scripted answer for {call}"))
}

#[async_trait]
impl CatalogSource for StubSource {
    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>> {
        let call = format!("genres:{kind:?}");
        self.record(call.clone())?;
        self.genres.get(&kind).cloned().ok_or_else(|| missing(&call))
    }

    async fn discover_by_genre(&self, kind: MediaKind, genre_id: u64) -> Result<Vec<RawListItem>> {
        let call = format!("genre:{kind:?}:{genre_id}");
        self.record(call.clone())?;
        self.by_genre
            .get(&(kind, genre_id))
            .cloned()
            .ok_or_else(|| missing(&call))
    }

    async fn listing(&self, kind: MediaKind, listing: Listing) -> Result<Vec<RawListItem>> {
        let call = format!("listing:{kind:?}:{listing:?}");
        self.record(call.clone())?;
        self.listings
            .get(&(kind, listing))
            .cloned()
            .ok_or_else(|| missing(&call))
    }

    async fn core_record(&self, kind: MediaKind, id: u64) -> Result<RawCoreRecord> {
        let call = format!("core:{kind:?}:{id}");
        self.record(call.clone())?;
        self.cores.get(&(kind, id)).cloned().ok_or_else(|| missing(&call))
    }

    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<RawVideo>> {
        let call = format!("videos:{kind:?}:{id}");
        self.record(call)?;
        Ok(self.videos.get(&(kind, id)).cloned().unwrap_or_default())
    }

    async fn images(&self, kind: MediaKind, id: u64) -> Result<RawImageSet> {
        let call = format!("images:{kind:?}:{id}");
        self.record(call)?;
        Ok(self.images.get(&(kind, id)).cloned().unwrap_or_default())
    }

    async fn recommendations(&self, kind: MediaKind, id: u64) -> Result<Vec<RawListItem>> {
        let call = format!("recommendations:{kind:?}:{id}");
        self.record(call)?;
        Ok(self
            .recommendations
            .get(&(kind, id))
            .cloned()
            .unwrap_or_default())
    }

    async fn season(&self, series_id: u64, season_number: u32) -> Result<RawSeason> {
        let call = format!("season:{series_id}:{season_number}");
        self.record(call.clone())?;
        self.seasons
            .get(&(series_id, season_number))
            .cloned()
            .ok_or_else(|| missing(&call))
    }

    async fn search(&self, kind: MediaKind, _query: &str) -> Result<Vec<RawListItem>> {
        let call = format!("search:{kind:?}");
        self.record(call)?;
        Ok(self.searches.get(&kind).cloned().unwrap_or_default())
    }

    async fn search_multi(&self, _query: &str) -> Result<Vec<RawListItem>> {
        self.record("search_multi".to_string())?;
        Ok(self.multi.clone())
    }
}

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

pub fn movie(id: u64, title: &str, poster: Option<&str>) -> RawListItem {
    RawListItem {
        id,
        title: Some(title.to_string()),
        poster_path: poster.map(String::from),
        ..RawListItem::default()
    }
}

pub fn show(id: u64, name: &str, poster: Option<&str>) -> RawListItem {
    RawListItem {
        id,
        name: Some(name.to_string()),
        poster_path: poster.map(String::from),
        ..RawListItem::default()
    }
}

/// `count` ranked items with posters, ids starting at `first_id`.
pub fn ranked(first_id: u64, count: u64) -> Vec<RawListItem> {
    (0..count)
        .map(|i| {
            let id = first_id + i;
            movie(id, &format!("Title {id}"), Some(&format!("/p{id}.jpg")))
        })
        .collect()
}

pub fn episode(number: u32, still: Option<&str>) -> RawEpisode {
    RawEpisode {
        episode_number: Some(number),
        name: Some(format!("Episode {number}")),
        overview: None,
        still_path: still.map(String::from),
        runtime: Some(45),
    }
}
