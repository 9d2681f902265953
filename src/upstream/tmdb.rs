//! TMDB (The Movie Database) catalog source.
//!
//! Implements [`CatalogSource`] by querying the TMDB v3 REST API. Every
//! request carries the API key and language tag and asks for page 1 where
//! the endpoint is paginated. There is no retry and no timeout override: a
//! slow or failing call surfaces immediately as an upstream error.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::types::{Genre, RawCoreRecord, RawImageSet, RawListItem, RawSeason, RawVideo};
use super::{CatalogSource, Listing, MediaKind};
use crate::config::UpstreamConfig;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Response envelopes (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenreList {
    genres: Option<Vec<Genre>>,
}

#[derive(Debug, Deserialize)]
struct Paged<T> {
    results: Option<Vec<T>>,
}

impl<T> Paged<T> {
    /// Results of a page whose `results` array is mandatory.
    fn required(self, operation: &'static str) -> Result<Vec<T>> {
        self.results
            .ok_or_else(|| Error::upstream(operation, "response is missing `results`"))
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// TMDB catalog source.
///
/// # Examples
///
/// ```no_run
/// use reelgate::config::UpstreamConfig;
/// use reelgate::upstream::TmdbClient;
///
/// let client = TmdbClient::new("your-api-key".into(), &UpstreamConfig::default());
/// ```
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    /// Create a client for the configured provider base URL and language.
    pub fn new(api_key: String, config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
        }
    }

    /// Issue a GET and decode the body.
    ///
    /// reqwest errors are stripped of their URL before being wrapped, since
    /// the query string carries the API key.
    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(operation, path, "TMDB request");

        let mut params: Vec<(&str, &str)> =
            vec![("api_key", self.api_key.as_str()), ("language", self.language.as_str())];
        params.extend_from_slice(extra_params);

        let resp = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::upstream(operation, e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::upstream(operation, format!("TMDB returned {status}")));
        }

        resp.json::<T>()
            .await
            .map_err(|e| Error::upstream(operation, e.without_url()))
    }
}

fn listing_path(kind: MediaKind, listing: Listing) -> String {
    let k = kind.path_segment();
    match (listing, kind) {
        (Listing::Trending, _) => format!("/trending/{k}/week"),
        (Listing::Popular, _) => format!("/{k}/popular"),
        (Listing::TopRated, _) => format!("/{k}/top_rated"),
        (Listing::Upcoming, MediaKind::Movie) => "/movie/upcoming".to_string(),
        (Listing::Upcoming, MediaKind::Series) => "/tv/on_the_air".to_string(),
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>> {
        let path = format!("/genre/{}/list", kind.path_segment());
        let body: GenreList = self.get("genres", &path, &[]).await?;
        body.genres
            .ok_or_else(|| Error::upstream("genres", "response is missing `genres`"))
    }

    async fn discover_by_genre(&self, kind: MediaKind, genre_id: u64) -> Result<Vec<RawListItem>> {
        let path = format!("/discover/{}", kind.path_segment());
        let genre = genre_id.to_string();
        let body: Paged<RawListItem> = self
            .get(
                "discover_by_genre",
                &path,
                &[("sort_by", "popularity.desc"), ("with_genres", genre.as_str())],
            )
            .await?;
        body.required("discover_by_genre")
    }

    async fn listing(&self, kind: MediaKind, listing: Listing) -> Result<Vec<RawListItem>> {
        let path = listing_path(kind, listing);
        let body: Paged<RawListItem> = self.get("listing", &path, &[("page", "1")]).await?;
        body.required("listing")
    }

    async fn core_record(&self, kind: MediaKind, id: u64) -> Result<RawCoreRecord> {
        let path = format!("/{}/{id}", kind.path_segment());
        self.get("core_record", &path, &[]).await
    }

    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<RawVideo>> {
        let path = format!("/{}/{id}/videos", kind.path_segment());
        let body: Paged<RawVideo> = self.get("videos", &path, &[]).await?;
        body.required("videos")
    }

    async fn images(&self, kind: MediaKind, id: u64) -> Result<RawImageSet> {
        let path = format!("/{}/{id}/images", kind.path_segment());
        self.get("images", &path, &[]).await
    }

    async fn recommendations(&self, kind: MediaKind, id: u64) -> Result<Vec<RawListItem>> {
        let path = format!("/{}/{id}/recommendations", kind.path_segment());
        let body: Paged<RawListItem> = self
            .get("recommendations", &path, &[("page", "1")])
            .await?;
        // An absent list here means "nothing to recommend", not a bad shape.
        Ok(body.results.unwrap_or_default())
    }

    async fn season(&self, series_id: u64, season_number: u32) -> Result<RawSeason> {
        let path = format!("/tv/{series_id}/season/{season_number}");
        self.get("season", &path, &[]).await
    }

    async fn search(&self, kind: MediaKind, query: &str) -> Result<Vec<RawListItem>> {
        let path = format!("/search/{}", kind.path_segment());
        let body: Paged<RawListItem> = self
            .get("search", &path, &[("query", query), ("page", "1")])
            .await?;
        body.required("search")
    }

    async fn search_multi(&self, query: &str) -> Result<Vec<RawListItem>> {
        let body: Paged<RawListItem> = self
            .get("search_multi", "/search/multi", &[("query", query)])
            .await?;
        body.required("search_multi")
    }
}
