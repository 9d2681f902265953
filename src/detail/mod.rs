//! Detail assembler.
//!
//! Produces one [`DetailRecord`] per title. The core record, videos, images
//! and recommendations are independent and fetched concurrently. For series,
//! the season count is only known once the core record has arrived, so the
//! season walk runs afterwards, one season at a time, in order.
//!
//! Any failure aborts the whole assembly. Episodes collected before a failing
//! season are discarded along with everything else.

use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{DetailRecord, Episode};
use crate::shaper::normalize::{self, CoreEntry};
use crate::shaper::{filter_with_image, to_detail_record, to_episode};
use crate::upstream::{CatalogSource, MediaKind};

/// Assemble the detail page of a movie or series.
pub async fn assemble(source: &dyn CatalogSource, kind: MediaKind, id: u64) -> Result<DetailRecord> {
    let (core, videos, images, recommendations) = futures::try_join!(
        source.core_record(kind, id),
        source.videos(kind, id),
        source.images(kind, id),
        source.recommendations(kind, id),
    )?;

    let core = CoreEntry::from(core);
    let seasons = core.seasons;
    let mut record = to_detail_record(kind, core, videos, images, recommendations);

    if kind == MediaKind::Series {
        let episodes: Vec<Episode> = season_walk(source, id, seasons).try_concat().await?;
        debug!(id, seasons, episodes = episodes.len(), "season walk finished");
        record.episodes = Some(episodes);
    }

    Ok(record)
}

/// Lazily walk seasons `1..=seasons` of a series.
///
/// Each item is one season's episodes that have an image, in provider order.
/// A season is only requested once the previous one has been yielded, and
/// dropping the stream stops the walk.
pub fn season_walk<'a>(
    source: &'a dyn CatalogSource,
    series_id: u64,
    seasons: u32,
) -> impl Stream<Item = Result<Vec<Episode>>> + Send + 'a {
    stream::iter(1..=seasons).then(move |season_number| async move {
        let raw = source.season(series_id, season_number).await?;
        let episodes: Vec<Episode> = normalize::season_episodes(raw)
            .into_iter()
            .map(|e| to_episode(e, false))
            .collect();
        Ok::<_, Error>(filter_with_image(episodes))
    })
}

/// Every episode of one season, including those without an image.
pub async fn season_listing(
    source: &dyn CatalogSource,
    series_id: u64,
    season_number: u32,
) -> Result<Vec<Episode>> {
    let raw = source.season(series_id, season_number).await?;
    Ok(normalize::season_episodes(raw)
        .into_iter()
        .map(|e| to_episode(e, true))
        .collect())
}
