//! Free-text search over both media kinds.

use crate::error::Result;
use crate::model::CatalogItem;
use crate::shaper::images::ImageAsset;
use crate::shaper::normalize::ListEntry;
use crate::shaper::to_catalog_items;
use crate::upstream::{CatalogSource, MediaKind};

/// Movie results followed by series results, each in provider order.
///
/// No dedup, ranking or image filtering happens here.
pub async fn search(source: &dyn CatalogSource, term: &str) -> Result<Vec<CatalogItem>> {
    let (movies, series) = futures::try_join!(
        source.search(MediaKind::Movie, term),
        source.search(MediaKind::Series, term),
    )?;

    let mut items = to_catalog_items(movies, MediaKind::Movie, None);
    items.extend(to_catalog_items(series, MediaKind::Series, None));
    Ok(items)
}

/// Single multi-type query, keeping results that can be displayed.
///
/// A result survives when it has an id, a title and at least one of a poster
/// or a backdrop. Anything the provider does not tag as a movie is treated as
/// a series.
pub async fn search_multi(source: &dyn CatalogSource, term: &str) -> Result<Vec<CatalogItem>> {
    let results = source.search_multi(term).await?;

    Ok(results
        .into_iter()
        .map(ListEntry::from)
        .filter(displayable)
        .map(|entry| {
            let kind = match entry.media_type.as_deref() {
                Some("movie") => MediaKind::Movie,
                _ => MediaKind::Series,
            };
            CatalogItem {
                id: entry.id,
                title: entry.title,
                poster: ImageAsset::thumbnail(entry.poster_path).url(),
                kind,
                genre: None,
            }
        })
        .collect())
}

fn displayable(entry: &ListEntry) -> bool {
    entry.id != 0
        && !entry.title.is_empty()
        && (entry.poster_path.is_some() || entry.backdrop_path.is_some())
}
