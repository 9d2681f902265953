//! Catalog query orchestrator.
//!
//! Builds the home view and the per-kind catalog views by fanning out
//! independent upstream queries and joining them. The join is fail-fast: the
//! first error drops every sibling still in flight and fails the whole view,
//! so a partially populated collection list is never returned.

pub mod hero;
pub mod rows;

use futures::future::try_join_all;
use tracing::debug;

use crate::error::Result;
use crate::model::{CatalogItem, Collection, HomeView};
use crate::shaper::{to_catalog_items, truncate, COLLECTION_LIMIT};
use crate::upstream::{CatalogSource, MediaKind};

use rows::{CuratedRow, RowQuery};

/// Home view: mixed movie and series rows under the home hero.
pub async fn home_view(source: &dyn CatalogSource) -> Result<HomeView> {
    let collections = curated_rows(source, rows::HOME_ROWS).await?;
    Ok(HomeView {
        hero: hero::HOME_HERO,
        collections,
    })
}

/// Catalog view for one media kind.
///
/// The genre walk and the curated rows run concurrently. The per-genre
/// aggregate is fetched and shaped but not returned; only the curated rows
/// make it into the view.
pub async fn kind_view(source: &dyn CatalogSource, kind: MediaKind) -> Result<HomeView> {
    let (aggregate, collections) = futures::try_join!(
        genre_aggregate(source, kind),
        curated_rows(source, rows::for_kind(kind)),
    )?;

    debug!(
        kind = ?kind,
        genre_items = aggregate.len(),
        rows = collections.len(),
        "catalog view assembled"
    );

    Ok(HomeView {
        hero: hero::for_kind(kind),
        collections,
    })
}

/// Every genre's first page, shaped and flattened in genre order.
pub async fn genre_aggregate(
    source: &dyn CatalogSource,
    kind: MediaKind,
) -> Result<Vec<CatalogItem>> {
    let genres = source.genres(kind).await?;

    let per_genre = try_join_all(genres.iter().map(|genre| async move {
        let raw = source.discover_by_genre(kind, genre.id).await?;
        Ok::<_, crate::error::Error>(to_catalog_items(raw, kind, Some(genre.name.as_str())))
    }))
    .await?;

    Ok(per_genre.into_iter().flatten().collect())
}

/// Fetch and shape every row concurrently; rows come back in table order.
pub async fn curated_rows(
    source: &dyn CatalogSource,
    rows: &[CuratedRow],
) -> Result<Vec<Collection>> {
    try_join_all(rows.iter().map(|row| fetch_row(source, row))).await
}

async fn fetch_row(source: &dyn CatalogSource, row: &CuratedRow) -> Result<Collection> {
    let raw = match row.query {
        RowQuery::Listing(listing) => source.listing(row.kind, listing).await?,
        RowQuery::Genre(id) => source.discover_by_genre(row.kind, id).await?,
    };

    Ok(Collection {
        title: row.title.to_string(),
        items: to_catalog_items(truncate(raw, COLLECTION_LIMIT), row.kind, row.genre),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::upstream::test_support::{movie, ranked, show, StubSource};
    use crate::upstream::{Genre, Listing};

    fn series_stub() -> StubSource {
        let mut stub = StubSource::default();
        stub.genres.insert(
            MediaKind::Series,
            vec![
                Genre { id: 18, name: "Drama".into() },
                Genre { id: 35, name: "Comedy".into() },
            ],
        );
        stub.by_genre.insert((MediaKind::Series, 18), ranked(100, 20));
        stub.by_genre.insert((MediaKind::Series, 35), ranked(200, 12));
        for id in [
            rows::SCI_FI_FANTASY,
            rows::ACTION_ADVENTURE,
            rows::MYSTERY,
            rows::THRILLER,
        ] {
            stub.by_genre.insert((MediaKind::Series, id), ranked(id * 10, 3));
        }
        stub.listings
            .insert((MediaKind::Series, Listing::Trending), ranked(1, 20));
        stub.listings
            .insert((MediaKind::Series, Listing::TopRated), vec![show(7, "Dark", None)]);
        stub
    }

    fn home_stub() -> StubSource {
        let mut stub = StubSource::default();
        for kind in [MediaKind::Movie, MediaKind::Series] {
            for listing in [Listing::Trending, Listing::Popular, Listing::TopRated] {
                stub.listings.insert((kind, listing), ranked(1, 15));
            }
        }
        stub
    }

    #[tokio::test]
    async fn series_view_has_rows_in_declared_order() {
        let stub = series_stub();
        let view = kind_view(&stub, MediaKind::Series).await.unwrap();

        let titles: Vec<&str> = view.collections.iter().map(|c| c.title.as_str()).collect();
        let expected: Vec<&str> = rows::SERIES_ROWS.iter().map(|r| r.title).collect();
        assert_eq!(titles, expected);
        assert_eq!(view.hero, hero::SERIES_HERO);
    }

    #[tokio::test]
    async fn rows_are_capped_and_keep_rank_order() {
        let stub = series_stub();
        let view = kind_view(&stub, MediaKind::Series).await.unwrap();

        for collection in &view.collections {
            assert!(collection.items.len() <= COLLECTION_LIMIT);
        }
        let trending: Vec<u64> = view.collections[0].items.iter().map(|i| i.id).collect();
        assert_eq!(trending, (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn genre_rows_are_tagged_and_missing_posters_stay_null() {
        let stub = series_stub();
        let view = kind_view(&stub, MediaKind::Series).await.unwrap();

        let comedy = &view.collections[2];
        assert!(comedy.items.iter().all(|i| i.genre.as_deref() == Some("Comedy")));
        assert!(comedy.items.iter().all(|i| i.kind == MediaKind::Series));

        let top_rated = &view.collections[1];
        assert_eq!(top_rated.items.len(), 1);
        assert_eq!(top_rated.items[0].poster, None);
    }

    #[tokio::test]
    async fn genre_aggregate_flattens_in_genre_order() {
        let stub = series_stub();
        let items = genre_aggregate(&stub, MediaKind::Series).await.unwrap();
        assert_eq!(items.len(), 32);
        assert_eq!(items[0].genre.as_deref(), Some("Drama"));
        assert_eq!(items[20].genre.as_deref(), Some("Comedy"));
        assert_eq!(items[20].id, 200);
    }

    #[tokio::test]
    async fn one_failing_row_fails_the_view() {
        let stub = series_stub().fail("listing:Series:TopRated");
        let err = kind_view(&stub, MediaKind::Series).await.unwrap_err();
        assert!(matches!(err, Error::Upstream { .. }));
    }

    #[tokio::test]
    async fn failing_genre_walk_fails_the_view() {
        let stub = series_stub().fail("genre:Series:18");
        assert!(kind_view(&stub, MediaKind::Series).await.is_err());

        let stub = series_stub().fail("genres:Series");
        assert!(kind_view(&stub, MediaKind::Series).await.is_err());
    }

    #[tokio::test]
    async fn home_view_mixes_kinds() {
        let stub = home_stub();
        let view = home_view(&stub).await.unwrap();

        assert_eq!(view.hero, hero::HOME_HERO);
        assert_eq!(view.collections.len(), 6);
        assert!(view.collections.iter().all(|c| c.items.len() == 10));
        assert!(view.collections[0].items.iter().all(|i| i.kind == MediaKind::Movie));
        assert!(view.collections[1].items.iter().all(|i| i.kind == MediaKind::Series));
        assert!(!stub.calls().iter().any(|c| c.starts_with("genres")));
    }

    #[tokio::test]
    async fn movie_view_uses_movie_rows() {
        let mut stub = StubSource::default();
        stub.genres.insert(MediaKind::Movie, vec![]);
        for listing in [
            Listing::Trending,
            Listing::Popular,
            Listing::TopRated,
            Listing::Upcoming,
        ] {
            stub.listings.insert((MediaKind::Movie, listing), vec![movie(1, "Heat", None)]);
        }
        stub.by_genre.insert((MediaKind::Movie, rows::HORROR), ranked(50, 2));
        stub.by_genre.insert((MediaKind::Movie, rows::ANIMATION), ranked(60, 2));

        let view = kind_view(&stub, MediaKind::Movie).await.unwrap();
        assert_eq!(view.hero, hero::MOVIE_HERO);
        assert_eq!(view.collections.len(), rows::MOVIE_ROWS.len());
        assert_eq!(view.collections[3].items[0].genre.as_deref(), Some("Horror"));
    }
}
