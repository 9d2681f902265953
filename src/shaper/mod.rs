//! Response shaper: pure mapping from raw provider records to display
//! entities.
//!
//! Every function here is total. Missing data turns into the defaults listed
//! in [`normalize`], and a missing image path turns into `null` (rows) or an
//! empty string (detail slots), never into a URL.

pub mod images;
pub mod normalize;

use crate::model::{CatalogItem, DetailImages, DetailRecord, Episode};
use crate::upstream::{MediaKind, RawImage, RawImageSet, RawListItem, RawVideo};

use images::{ImageAsset, ImageKind};
use normalize::{CoreEntry, EpisodeEntry, ListEntry};

/// Maximum number of items in a collection row.
pub const COLLECTION_LIMIT: usize = 10;

const TRAILER_BASE_URL: &str = "https://www.youtube.com/watch?v=";

/// Entities that have a display image which some contexts require.
pub trait HasImage {
    fn display_image(&self) -> Option<&str>;
}

impl HasImage for CatalogItem {
    fn display_image(&self) -> Option<&str> {
        self.poster.as_deref()
    }
}

impl HasImage for Episode {
    fn display_image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// Shape a list entry into a row item. `poster` is `None` iff the raw poster
/// path is absent.
pub fn to_catalog_item(raw: RawListItem, kind: MediaKind, genre: Option<&str>) -> CatalogItem {
    let entry = ListEntry::from(raw);
    CatalogItem {
        id: entry.id,
        title: entry.title,
        poster: ImageAsset::thumbnail(entry.poster_path).url(),
        kind,
        genre: genre.map(String::from),
    }
}

/// Shape a whole ranked list, keeping provider order.
pub fn to_catalog_items(
    raw: Vec<RawListItem>,
    kind: MediaKind,
    genre: Option<&str>,
) -> Vec<CatalogItem> {
    raw.into_iter()
        .map(|r| to_catalog_item(r, kind, genre))
        .collect()
}

/// `seq[0..n]`, or the whole sequence when it is shorter.
pub fn truncate<T>(mut seq: Vec<T>, n: usize) -> Vec<T> {
    seq.truncate(n);
    seq
}

/// Drop entries whose display image is absent.
pub fn filter_with_image<T: HasImage>(seq: Vec<T>) -> Vec<T> {
    seq.into_iter()
        .filter(|e| e.display_image().is_some())
        .collect()
}

/// Shape one episode. `with_description` is set by the single-season listing.
pub fn to_episode(entry: EpisodeEntry, with_description: bool) -> Episode {
    Episode {
        number: entry.number,
        title: entry.title,
        description: with_description.then_some(entry.description),
        image: ImageAsset::detail(ImageKind::Still, entry.still_path).url(),
        runtime: entry.runtime,
    }
}

/// Movies show the second backdrop (if there are at least two), series the
/// first one.
fn select_backdrop(kind: MediaKind, backdrops: &[RawImage]) -> Option<&RawImage> {
    match kind {
        MediaKind::Movie => backdrops.get(1),
        MediaKind::Series => backdrops.first(),
    }
}

fn trailer_url(videos: &[RawVideo]) -> String {
    videos
        .first()
        .filter(|v| !v.key.is_empty())
        .map(|v| format!("{TRAILER_BASE_URL}{}", v.key))
        .unwrap_or_default()
}

/// Stitch the four independently fetched parts of a title into a detail
/// skeleton. Series get an empty `episodes` list for the season walk to fill.
pub fn to_detail_record(
    kind: MediaKind,
    core: CoreEntry,
    videos: Vec<RawVideo>,
    images: RawImageSet,
    recommendations: Vec<RawListItem>,
) -> DetailRecord {
    let backdrop = select_backdrop(kind, &images.backdrops).map(|b| b.file_path.clone());
    let logo = images.logos.first().map(|l| l.file_path.clone());

    let suggested = filter_with_image(to_catalog_items(recommendations, kind, None));

    let (runtime, seasons, episodes) = match kind {
        MediaKind::Movie => (Some(core.runtime), None, None),
        MediaKind::Series => (None, Some(core.seasons), Some(Vec::new())),
    };

    DetailRecord {
        id: core.id,
        title: core.title,
        description: core.description,
        tagline: core.tagline,
        genres: core.genres,
        date: core.date,
        runtime,
        seasons,
        suggested,
        trailer: trailer_url(&videos),
        images: DetailImages {
            backdrop: ImageAsset::detail(ImageKind::Backdrop, backdrop).url_or_empty(),
            poster: ImageAsset::detail(ImageKind::Poster, core.poster_path).url_or_empty(),
            logo: ImageAsset::detail(ImageKind::Logo, logo).url_or_empty(),
        },
        episodes,
    }
}
