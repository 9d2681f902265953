//! Curated row tables, in the order rows appear in each view.

use crate::upstream::{Listing, MediaKind};

/// What a curated row is filled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowQuery {
    Listing(Listing),
    /// Popularity-sorted discovery within one genre id.
    Genre(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedRow {
    pub title: &'static str,
    pub kind: MediaKind,
    pub query: RowQuery,
    /// Genre label attached to every item of a genre row.
    pub genre: Option<&'static str>,
}

const fn listing(title: &'static str, kind: MediaKind, listing: Listing) -> CuratedRow {
    CuratedRow {
        title,
        kind,
        query: RowQuery::Listing(listing),
        genre: None,
    }
}

const fn genre(title: &'static str, kind: MediaKind, id: u64, label: &'static str) -> CuratedRow {
    CuratedRow {
        title,
        kind,
        query: RowQuery::Genre(id),
        genre: Some(label),
    }
}

pub const HORROR: u64 = 27;
pub const ANIMATION: u64 = 16;
pub const COMEDY: u64 = 35;
pub const SCI_FI_FANTASY: u64 = 10765;
pub const ACTION_ADVENTURE: u64 = 10759;
pub const MYSTERY: u64 = 9648;
pub const THRILLER: u64 = 53;

pub const MOVIE_ROWS: &[CuratedRow] = &[
    listing("Trending Movies this week 🔥", MediaKind::Movie, Listing::Trending),
    listing("Popular Movies ⭐", MediaKind::Movie, Listing::Popular),
    listing("Top Rated Movies 🎥", MediaKind::Movie, Listing::TopRated),
    genre("Horror Movies 🐦‍⬛", MediaKind::Movie, HORROR, "Horror"),
    listing("Upcoming movies 🎬", MediaKind::Movie, Listing::Upcoming),
    genre("Cartoon Movies ☀️", MediaKind::Movie, ANIMATION, "Animation"),
];

pub const SERIES_ROWS: &[CuratedRow] = &[
    listing("Trending Series this week 🎉", MediaKind::Series, Listing::Trending),
    listing("Top Rated TV Shows 🔥", MediaKind::Series, Listing::TopRated),
    genre("Comedy Series 😂", MediaKind::Series, COMEDY, "Comedy"),
    genre("Science Fiction Series 🚀", MediaKind::Series, SCI_FI_FANTASY, "Science Fiction"),
    genre("Fantasy Series 🧙", MediaKind::Series, ACTION_ADVENTURE, "Fantasy"),
    genre("Mystery Series 🕵️", MediaKind::Series, MYSTERY, "Mystery"),
    genre("Thriller Series 🔪", MediaKind::Series, THRILLER, "Thriller"),
];

pub const HOME_ROWS: &[CuratedRow] = &[
    listing("Trending Movies this week 🔥", MediaKind::Movie, Listing::Trending),
    listing("Trending Series this week 📈", MediaKind::Series, Listing::Trending),
    listing("Popular Movies ⭐", MediaKind::Movie, Listing::Popular),
    listing("Popular Series 🎉", MediaKind::Series, Listing::Popular),
    listing("Top Rated Movies 🎥", MediaKind::Movie, Listing::TopRated),
    listing("Top Rated Series 📚", MediaKind::Series, Listing::TopRated),
];

/// Curated rows of the catalog view for `kind`.
pub fn for_kind(kind: MediaKind) -> &'static [CuratedRow] {
    match kind {
        MediaKind::Movie => MOVIE_ROWS,
        MediaKind::Series => SERIES_ROWS,
    }
}
