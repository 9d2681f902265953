//! Editorially pinned heroes. These are not derived from any query.

use crate::model::{Hero, HeroImages};
use crate::upstream::MediaKind;

pub const HOME_HERO: Hero = Hero {
    id: 572802,
    kind: MediaKind::Movie,
    title: "Thanksgiving",
    description: "After a Black Friday riot ends in tragedy, a mysterious Thanksgiving-inspired killer terrorizes Plymouth, Massachusetts - the birthplace of the holiday. Picking off residents one by one, what begins as random revenge killings are soon revealed to be part of a larger, sinister holiday plan.",
    images: HeroImages {
        logo: "https://image.tmdb.org/t/p/w500/6L4JRz19g4wp1znDxn7WxvPo4U3.png",
        backdrop: "https://image.tmdb.org/t/p/original/ktHEdqmMWC1wdfPRMRCTZe2OISL.jpg",
    },
};

pub const MOVIE_HERO: Hero = Hero {
    id: 695721,
    kind: MediaKind::Movie,
    title: "The Hunger Games: The Ballad of Songbirds & Snakes",
    description: "64 years before he becomes the tyrannical president of Panem, Coriolanus Snow sees a chance for a change in fortunes when he mentors Lucy Gray Baird, the female tribute from District 12.",
    images: HeroImages {
        logo: "https://image.tmdb.org/t/p/w500/iPYwiuABxvJw0OMkEargeg34fgI.png",
        backdrop: "https://image.tmdb.org/t/p/original/5a4JdoFwll5DRtKMe7JLuGQ9yJm.jpg",
    },
};

pub const SERIES_HERO: Hero = Hero {
    id: 848326,
    kind: MediaKind::Series,
    title: "Rebel Moon - Part One: A Child of Fire",
    description: "When a peaceful colony on the edge of the galaxy finds itself threatened by the armies of the tyrannical Regent Balisarius, they dispatch Kora, a young woman with a mysterious past, to seek out warriors from neighboring planets to help them take a stand.",
    images: HeroImages {
        logo: "https://image.tmdb.org/t/p/w500/ydHHWD7DIYnSVT8G5p9BDC0aJHC.png",
        backdrop: "https://image.tmdb.org/t/p/original/sRLC052ieEzkQs9dEtPMfFxYkej.jpg",
    },
};

/// Hero pinned atop the catalog view of `kind`.
pub fn for_kind(kind: MediaKind) -> Hero {
    match kind {
        MediaKind::Movie => MOVIE_HERO,
        MediaKind::Series => SERIES_HERO,
    }
}
