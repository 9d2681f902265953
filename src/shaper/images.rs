//! Image asset URL construction.

/// Fixed base every provider image path is appended to.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Backdrop,
    Logo,
    /// Episode still.
    Still,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W300,
    W500,
    Original,
}

impl ImageSize {
    pub fn token(self) -> &'static str {
        match self {
            ImageSize::W300 => "w300",
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

impl ImageKind {
    /// Size used for this kind on detail pages.
    pub fn detail_size(self) -> ImageSize {
        match self {
            ImageKind::Backdrop => ImageSize::Original,
            ImageKind::Poster | ImageKind::Logo | ImageKind::Still => ImageSize::W500,
        }
    }
}

/// A sized image path. The path may be absent, in which case no URL is ever
/// rendered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub size: ImageSize,
    pub path: Option<String>,
}

impl ImageAsset {
    /// Asset at the detail size for its kind.
    pub fn detail(kind: ImageKind, path: Option<String>) -> Self {
        Self {
            size: kind.detail_size(),
            path,
        }
    }

    /// Poster at row thumbnail size.
    pub fn thumbnail(path: Option<String>) -> Self {
        Self {
            size: ImageSize::W300,
            path,
        }
    }

    /// Full URL, or `None` when there is no path.
    pub fn url(&self) -> Option<String> {
        self.path
            .as_deref()
            .map(|p| format!("{IMAGE_BASE_URL}/{}{p}", self.size.token()))
    }

    /// Full URL, or an empty string when there is no path.
    pub fn url_or_empty(&self) -> String {
        self.url().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_url() {
        let asset = ImageAsset::thumbnail(Some("/abc.jpg".into()));
        assert_eq!(
            asset.url().as_deref(),
            Some("https://image.tmdb.org/t/p/w300/abc.jpg")
        );
    }

    #[test]
    fn detail_sizes_follow_kind() {
        let backdrop = ImageAsset::detail(ImageKind::Backdrop, Some("/b.jpg".into()));
        assert_eq!(backdrop.url_or_empty(), "https://image.tmdb.org/t/p/original/b.jpg");

        let logo = ImageAsset::detail(ImageKind::Logo, Some("/l.png".into()));
        assert_eq!(logo.url_or_empty(), "https://image.tmdb.org/t/p/w500/l.png");
    }

    #[test]
    fn missing_path_never_renders() {
        let asset = ImageAsset::detail(ImageKind::Still, None);
        assert_eq!(asset.url(), None);
        assert_eq!(asset.url_or_empty(), "");
    }
}
