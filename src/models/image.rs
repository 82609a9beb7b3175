use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Image widths served by the TMDB image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    W92,
    W154,
    W185,
    W200,
    W300,
    W342,
    W400,
    W500,
    W780,
    W1280,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W185 => "w185",
            ImageSize::W200 => "w200",
            ImageSize::W300 => "w300",
            ImageSize::W342 => "w342",
            ImageSize::W400 => "w400",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds a fully qualified image URL, or `None` when there is no image
///
/// An absent or empty path never produces a URL.
pub fn image_url(base: &str, path: Option<&str>, size: ImageSize) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    let base = base.trim_end_matches('/');

    if path.starts_with('/') {
        Some(format!("{}/{}{}", base, size, path))
    } else {
        Some(format!("{}/{}/{}", base, size, path))
    }
}
