/* -----------------------------
   Image search URLs
----------------------------- */

pub const IMAGE_SERVICE_BASE: &str = "https://source.unsplash.com";

pub const MAIN_IMG_W: u32 = 128;
pub const MAIN_IMG_H: u32 = 128;
pub const BG_IMG_W: u32 = 1600;
pub const BG_IMG_H: u32 = 900;

/// Search URL for comma-separated keywords. Empty keywords get a random image.
pub fn image_search_url(keywords: &str, width: u32, height: u32) -> String {
    format!("{IMAGE_SERVICE_BASE}/{width}x{height}/?{keywords}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub width: u32,
    pub height: u32,
    pub url: String,
}

impl ImageRef {
    pub fn search(keywords: &str, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            url: image_search_url(keywords, width, height),
        }
    }

    /// Profile image. Always present, random when `keywords` is empty.
    pub fn main(keywords: &str) -> Self {
        Self::search(keywords, MAIN_IMG_W, MAIN_IMG_H)
    }

    /// Background image. No keywords means no background at all.
    pub fn background(keywords: &str) -> Option<Self> {
        if keywords.is_empty() {
            None
        } else {
            Some(Self::search(keywords, BG_IMG_W, BG_IMG_H))
        }
    }

    /// Bulma figure class, e.g. `image is-128x128`.
    pub fn figure_class(&self) -> String {
        format!("image is-{}x{}", self.width, self.height)
    }
}

/// Value for the CSS `background-image` property.
pub fn background_css(bg: Option<&ImageRef>) -> String {
    match bg {
        Some(img) => format!("url({})", img.url),
        None => "none".to_string(),
    }
}
