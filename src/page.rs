use crate::images::ImageRef;

// Defaults never appear in the URL.
pub const DEFAULT_TITLE: &str = "Instant website";
pub const DEFAULT_SUBTITLE: &str = "Just add inspiration";
pub const DEFAULT_DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Similique odio, aut sed non ullam a iste quaerat doloremque adipisci nemo quod blanditiis deleniti necessitatibus unde quidem sit minus in labore?";
pub const DEFAULT_MAIN_IMAGE: &str = "";
pub const DEFAULT_BG_IMAGE: &str = "nature";

/// Raw page fields as they came from the URL. `None` means the parameter was absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub main_image: Option<String>,
    pub bg_image: Option<String>,
}

/// What actually gets rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub main_image: ImageRef,
    pub background: Option<ImageRef>,
}

// Empty text reverts to the default; a single space does not.
fn text_or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

impl PageConfig {
    pub fn resolve(&self) -> PageContent {
        // An empty keyword value is the "(random)" choice, so only absence falls back.
        let main_keywords = self.main_image.as_deref().unwrap_or(DEFAULT_MAIN_IMAGE);
        let bg_keywords = self.bg_image.as_deref().unwrap_or(DEFAULT_BG_IMAGE);

        PageContent {
            title: text_or_default(self.title.as_deref(), DEFAULT_TITLE),
            subtitle: text_or_default(self.subtitle.as_deref(), DEFAULT_SUBTITLE),
            description: text_or_default(self.description.as_deref(), DEFAULT_DESCRIPTION),
            main_image: ImageRef::main(main_keywords),
            background: ImageRef::background(bg_keywords),
        }
    }
}
