//! Page metadata shared by every layout.

/// Title, description and optional SEO fields for one page.
///
/// Title and description are constructor arguments, so a page without them
/// cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    title: String,
    description: String,
    canonical_url: Option<String>,
    image: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical_url: None,
            image: None,
        }
    }

    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn canonical_url(&self) -> Option<&str> {
        self.canonical_url.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
