//! Document title and SEO metadata composition

use maud::{Markup, html};

use crate::config::SiteConfig;
use crate::page::PageMeta;

/// Single tag emitted into the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    /// `<meta charset=...>`
    Charset(String),
    /// `<meta name=... content=...>`
    Name { name: String, content: String },
    /// `<meta property=... content=...>`
    Property { property: String, content: String },
    /// `<link rel=... href=...>`
    Link { rel: String, href: String },
}

impl MetaTag {
    pub fn name(name: &str, content: impl Into<String>) -> Self {
        Self::Name {
            name: name.to_string(),
            content: content.into(),
        }
    }

    pub fn property(property: &str, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.to_string(),
            content: content.into(),
        }
    }

    pub fn link(rel: &str, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.to_string(),
            href: href.into(),
        }
    }

    /// Returns the tag key (`name`, `property` or `rel` value) and its value.
    pub fn pair(&self) -> (&str, &str) {
        match self {
            Self::Charset(charset) => ("charset", charset.as_str()),
            Self::Name { name, content } => (name.as_str(), content.as_str()),
            Self::Property { property, content } => (property.as_str(), content.as_str()),
            Self::Link { rel, href } => (rel.as_str(), href.as_str()),
        }
    }

    /// Renders the tag as head markup.
    pub fn render(&self) -> Markup {
        match self {
            Self::Charset(charset) => html! { meta charset=(charset); },
            Self::Name { name, content } => html! { meta name=(name) content=(content); },
            Self::Property { property, content } => {
                html! { meta property=(property) content=(content); }
            }
            Self::Link { rel, href } => html! { link rel=(rel) href=(href); },
        }
    }
}

/// Composes the document title with the site brand suffix
///
/// Suffixing is idempotent: a title that already mentions the brand is
/// returned unchanged.
///
/// # Arguments
///
/// * `site`: Site configuration holding the brand
/// * `title`: Page title as supplied by the page
///
/// # Returns
///
/// Final `<title>` text
pub fn compose_title(site: &SiteConfig, title: &str) -> String {
    if title.contains(site.brand.as_str()) {
        title.to_string()
    } else {
        format!("{} - {}", title, site.brand)
    }
}

/// Composes the ordered head metadata for a page
///
/// Covers charset, viewport, description, the optional canonical link, Open
/// Graph and Twitter Card tags. Image tags are left out when the page has no
/// image. The `url` is used for `og:url` and `twitter:url` when the page has
/// no canonical URL.
///
/// # Arguments
///
/// * `site`: Site configuration holding the brand
/// * `page`: Page metadata
/// * `url`: Page URL (absolute when known, else the site path)
///
/// # Returns
///
/// Tags in document order
pub fn compose_meta_tags(site: &SiteConfig, page: &PageMeta, url: &str) -> Vec<MetaTag> {
    let title = compose_title(site, page.title());
    let url = page.canonical_url().unwrap_or(url);

    let mut tags = vec![
        MetaTag::Charset("utf-8".to_string()),
        MetaTag::name("viewport", "width=device-width, initial-scale=1.0"),
        MetaTag::name("description", page.description()),
    ];

    if let Some(canonical) = page.canonical_url() {
        tags.push(MetaTag::link("canonical", canonical));
    }

    tags.push(MetaTag::property("og:type", "website"));
    tags.push(MetaTag::property("og:url", url));
    tags.push(MetaTag::property("og:title", title.as_str()));
    tags.push(MetaTag::property("og:description", page.description()));
    if let Some(image) = page.image() {
        tags.push(MetaTag::property("og:image", image));
    }

    tags.push(MetaTag::property("twitter:card", "summary_large_image"));
    tags.push(MetaTag::property("twitter:url", url));
    tags.push(MetaTag::property("twitter:title", title));
    tags.push(MetaTag::property("twitter:description", page.description()));
    if let Some(image) = page.image() {
        tags.push(MetaTag::property("twitter:image", image));
    }

    tags
}

/// Renders a list of tags in order.
pub fn meta_tags(tags: &[MetaTag]) -> Markup {
    html! {
        @for tag in tags {
            (tag.render())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tags: &[MetaTag]) -> Vec<&str> {
        tags.iter().map(|tag| tag.pair().0).collect()
    }

    fn value<'a>(tags: &'a [MetaTag], key: &str) -> Option<&'a str> {
        tags.iter()
            .map(MetaTag::pair)
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn test_compose_title_appends_brand() {
        // Arrange
        let site = SiteConfig::default();

        // Act
        let title = compose_title(&site, "Test Page");

        // Assert
        assert_eq!(title, "Test Page - AakerDev");
    }

    #[test]
    fn test_compose_title_is_idempotent() {
        // Arrange
        let site = SiteConfig::default();

        // Act
        let once = compose_title(&site, "Test Page");
        let twice = compose_title(&site, &once);

        // Assert
        assert_eq!(once, twice, "Suffix should not be applied twice");
        assert_eq!(
            compose_title(&site, "AakerDev - Full-Stack Developer Portfolio"),
            "AakerDev - Full-Stack Developer Portfolio"
        );
    }

    #[test]
    fn test_compose_title_uses_configured_brand() {
        let site = SiteConfig {
            brand: "Other".to_string(),
            ..SiteConfig::default()
        };

        assert_eq!(compose_title(&site, "About"), "About - Other");
        assert_eq!(compose_title(&site, "About AakerDev"), "About AakerDev - Other");
    }

    #[test]
    fn test_minimal_tags_order() {
        // Arrange
        let site = SiteConfig::default();
        let page = PageMeta::new("Test Page", "Test page description");

        // Act
        let tags = compose_meta_tags(&site, &page, "/test");

        // Assert
        assert_eq!(
            keys(&tags),
            [
                "charset",
                "viewport",
                "description",
                "og:type",
                "og:url",
                "og:title",
                "og:description",
                "twitter:card",
                "twitter:url",
                "twitter:title",
                "twitter:description",
            ]
        );
        assert_eq!(value(&tags, "og:type"), Some("website"));
        assert_eq!(value(&tags, "og:url"), Some("/test"));
        assert_eq!(value(&tags, "twitter:card"), Some("summary_large_image"));
        assert_eq!(value(&tags, "og:title"), Some("Test Page - AakerDev"));
    }

    #[test]
    fn test_full_tags_with_canonical_and_image() {
        // Arrange
        let site = SiteConfig::default();
        let page = PageMeta::new("Test Page", "This is a test page for SEO validation")
            .with_canonical_url("https://example.com/test")
            .with_image("/test-image.jpg");

        // Act
        let tags = compose_meta_tags(&site, &page, "/test");

        // Assert
        assert_eq!(value(&tags, "canonical"), Some("https://example.com/test"));
        assert_eq!(value(&tags, "og:url"), Some("https://example.com/test"));
        assert_eq!(value(&tags, "twitter:url"), Some("https://example.com/test"));
        assert_eq!(value(&tags, "og:image"), Some("/test-image.jpg"));
        assert_eq!(value(&tags, "twitter:image"), Some("/test-image.jpg"));
        assert_eq!(
            value(&tags, "twitter:description"),
            Some("This is a test page for SEO validation")
        );
    }

    #[test]
    fn test_render_tags() {
        // Arrange
        let tags = vec![
            MetaTag::Charset("utf-8".to_string()),
            MetaTag::name("description", "A & B"),
            MetaTag::property("og:title", "T"),
            MetaTag::link("canonical", "https://example.com"),
        ];

        // Act
        let html = meta_tags(&tags).into_string();

        // Assert
        assert!(html.contains(r#"<meta charset="utf-8">"#));
        assert!(html.contains(r#"<meta name="description" content="A &amp; B">"#));
        assert!(html.contains(r#"<meta property="og:title" content="T">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com">"#));
    }
}
