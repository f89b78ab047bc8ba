//! Base page layout

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::meta::{compose_meta_tags, compose_title, meta_tags};
use super::nav::nav;
use crate::config::SiteConfig;
use crate::page::PageMeta;

/// Wraps page content with the shared document shell
///
/// Provides DOCTYPE, head metadata, site header with navigation, the main
/// content region and footer. Derived layouts contribute extra head tags
/// through `head` and their own chrome through `content`.
///
/// # Arguments
///
/// * `site`: Site configuration (brand, navigation, public URL)
/// * `path`: Current route path, drives navigation state
/// * `page`: Page title, description and SEO fields
/// * `head`: Extra head markup (empty for plain pages)
/// * `content`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document
pub fn base_layout(
    site: &SiteConfig,
    path: &str,
    page: &PageMeta,
    head: Markup,
    content: Markup,
) -> Markup {
    let title = compose_title(site, page.title());
    let url = site.absolute_url(path).unwrap_or_else(|| path.to_string());
    let tags = compose_meta_tags(site, page, &url);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (meta_tags(&tags))
                title { (title) }
                (head)
            }
            body {
                header class="header" {
                    div class="header-content" {
                        a href="/" class="brand" { (site.brand) }
                        (nav(&site.nav, path))
                    }
                }
                main role="main" class="main" {
                    (content)
                }
                (footer(site))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(page: &PageMeta, path: &str) -> String {
        base_layout(
            &SiteConfig::default(),
            path,
            page,
            html! {},
            html! { p { "Body" } },
        )
        .into_string()
    }

    #[test]
    fn test_base_layout_structure() {
        // Arrange
        let page = PageMeta::new("Test Page", "Test page description");

        // Act
        let html = render(&page, "/");

        // Assert
        assert!(html.contains("<title>Test Page - AakerDev</title>"));
        assert!(html.contains("Test page description"));
        assert!(html.contains(r#"class="header""#));
        assert!(html.contains(r#"class="nav-link"#));
        assert!(html.contains(r#"class="footer""#));
        assert!(html.contains(r#"role="main""#));
        assert!(html.contains(r#"name="description""#));
        assert!(html.contains(r#"property="og:title""#));
        assert!(html.contains(r#"property="twitter:card""#));
        assert!(html.contains("<p>Body</p>"));
        for label in ["Home", "About", "Projects", "Blog", "Contact"] {
            assert!(html.contains(label), "Should contain {}", label);
        }
    }

    #[test]
    fn test_base_layout_single_active_entry() {
        // Arrange
        let page = PageMeta::new("Blog", "Posts");

        // Act
        let html = render(&page, "/blog/my-post");

        // Assert
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn test_base_layout_no_active_entry_for_unknown_path() {
        let html = render(&PageMeta::new("Lost", "Nowhere"), "/nowhere");

        assert_eq!(html.matches("aria-current").count(), 0);
    }

    #[test]
    fn test_base_layout_optional_canonical_and_image() {
        // Arrange
        let page = PageMeta::new("Test Page", "Test page description")
            .with_canonical_url("https://example.com/test")
            .with_image("/custom-image.jpg");

        // Act
        let html = render(&page, "/test");

        // Assert
        assert!(html.contains(r#"rel="canonical""#));
        assert!(html.contains("https://example.com/test"));
        assert!(html.contains("/custom-image.jpg"));
        assert!(html.contains(r#"property="og:image""#));
    }

    #[test]
    fn test_base_layout_without_image_omits_image_tags() {
        let html = render(&PageMeta::new("Test Page", "Description"), "/");

        assert!(!html.contains("og:image"));
        assert!(!html.contains("twitter:image"));
        assert!(!html.contains("canonical"));
    }

    #[test]
    fn test_base_layout_absolute_og_url_with_site_url() {
        // Arrange
        let site = SiteConfig {
            site_url: Some("https://aaker.dev".to_string()),
            ..SiteConfig::default()
        };
        let page = PageMeta::new("About", "About me");

        // Act
        let html = base_layout(&site, "/about", &page, html! {}, html! {}).into_string();

        // Assert
        assert!(html.contains(r#"<meta property="og:url" content="https://aaker.dev/about">"#));
    }
}
