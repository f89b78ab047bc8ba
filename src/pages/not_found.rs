//! Not found page generation

use maud::{Markup, html};

use super::{page_intro, page_meta, section};
use crate::components::layout::base_layout;
use crate::config::SiteConfig;

pub const PATH: &str = "/404";
pub const TITLE: &str = "Page Not Found";
pub const DESCRIPTION: &str = "The page you're looking for doesn't exist or has been moved.";

/// Generates the catch-all 404 page
///
/// Lists every navigation entry as an alternative destination.
pub fn generate(site: &SiteConfig) -> Markup {
    let page = page_meta(site, PATH, TITLE, DESCRIPTION);

    base_layout(
        site,
        PATH,
        &page,
        html! {},
        html! {
            (page_intro("404 - Page Not Found", "Sorry, the page you're looking for doesn't exist."))
            (section("navigation-help", "Try these instead:", html! {
                ul class="help-links" {
                    @for entry in &site.nav {
                        li { a href=(entry.path) { (entry.label) } }
                    }
                }
            }))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page() {
        // Arrange
        let site = SiteConfig::default();

        // Act
        let html = generate(&site).into_string();

        // Assert
        assert!(html.contains("<title>Page Not Found - AakerDev</title>"));
        assert!(html.contains("The page you're looking for doesn't exist"));
        assert!(html.contains("404 - Page Not Found"));
        assert!(html.contains("Try these instead:"));
        assert!(html.contains(r#"id="navigation-help""#));
        for href in ["/", "/about", "/projects", "/blog", "/contact"] {
            assert!(html.contains(&format!(r#"href="{}""#, href)), "Missing link {}", href);
        }
        assert_eq!(html.matches("aria-current").count(), 0, "No nav entry is active");
    }
}
