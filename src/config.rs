//! Command line and site configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::components::nav::{NavEntry, NavMatch};
use crate::validate::{is_valid_canonical_url, is_valid_internal_route, is_valid_slug};

/// Brand used in page titles and as default author.
pub const DEFAULT_BRAND: &str = "AakerDev";

/// Command line configuration for Folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Public site URL used for canonical links (https://...)
    #[arg(long)]
    pub site_url: Option<String>,

    /// Site brand appended to page titles
    #[arg(long, default_value = DEFAULT_BRAND)]
    pub brand: String,

    /// Default author for blog posts (defaults to the brand)
    #[arg(long)]
    pub author: Option<String>,

    /// Blog post slug to pre-render (repeatable)
    #[arg(long = "post", value_name = "SLUG")]
    pub posts: Vec<String>,

    /// Project slug to pre-render (repeatable)
    #[arg(long = "project", value_name = "SLUG")]
    pub projects: Vec<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the brand is blank, the site URL is not an https URL,
    /// or a slug is not a single `[A-Za-z0-9_-]` segment.
    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            bail!("Brand must not be empty");
        }

        if let Some(url) = &self.site_url
            && !is_valid_canonical_url(url)
        {
            bail!("Site URL must be an absolute https URL: {}", url);
        }

        for (section, slugs) in [("blog", &self.posts), ("projects", &self.projects)] {
            for slug in slugs {
                let route = format!("/{}/{}", section, slug);
                if !is_valid_slug(slug) || !is_valid_internal_route(&route) {
                    bail!("Invalid {} slug: {:?}", section, slug);
                }
            }
        }

        Ok(())
    }

    /// Builds the site configuration handed to every layout.
    pub fn site(&self) -> SiteConfig {
        SiteConfig {
            brand: self.brand.clone(),
            default_author: self.author.clone().unwrap_or_else(|| self.brand.clone()),
            site_url: self
                .site_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
            nav: SiteConfig::default_nav(),
        }
    }
}

/// Site wide values shared by all layouts.
///
/// Passed explicitly into composers so that rendering stays a pure function
/// of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: String,
    pub default_author: String,
    /// Public origin without trailing slash
    pub site_url: Option<String>,
    pub nav: Vec<NavEntry>,
}

impl SiteConfig {
    /// Returns the fixed navigation: Home, About, Projects, Blog, Contact.
    pub fn default_nav() -> Vec<NavEntry> {
        vec![
            NavEntry::new("Home", "/", NavMatch::Exact),
            NavEntry::new("About", "/about", NavMatch::Exact),
            NavEntry::new("Projects", "/projects", NavMatch::Prefix),
            NavEntry::new("Blog", "/blog", NavMatch::Prefix),
            NavEntry::new("Contact", "/contact", NavMatch::Exact),
        ]
    }

    /// Absolute URL for a site path, when a site URL is configured.
    pub fn absolute_url(&self, path: &str) -> Option<String> {
        self.site_url.as_ref().map(|base| format!("{}{}", base, path))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            default_author: DEFAULT_BRAND.to_string(),
            site_url: None,
            nav: Self::default_nav(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            output: PathBuf::from("dist"),
            site_url: None,
            brand: DEFAULT_BRAND.to_string(),
            author: None,
            posts: vec![],
            projects: vec![],
            no_open: true,
        }
    }

    #[test]
    fn test_validate_defaults() {
        // Arrange
        let config = config();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Default configuration should be valid");
    }

    #[test]
    fn test_validate_rejects_http_site_url() {
        // Arrange
        let config = Config {
            site_url: Some("http://example.com".to_string()),
            ..config()
        };

        // Act & Assert
        assert!(config.validate().is_err(), "Plain http should be rejected");
    }

    #[test]
    fn test_validate_rejects_escaping_slugs() {
        // Arrange
        let traversal = Config {
            posts: vec!["..".to_string()],
            ..config()
        };
        let nested = Config {
            projects: vec!["a/b".to_string()],
            ..config()
        };
        let empty = Config {
            posts: vec![String::new()],
            ..config()
        };
        let current_dir = Config {
            posts: vec![".".to_string()],
            projects: vec![".".to_string()],
            ..config()
        };
        let query = Config {
            posts: vec!["a?b".to_string()],
            ..config()
        };
        let fragment = Config {
            projects: vec!["a#b".to_string()],
            ..config()
        };

        // Act & Assert
        assert!(traversal.validate().is_err(), "Traversal slug rejected");
        assert!(nested.validate().is_err(), "Nested slug rejected");
        assert!(empty.validate().is_err(), "Empty slug rejected");
        assert!(current_dir.validate().is_err(), "Dot slug rejected");
        assert!(query.validate().is_err(), "Query slug rejected");
        assert!(fragment.validate().is_err(), "Fragment slug rejected");
    }

    #[test]
    fn test_validate_accepts_plain_slugs() {
        let config = Config {
            posts: vec!["my-post".to_string(), "2024_recap".to_string()],
            projects: vec!["portfolio-website".to_string()],
            ..config()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_brand() {
        let config = Config {
            brand: "  ".to_string(),
            ..config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_site_author_defaults_to_brand() {
        // Arrange
        let config = Config {
            brand: "Someone".to_string(),
            ..config()
        };

        // Act
        let site = config.site();

        // Assert
        assert_eq!(site.brand, "Someone");
        assert_eq!(site.default_author, "Someone");
        assert_eq!(site.nav.len(), 5, "Navigation has five entries");
    }

    #[test]
    fn test_site_url_trailing_slash_trimmed() {
        // Arrange
        let config = Config {
            site_url: Some("https://aaker.dev/".to_string()),
            ..config()
        };

        // Act
        let site = config.site();

        // Assert
        assert_eq!(
            site.absolute_url("/blog").as_deref(),
            Some("https://aaker.dev/blog")
        );
    }

    #[test]
    fn test_default_nav_order() {
        let labels: Vec<String> = SiteConfig::default_nav()
            .into_iter()
            .map(|entry| entry.label)
            .collect();

        assert_eq!(labels, ["Home", "About", "Projects", "Blog", "Contact"]);
    }
}
