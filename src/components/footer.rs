//! Site footer component

use maud::{Markup, html};

use crate::config::SiteConfig;

/// Renders the site footer with brand line and secondary navigation.
pub fn footer(site: &SiteConfig) -> Markup {
    html! {
        footer class="footer" {
            div class="footer-content" {
                p class="footer-brand" { "© " (site.brand) }
                ul class="footer-links" {
                    @for entry in &site.nav {
                        li {
                            a href=(entry.path) class="footer-link" { (entry.label) }
                        }
                    }
                }
            }
        }
    }
}
