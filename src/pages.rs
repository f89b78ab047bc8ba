//! Page generation modules for every route
//!
//! Each page module supplies title, description and content to one of the
//! layouts. Static pages use the base layout; detail pages use the blog post
//! or project layout and turn their slug into a placeholder title.

pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;

use maud::{Markup, html};

use crate::config::SiteConfig;
use crate::page::PageMeta;

/// Builds page metadata, adding a canonical URL when the site URL is known.
fn page_meta(site: &SiteConfig, path: &str, title: &str, description: &str) -> PageMeta {
    let page = PageMeta::new(title, description);
    match site.absolute_url(path) {
        Some(url) => page.with_canonical_url(url),
        None => page,
    }
}

/// Renders a page intro block with heading and lead paragraph.
fn page_intro(heading: &str, lead: &str) -> Markup {
    html! {
        div class="page-intro" {
            h1 class="page-title" { (heading) }
            p class="page-lead" { (lead) }
        }
    }
}

/// Renders a titled placeholder section with a stable id.
fn section(id: &str, heading: &str, body: Markup) -> Markup {
    html! {
        section id=(id) class="section" {
            h2 class="section-title" { (heading) }
            (body)
        }
    }
}
