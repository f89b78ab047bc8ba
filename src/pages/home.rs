//! Home page generation

use maud::{Markup, html};

use super::{page_intro, page_meta, section};
use crate::components::layout::base_layout;
use crate::config::SiteConfig;

pub const PATH: &str = "/";
pub const TAGLINE: &str = "Full-Stack Developer Portfolio";
pub const DESCRIPTION: &str = "Professional portfolio of a full-stack developer showcasing modern web technologies, project case studies, and technical expertise.";

/// Generates the landing page
///
/// Sections: hero, skills overview, featured projects, recent posts and a
/// call to action pointing at the contact page.
pub fn generate(site: &SiteConfig) -> Markup {
    let title = format!("{} - {}", site.brand, TAGLINE);
    let page = page_meta(site, PATH, &title, DESCRIPTION);
    let welcome = format!("Welcome to {}", site.brand);

    base_layout(
        site,
        PATH,
        &page,
        html! {},
        html! {
            section id="hero" class="hero" {
                (page_intro(&welcome, "Full-Stack Developer Portfolio coming soon..."))
                h2 class="section-title" { "Professional Summary" }
            }
            (section("skills-overview", "Technical Skills", html! {
                p { "Skills overview coming soon..." }
            }))
            (section("featured-projects", "Featured Projects", html! {
                p { "Featured projects coming soon..." }
                a href="/projects" class="section-link" { "View all projects" }
            }))
            (section("recent-posts", "Latest Insights", html! {
                p { "Recent posts coming soon..." }
                a href="/blog" class="section-link" { "Read the blog" }
            }))
            (section("call-to-action", "Let's Connect", html! {
                p { "Interested in working together?" }
                a href="/contact" class="cta-button" { "Get in Touch" }
            }))
        },
    )
}
