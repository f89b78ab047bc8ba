//! About page generation

use maud::{Markup, html};

use super::{page_intro, page_meta, section};
use crate::components::layout::base_layout;
use crate::config::SiteConfig;

pub const PATH: &str = "/about";
pub const TITLE: &str = "About";
pub const DESCRIPTION: &str =
    "Professional background, technical expertise, and career journey of a full-stack developer.";

/// Generates the about page.
pub fn generate(site: &SiteConfig) -> Markup {
    let page = page_meta(site, PATH, TITLE, DESCRIPTION);

    base_layout(
        site,
        PATH,
        &page,
        html! {},
        html! {
            (page_intro("About Me", "Professional story and technical background coming soon..."))
            (section("professional-story", "Professional Story", html! {
                p { "How I got into software development and where I am heading." }
            }))
            (section("technical-expertise", "Technical Expertise", html! {
                p { "Languages, frameworks and tools I work with." }
            }))
            (section("experience", "Professional Experience", html! {
                p { "Roles and responsibilities coming soon..." }
            }))
            (section("education", "Education & Certifications", html! {
                p { "Degrees and certifications coming soon..." }
            }))
            (section("personal", "Beyond Code", html! {
                p { "Interests outside of work." }
            }))
        },
    )
}
