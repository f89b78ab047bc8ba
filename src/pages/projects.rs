//! Projects index and project detail pages

use maud::{Markup, html};

use super::{page_intro, page_meta, section};
use crate::components::layout::base_layout;
use crate::config::SiteConfig;
use crate::layouts::project::{ProjectMeta, project_layout};

pub const PATH: &str = "/projects";
pub const TITLE: &str = "Projects";
pub const DESCRIPTION: &str =
    "Showcase of technical projects, case studies, and development work.";

/// Description shared by every project placeholder.
pub const PROJECT_DESCRIPTION: &str = "Detailed case study and technical breakdown";

/// Generates the projects index with filters and an empty grid.
pub fn generate(site: &SiteConfig) -> Markup {
    let page = page_meta(site, PATH, TITLE, DESCRIPTION);

    base_layout(
        site,
        PATH,
        &page,
        html! {},
        html! {
            (page_intro("Projects", "Technical project showcase coming soon..."))
            (section("featured-projects", "Featured Projects", html! {
                p { "Featured projects coming soon..." }
            }))
            (section("project-grid", "All Projects", html! {
                div id="project-filters" class="filters" {}
                div id="projects-container" class="projects-container" {}
            }))
        },
    )
}

/// Route path of a project.
pub fn project_path(slug: &str) -> String {
    format!("{}/{}", PATH, slug)
}

/// Metadata for a project placeholder page.
pub fn project_meta(site: &SiteConfig, slug: &str) -> ProjectMeta {
    let title = format!("Project: {}", slug);
    ProjectMeta::new(page_meta(
        site,
        &project_path(slug),
        &title,
        PROJECT_DESCRIPTION,
    ))
}

/// Generates a project detail page for a slug
///
/// The slug is only displayed; no project data is looked up.
pub fn generate_project(site: &SiteConfig, slug: &str) -> Markup {
    let path = project_path(slug);
    let meta = project_meta(site, slug);

    project_layout(
        site,
        &path,
        &meta,
        html! {
            p class="placeholder" { "Individual project details coming soon..." }
            (section("project-overview", "Project Overview", html! {
                p { "Problem, goals and outcome coming soon..." }
            }))
            (section("technical-details", "Technical Implementation", html! {
                p { "Architecture and implementation notes coming soon..." }
            }))
            (section("project-media", "Screenshots & Demos", html! {
                p { "Media coming soon..." }
            }))
            (section("lessons-learned", "Key Learnings", html! {
                p { "Takeaways coming soon..." }
            }))
            (section("project-links", "Project Links", html! {
                a href=(PATH) { "Back to projects" }
            }))
        },
    )
}
