//! Route table and site generation

use anyhow::{Context, Result};
use maud::Markup;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::components::nav::normalize_path;
use crate::config::SiteConfig;
use crate::pages::{about, blog, contact, home, not_found, projects};

/// Every page the site can render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Contact,
    Blog,
    BlogPost(String),
    Projects,
    Project(String),
    NotFound,
}

impl Route {
    /// Resolves a request path to a route
    ///
    /// Detail routes take exactly one non-empty segment after their section.
    /// Everything unmatched falls back to `NotFound`.
    ///
    /// # Arguments
    ///
    /// * `path`: Request path, with or without trailing slash
    ///
    /// # Returns
    ///
    /// Matching route
    pub fn resolve(path: &str) -> Self {
        let path = normalize_path(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["blog"] => Self::Blog,
            ["blog", slug] => Self::BlogPost(slug.to_string()),
            ["projects"] => Self::Projects,
            ["projects", slug] => Self::Project(slug.to_string()),
            _ => Self::NotFound,
        }
    }

    /// Site path of the route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => home::PATH.to_string(),
            Self::About => about::PATH.to_string(),
            Self::Contact => contact::PATH.to_string(),
            Self::Blog => blog::PATH.to_string(),
            Self::BlogPost(slug) => blog::post_path(slug),
            Self::Projects => projects::PATH.to_string(),
            Self::Project(slug) => projects::project_path(slug),
            Self::NotFound => not_found::PATH.to_string(),
        }
    }

    /// File path of the rendered page relative to the output directory.
    ///
    /// `/` maps to `index.html`, `/404` to `404.html` and every other route
    /// to `<path>/index.html` so that clean URLs resolve on static hosts.
    pub fn output_path(&self) -> PathBuf {
        match self {
            Self::Home => PathBuf::from("index.html"),
            Self::NotFound => PathBuf::from("404.html"),
            other => PathBuf::from(other.path().trim_start_matches('/')).join("index.html"),
        }
    }
}

/// Renders the document for a route.
pub fn render(site: &SiteConfig, route: &Route) -> Markup {
    match route {
        Route::Home => home::generate(site),
        Route::About => about::generate(site),
        Route::Contact => contact::generate(site),
        Route::Blog => blog::generate(site),
        Route::BlogPost(slug) => blog::generate_post(site, slug),
        Route::Projects => projects::generate(site),
        Route::Project(slug) => projects::generate_project(site, slug),
        Route::NotFound => not_found::generate(site),
    }
}

/// Lists every route to generate: static pages followed by the given slugs.
///
/// Repeated slugs are kept once, at their first position.
pub fn routes(posts: &[String], project_slugs: &[String]) -> Vec<Route> {
    let detail = posts
        .iter()
        .cloned()
        .map(Route::BlogPost)
        .chain(project_slugs.iter().cloned().map(Route::Project));

    let mut seen = HashSet::new();
    [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Blog,
        Route::Contact,
        Route::NotFound,
    ]
    .into_iter()
    .chain(detail)
    .filter(|route| seen.insert(route.clone()))
    .collect()
}

/// Summary of a site build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Written files, relative to the output directory
    pub pages: Vec<PathBuf>,
}

/// Renders every route and writes the pages below `output`
///
/// # Arguments
///
/// * `site`: Site configuration
/// * `output`: Output directory, created if missing
/// * `posts`: Blog post slugs to render
/// * `project_slugs`: Project slugs to render
///
/// # Returns
///
/// Written pages
///
/// # Errors
///
/// Returns error if a directory cannot be created or a page cannot be written
pub fn build(
    site: &SiteConfig,
    output: &Path,
    posts: &[String],
    project_slugs: &[String],
) -> Result<BuildReport> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let mut report = BuildReport::default();

    for route in routes(posts, project_slugs) {
        let relative = route.output_path();
        let target = output.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let html = render(site, &route).into_string();
        fs::write(&target, html)
            .with_context(|| format!("Failed to write page: {}", target.display()))?;

        report.pages.push(relative);
    }

    Ok(report)
}
