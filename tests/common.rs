//! Shared test utilities for integration tests.
//!
//! Provides helpers for building the site into temporary directories and
//! inspecting the generated pages.

#![allow(dead_code)]

use anyhow::{Context, Result};
use folio::{BuildReport, SiteConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds the site with default configuration into a fresh temporary directory.
///
/// # Arguments
///
/// * `posts`: Blog post slugs to render
/// * `projects`: Project slugs to render
///
/// # Returns
///
/// Temporary output directory and the build report
///
/// # Errors
///
/// Returns error if directory creation or the build fails
pub fn build_site(posts: &[&str], projects: &[&str]) -> Result<(TempDir, BuildReport)> {
    build_site_with(&SiteConfig::default(), posts, projects)
}

/// Builds the site with the given configuration into a fresh temporary directory.
pub fn build_site_with(
    site: &SiteConfig,
    posts: &[&str],
    projects: &[&str],
) -> Result<(TempDir, BuildReport)> {
    let dir = TempDir::new()?;
    let posts: Vec<String> = posts.iter().map(|s| s.to_string()).collect();
    let projects: Vec<String> = projects.iter().map(|s| s.to_string()).collect();

    let report = folio::build(site, dir.path(), &posts, &projects)?;
    Ok((dir, report))
}

/// Reads a generated page relative to the output directory.
///
/// # Errors
///
/// Returns error if the page does not exist or is not valid UTF8
pub fn read_page(output: &Path, relative: &str) -> Result<String> {
    let path = output.join(relative);
    fs::read_to_string(&path).with_context(|| format!("Missing page: {}", path.display()))
}

/// Extracts the `<title>` text of a document.
pub fn title_of(html: &str) -> Option<&str> {
    let start = html.find("<title>")? + "<title>".len();
    let end = html[start..].find("</title>")? + start;
    Some(&html[start..end])
}

/// Counts nav entries marked as the current page.
pub fn active_nav_count(html: &str) -> usize {
    html.matches(r#"aria-current="page""#).count()
}
