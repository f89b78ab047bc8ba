//! Project case study layout

use chrono::NaiveDate;
use maud::{Markup, html};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

use crate::components::layout::base_layout;
use crate::components::structured::{json_ld, person};
use crate::config::SiteConfig;
use crate::page::PageMeta;
use crate::util::{date_timeline, format_iso_date, format_short_date};
use crate::validate::{is_valid_github_url, is_valid_live_url, is_valid_technology};

const COMPLETED_STYLE: &str = "background: #dcfce7; color: #166534;";
const IN_PROGRESS_STYLE: &str = "background: #fef3c7; color: #92400e;";
const NEUTRAL_STYLE: &str = "background: #f3f4f6; color: #6b7280;";

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "in-progress" => Ok(Self::InProgress),
            "archived" => Ok(Self::Archived),
            other => anyhow::bail!("Unknown project status: {}", other),
        }
    }
}

/// Returns the inline badge style for a status.
///
/// Absent or unrecognized statuses get the neutral archived style.
pub fn status_style(status: Option<ProjectStatus>) -> &'static str {
    match status {
        Some(ProjectStatus::Completed) => COMPLETED_STYLE,
        Some(ProjectStatus::InProgress) => IN_PROGRESS_STYLE,
        Some(ProjectStatus::Archived) | None => NEUTRAL_STYLE,
    }
}

/// Display text for a status: the first hyphen becomes a space.
pub fn status_label(status: &str) -> String {
    status.replacen('-', " ", 1)
}

/// Page metadata extended with project fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMeta {
    pub page: PageMeta,
    pub technologies: Vec<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub role: Option<String>,
    pub team: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

impl ProjectMeta {
    pub fn new(page: PageMeta) -> Self {
        Self {
            page,
            technologies: Vec::new(),
            status: None,
            start_date: None,
            end_date: None,
            role: None,
            team: None,
            live_url: None,
            github_url: None,
        }
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = Some(url.into());
        self
    }

    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    /// Timeline text derived from start and end years.
    pub fn timeline(&self) -> String {
        date_timeline(self.start_date, self.end_date)
    }

    /// Lists props that break project content conventions.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .technologies
            .iter()
            .filter(|tech| !is_valid_technology(tech))
            .map(|tech| format!("technology {:?} should be 2-30 chars without padding", tech))
            .collect();

        if let Some(url) = &self.live_url
            && !is_valid_live_url(url)
        {
            warnings.push(format!("live URL {:?} is not an http(s) URL", url));
        }

        if let Some(url) = &self.github_url
            && !is_valid_github_url(url)
        {
            warnings.push(format!("GitHub URL {:?} does not point at github.com", url));
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            warnings.push(format!("end date {} is before start date {}", end, start));
        }

        warnings
    }
}

fn creative_work(site: &SiteConfig, meta: &ProjectMeta) -> Markup {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "CreativeWork",
        "name": meta.page.title(),
        "description": meta.page.description(),
        "author": person(&site.default_author),
        "dateCreated": meta.start_date.map(format_iso_date),
        "programmingLanguage": meta.technologies,
        "url": meta.live_url,
        "codeRepository": meta.github_url,
    });

    json_ld(&data)
}

/// Renders a project case study inside the base layout
///
/// Adds the project header (status badge, timeline, title, description,
/// role, team, technologies, external links) and project navigation around
/// the injected content.
///
/// # Arguments
///
/// * `site`: Site configuration
/// * `path`: Route path of the project
/// * `meta`: Project metadata
/// * `content`: Case study markup
///
/// # Returns
///
/// Complete HTML document
pub fn project_layout(
    site: &SiteConfig,
    path: &str,
    meta: &ProjectMeta,
    content: Markup,
) -> Markup {
    let page = &meta.page;
    let timeline = meta.timeline();
    let has_links = meta.live_url.is_some() || meta.github_url.is_some();

    let body = html! {
        article class="project" {
            header class="project-header" {
                div class="project-summary" {
                    @if let Some(status) = meta.status {
                        span class="project-status" style=(status_style(Some(status))) {
                            (status_label(status.as_str()))
                        }
                    }
                    @if !timeline.is_empty() {
                        span class="project-timeline" { (timeline) }
                    }
                }
                h1 class="project-title" { (page.title()) }
                p class="project-description" { (page.description()) }
                @if meta.role.is_some() || meta.team.is_some() || meta.start_date.is_some() || meta.end_date.is_some() {
                    dl class="project-details" {
                        @if let Some(role) = &meta.role {
                            dt { "Role" }
                            dd class="project-role" { (role) }
                        }
                        @if let Some(team) = &meta.team {
                            dt { "Team" }
                            dd class="project-team" { (team) }
                        }
                        @if let Some(start) = meta.start_date {
                            dt { "Started" }
                            dd { time datetime=(format_iso_date(start)) { (format_short_date(start)) } }
                        }
                        @if let Some(end) = meta.end_date {
                            dt { "Finished" }
                            dd { time datetime=(format_iso_date(end)) { (format_short_date(end)) } }
                        }
                    }
                }
                @if !meta.technologies.is_empty() {
                    ul class="project-technologies" {
                        @for tech in &meta.technologies {
                            li class="tech-badge" { (tech) }
                        }
                    }
                }
                @if has_links {
                    div class="project-links" {
                        @if let Some(url) = &meta.live_url {
                            a href=(url) class="project-link project-link-live" target="_blank" rel="noopener noreferrer" {
                                "View Live Project"
                            }
                        }
                        @if let Some(url) = &meta.github_url {
                            a href=(url) class="project-link project-link-github" target="_blank" rel="noopener noreferrer" {
                                "View Source Code"
                            }
                        }
                    }
                }
            }
            div class="project-content" {
                (content)
            }
            footer class="project-footer" {
                nav class="project-navigation" {
                    a href="/projects" class="back-link" { "← All Projects" }
                    a href="/contact" class="contact-link" { "Get in Touch" }
                }
            }
        }
    };

    base_layout(site, path, page, creative_work(site, meta), body)
}
