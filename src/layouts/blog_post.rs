//! Blog post layout

use chrono::NaiveDate;
use maud::{Markup, html};
use serde_json::json;

use crate::components::layout::base_layout;
use crate::components::meta::{MetaTag, meta_tags};
use crate::components::structured::{json_ld, person};
use crate::config::SiteConfig;
use crate::page::PageMeta;
use crate::util::{format_iso_date, format_long_date, format_rfc3339};
use crate::validate::{is_valid_reading_time, is_valid_tag};

/// Page metadata extended with article fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostMeta {
    pub page: PageMeta,
    pub publish_date: Option<NaiveDate>,
    /// Falls back to the site default author when unset
    pub author: Option<String>,
    pub tags: Vec<String>,
    /// Display text like "5 min"
    pub reading_time: Option<String>,
}

impl BlogPostMeta {
    pub fn new(page: PageMeta) -> Self {
        Self {
            page,
            publish_date: None,
            author: None,
            tags: Vec::new(),
            reading_time: None,
        }
    }

    pub fn with_publish_date(mut self, date: NaiveDate) -> Self {
        self.publish_date = Some(date);
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reading_time(mut self, reading_time: impl Into<String>) -> Self {
        self.reading_time = Some(reading_time.into());
        self
    }

    /// Resolved author name.
    pub fn author_or<'a>(&'a self, site: &'a SiteConfig) -> &'a str {
        self.author.as_deref().unwrap_or(&site.default_author)
    }

    /// Lists props that break blog content conventions.
    ///
    /// The layout renders them as given; warnings are for the caller.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(time) = &self.reading_time
            && !is_valid_reading_time(time)
        {
            warnings.push(format!("reading time {:?} is not of the form \"<n> min\"", time));
        }

        for tag in self.tags.iter().filter(|tag| !is_valid_tag(tag)) {
            warnings.push(format!("tag {:?} should be 2-20 chars of [a-z0-9-]", tag));
        }

        warnings
    }
}

/// Social platforms offered for sharing a post, with their share endpoints.
const SHARE_TARGETS: &[(&str, &str)] = &[
    ("Twitter", "https://twitter.com/intent/tweet"),
    ("LinkedIn", "https://linkedin.com/sharing/share-offsite"),
    ("Facebook", "https://facebook.com/sharer/sharer.php"),
];

/// Builds a share link for one platform.
///
/// # Arguments
///
/// * `endpoint`: Platform share endpoint
/// * `url`: Post URL to share
/// * `title`: Post title (used by Twitter as tweet text)
///
/// # Returns
///
/// Share URL with URL-encoded query parameters
pub fn share_url(endpoint: &str, url: &str, title: &str) -> String {
    let url = urlencoding::encode(url);
    if endpoint.contains("twitter.com") {
        format!("{}?text={}&url={}", endpoint, urlencoding::encode(title), url)
    } else if endpoint.contains("facebook.com") {
        format!("{}?u={}", endpoint, url)
    } else {
        format!("{}?url={}", endpoint, url)
    }
}

fn article_head(site: &SiteConfig, meta: &BlogPostMeta) -> Markup {
    let author = meta.author_or(site);

    let mut tags = vec![MetaTag::property("article:author", author)];
    if let Some(date) = meta.publish_date {
        tags.push(MetaTag::property("article:published_time", format_rfc3339(date)));
    }
    for tag in &meta.tags {
        tags.push(MetaTag::property("article:tag", tag.as_str()));
    }

    let date = meta.publish_date.map(format_iso_date);
    let data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": meta.page.title(),
        "description": meta.page.description(),
        "author": person(author),
        "datePublished": date,
        "dateModified": date,
        "keywords": meta.tags,
    });

    html! {
        (meta_tags(&tags))
        (json_ld(&data))
    }
}

/// Renders a blog post inside the base layout
///
/// Adds the article header (title, description, author, date, reading
/// time, tags), share links and a link back to the blog index around the
/// post body.
///
/// # Arguments
///
/// * `site`: Site configuration
/// * `path`: Route path of the post
/// * `meta`: Post metadata
/// * `content`: Post body markup
///
/// # Returns
///
/// Complete HTML document
pub fn blog_post_layout(
    site: &SiteConfig,
    path: &str,
    meta: &BlogPostMeta,
    content: Markup,
) -> Markup {
    let page = &meta.page;
    let author = meta.author_or(site);
    let share_target = page
        .canonical_url()
        .map(str::to_string)
        .or_else(|| site.absolute_url(path))
        .unwrap_or_else(|| path.to_string());

    let body = html! {
        article class="blog-post" {
            header class="blog-header" {
                h1 class="blog-title" { (page.title()) }
                p class="blog-description" { (page.description()) }
                div class="blog-meta" {
                    span class="blog-author" { "By " (author) }
                    @if let Some(date) = meta.publish_date {
                        time class="blog-date" datetime=(format_iso_date(date)) {
                            (format_long_date(date))
                        }
                    }
                    @if let Some(reading_time) = &meta.reading_time {
                        span class="reading-time" { (reading_time) " read" }
                    }
                }
                @if !meta.tags.is_empty() {
                    ul class="blog-tags" {
                        @for tag in &meta.tags {
                            li class="tag" { (tag) }
                        }
                    }
                }
            }
            div class="blog-content" {
                (content)
            }
            footer class="blog-footer" {
                div class="blog-sharing" {
                    h3 { "Share this post" }
                    ul class="share-links" {
                        @for (platform, endpoint) in SHARE_TARGETS {
                            li {
                                a class="share-link"
                                    href=(share_url(endpoint, &share_target, page.title()))
                                    target="_blank"
                                    rel="noopener noreferrer" {
                                    (platform)
                                }
                            }
                        }
                    }
                }
                nav class="blog-navigation" {
                    a href="/blog" class="back-link" { "← Back to Blog" }
                }
            }
        }
    };

    base_layout(site, path, page, article_head(site, meta), body)
}
