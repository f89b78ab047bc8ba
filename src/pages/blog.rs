//! Blog index and blog post pages

use maud::{Markup, html};

use super::{page_intro, page_meta, section};
use crate::components::layout::base_layout;
use crate::config::SiteConfig;
use crate::layouts::blog_post::{BlogPostMeta, blog_post_layout};

pub const PATH: &str = "/blog";
pub const TITLE: &str = "Blog";
pub const DESCRIPTION: &str =
    "Technical insights, learning experiences, and development tutorials from a full-stack developer.";

/// Description shared by every post placeholder.
pub const POST_DESCRIPTION: &str = "Technical insights and development experiences";

/// Generates the blog index with filters and an empty posts container.
pub fn generate(site: &SiteConfig) -> Markup {
    let page = page_meta(site, PATH, TITLE, DESCRIPTION);

    base_layout(
        site,
        PATH,
        &page,
        html! {},
        html! {
            (page_intro("Blog", "Technical experiences and insights coming soon..."))
            (section("featured-posts", "Featured Posts", html! {
                p { "Featured posts coming soon..." }
            }))
            (section("blog-categories", "Categories", html! {
                p { "Post categories coming soon..." }
            }))
            (section("posts-list", "All Posts", html! {
                div id="blog-filters" class="filters" {}
                div id="posts-container" class="posts-container" {}
            }))
        },
    )
}

/// Route path of a post.
pub fn post_path(slug: &str) -> String {
    format!("{}/{}", PATH, slug)
}

/// Metadata for a post placeholder page.
pub fn post_meta(site: &SiteConfig, slug: &str) -> BlogPostMeta {
    let title = format!("Blog Post: {}", slug);
    BlogPostMeta::new(page_meta(site, &post_path(slug), &title, POST_DESCRIPTION))
}

/// Generates a blog post page for a slug
///
/// The slug is only displayed; no post content is looked up.
///
/// # Arguments
///
/// * `site`: Site configuration
/// * `slug`: Route parameter, used verbatim
///
/// # Returns
///
/// Post page rendered through the blog post layout
pub fn generate_post(site: &SiteConfig, slug: &str) -> Markup {
    let path = post_path(slug);
    let meta = post_meta(site, slug);

    blog_post_layout(
        site,
        &path,
        &meta,
        html! {
            p class="placeholder" { "Individual blog post content coming soon..." }
            (section("post-navigation", "Navigate", html! {
                a href=(PATH) { "All posts" }
            }))
            (section("related-posts", "Related Posts", html! {
                p { "Related posts coming soon..." }
            }))
        },
    )
}
