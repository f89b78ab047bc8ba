//! Static site generator for a personal portfolio.

pub mod components;
mod config;
pub mod layouts;
pub mod log;
mod page;
pub mod pages;
mod site;
mod util;
pub mod validate;

pub use components::layout::base_layout;
pub use components::meta::{MetaTag, compose_meta_tags, compose_title};
pub use components::nav::{NavEntry, NavMatch, NavState, resolve_nav};
pub use config::{Config, DEFAULT_BRAND, SiteConfig};
pub use layouts::blog_post::{BlogPostMeta, blog_post_layout};
pub use layouts::project::{ProjectMeta, ProjectStatus, project_layout, status_label, status_style};
pub use page::PageMeta;
pub use site::{BuildReport, Route, build, render, routes};
pub use util::{
    date_timeline, format_long_date, format_short_date, normalize_tag, slugify, timeline,
};
