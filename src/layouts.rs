//! Layouts derived from the base layout
//!
//! Each layout builds its own chrome around the page content and hands the
//! result to `components::layout::base_layout` as the content slot, adding
//! article or project metadata to the document head.

pub mod blog_post;
pub mod project;
