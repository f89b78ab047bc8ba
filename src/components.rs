//! Reusable HTML components for page generation
//!
//! This module provides the Maud component functions every page shares:
//! head metadata composition, navigation with active state, structured data
//! and the base document layout that ties them together.

pub mod footer;
pub mod layout;
pub mod meta;
pub mod nav;
pub mod structured;
