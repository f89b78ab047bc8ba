//! Site navigation with active state resolution

use maud::{Markup, html};

/// How a navigation entry matches the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMatch {
    /// Active only on the entry's own path
    Exact,
    /// Active on the entry's path and everything below it
    Prefix,
}

/// One link in the site navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    pub matching: NavMatch,
}

impl NavEntry {
    pub fn new(label: &str, path: &str, matching: NavMatch) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
            matching,
        }
    }

    /// Checks whether this entry covers a normalized path.
    ///
    /// The root entry never prefix-matches, otherwise it would cover every
    /// route on the site.
    pub fn matches(&self, path: &str) -> bool {
        match self.matching {
            NavMatch::Prefix if self.path != "/" => path.starts_with(self.path.as_str()),
            _ => path == self.path,
        }
    }
}

/// Navigation entry paired with its resolved active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState<'a> {
    pub entry: &'a NavEntry,
    pub active: bool,
}

impl NavState<'_> {
    /// Value for the `aria-current` attribute; `None` omits the attribute.
    pub fn aria_current(&self) -> Option<&'static str> {
        self.active.then_some("page")
    }

    /// CSS classes for the rendered link.
    pub fn class(&self) -> &'static str {
        if self.active {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

/// Resolves active state for every navigation entry
///
/// # Arguments
///
/// * `entries`: Navigation entries in display order
/// * `path`: Current request path
///
/// # Returns
///
/// One state per entry, in the same order
pub fn resolve_nav<'a>(entries: &'a [NavEntry], path: &str) -> Vec<NavState<'a>> {
    let path = normalize_path(path);
    entries
        .iter()
        .map(|entry| NavState {
            entry,
            active: entry.matches(path),
        })
        .collect()
}

/// Strips query, fragment and trailing slash from a path.
///
/// The root path stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Renders the primary navigation list
///
/// # Arguments
///
/// * `entries`: Navigation entries in display order
/// * `path`: Current request path
///
/// # Returns
///
/// Navigation markup with the active entry marked
pub fn nav(entries: &[NavEntry], path: &str) -> Markup {
    html! {
        nav class="nav" aria-label="Main navigation" {
            ul class="nav-list" {
                @for state in resolve_nav(entries, path) {
                    li {
                        a href=(state.entry.path) class=(state.class()) aria-current=[state.aria_current()] {
                            (state.entry.label)
                        }
                    }
                }
            }
        }
    }
}
