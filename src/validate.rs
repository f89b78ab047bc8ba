//! Input predicates for optional page props and CLI arguments
//!
//! Layouts trust their props and never call these; they exist so the
//! generator can warn about (or reject) input that does not follow the
//! content conventions.

/// Checks blog tag convention: lowercase alphanumerics and hyphens, 2 to 20 chars.
pub fn is_valid_tag(tag: &str) -> bool {
    (2..=20).contains(&tag.len())
        && tag
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Checks reading time display format: `<digits><whitespace>min`.
pub fn is_valid_reading_time(time: &str) -> bool {
    let Some(number) = time.strip_suffix("min") else {
        return false;
    };
    let digits = number.trim_end();

    digits.len() < number.len()
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Checks technology badge text: 2 to 30 chars without surrounding whitespace.
pub fn is_valid_technology(tech: &str) -> bool {
    (2..=30).contains(&tech.chars().count()) && tech.trim() == tech
}

/// Checks that a URL is http or https with a non-empty host.
pub fn is_valid_live_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    rest.map(has_host).unwrap_or(false)
}

/// Checks that a URL points at a GitHub path.
pub fn is_valid_github_url(url: &str) -> bool {
    url.strip_prefix("https://github.com/")
        .map(|path| !path.trim_matches('/').is_empty())
        .unwrap_or(false)
}

/// Checks that a canonical URL is https with a plain host and URL-safe characters.
pub fn is_valid_canonical_url(url: &str) -> bool {
    const ALLOWED: &str = "-._~:/?#[]@!$&'()*+,;=";

    let Some(rest) = url.strip_prefix("https://") else {
        return false;
    };

    has_host(rest)
        && rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ALLOWED.contains(c))
}

/// Checks that a site route is rooted and free of traversal or empty segments.
pub fn is_valid_internal_route(route: &str) -> bool {
    route.starts_with('/') && !route.contains("..") && !route.contains("//")
}

/// Checks that a slug is a single path segment of `[A-Za-z0-9_-]`.
///
/// Dots, separators and URL delimiters are refused so that the slug can
/// neither leave nor alias its section.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn has_host(rest: &str) -> bool {
    rest.split(['/', '?', '#'])
        .next()
        .map(|host| !host.is_empty() && !host.starts_with(':'))
        .unwrap_or(false)
}
