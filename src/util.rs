//! Utility functions for folio

use chrono::{Datelike, NaiveDate};

/// Formats a calendar date in long US form.
///
/// Dates are calendar days already anchored to UTC, so no time zone
/// conversion happens here.
///
/// # Arguments
///
/// * `date`: Publish date
///
/// # Returns
///
/// Long month name, unpadded day and year, e.g. "January 15, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a calendar date as abbreviated month and year, e.g. "Jan 2024".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Formats a date as `YYYY-MM-DD` for `datetime` attributes and structured data.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a date as an RFC 3339 timestamp at UTC midnight.
pub fn format_rfc3339(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", format_iso_date(date))
}

/// Builds timeline text from optional start and end years.
///
/// # Returns
///
/// One of four shapes depending on which years are known:
/// "", "2023 - Present", "Until 2024", "2023 - 2024"
pub fn timeline(start_year: Option<i32>, end_year: Option<i32>) -> String {
    match (start_year, end_year) {
        (None, None) => String::new(),
        (Some(start), None) => format!("{} - Present", start),
        (None, Some(end)) => format!("Until {}", end),
        (Some(start), Some(end)) => format!("{} - {}", start, end),
    }
}

/// Timeline text for optional start and end dates.
pub fn date_timeline(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    timeline(start.map(|d| d.year()), end.map(|d| d.year()))
}

/// Converts a title into a URL slug.
///
/// Lowercases, drops everything except ASCII alphanumerics, whitespace and
/// hyphens, then joins words with single hyphens.
///
/// # Examples
///
/// ```
/// assert_eq!(folio::slugify("React vs Vue: Which is Better?"), "react-vs-vue-which-is-better");
/// assert_eq!(folio::slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept: String = lowered
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();

    kept.split([' ', '-'])
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Normalizes a free-form tag into the `^[a-z0-9-]+$` tag convention.
///
/// Word breaks become hyphens, so "Web Development" turns into
/// "web-development" rather than collapsing into one word. Punctuation
/// inside a word is dropped ("React.js" becomes "reactjs").
pub fn normalize_tag(tag: &str) -> String {
    slugify(tag.trim())
}
