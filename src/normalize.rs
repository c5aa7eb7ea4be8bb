// src/normalize.rs
//! Pure field normalization for raw service records.
//!
//! Everything here degrades gracefully: unparseable input resolves to a
//! documented fallback value, never an error. A half-broken record still
//! earns its place in the outline.

use crate::constants::UNCATEGORIZED;
use crate::model::Category;
use chrono::{Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading bracketed nationality tag, e.g. `[美]` or `[US]`.
static NATIONALITY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[.*?\]").expect("nationality tag pattern is valid"));

/// Strips a leading bracketed nationality tag from an author name.
///
/// If stripping leaves nothing (the whole name was the tag), the original
/// input is returned unchanged; an author is never emptied.
pub fn clean_author(raw: &str) -> String {
    let cleaned = NATIONALITY_TAG.replace(raw, "").trim().to_string();
    if cleaned.is_empty() {
        raw.to_string()
    } else {
        cleaned
    }
}

/// Collapses a book's category list to one display name.
///
/// Takes the first category; a `-`-separated taxonomy path keeps only its
/// top and leaf levels (`精品小说-现代-社会小说` becomes `精品小说-社会小说`).
pub fn simplify_category(categories: &[Category]) -> String {
    let Some(first) = categories.first() else {
        return UNCATEGORIZED.to_string();
    };
    let title = first.title.as_str();
    if title.contains('-') {
        let parts: Vec<&str> = title.split('-').collect();
        format!("{}-{}", parts[0], parts[parts.len() - 1])
    } else {
        title.to_string()
    }
}

/// Parses a `"<start>-<end>"` range string into `(start, end)`.
///
/// An empty string yields `(0, 0)`; a lone `"<start>"` yields
/// `(start, start)`. A non-numeric segment is treated as absent rather
/// than rejected.
pub fn parse_range(range: &str) -> (u32, u32) {
    if range.is_empty() {
        return (0, 0);
    }
    let mut parts = range.split('-');
    let start_text = parts.next().unwrap_or_default();
    let start = match start_text.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            if !start_text.is_empty() {
                log::debug!("Malformed range start '{}', defaulting to 0", range);
            }
            0
        }
    };
    let end = match parts.next() {
        Some(end_text) if !end_text.is_empty() => end_text.parse::<u32>().unwrap_or(start),
        _ => start,
    };
    (start, end)
}

/// Formats an epoch timestamp as a Logseq journal link,
/// `[[YYYY-MM-DD Weekday]]`. Empty for timestamps ≤ 0.
pub fn format_date_link(timestamp: i64) -> String {
    if timestamp <= 0 {
        return String::new();
    }
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => format!("[[{}]]", dt.format("%Y-%m-%d %A")),
        None => String::new(),
    }
}

/// Formats publish-time text like `"2025-08-07 00:00:00"` as
/// `"2025-08-07 Thursday"`.
///
/// Only the date portion before the first space is parsed; unparseable
/// input is returned unchanged.
pub fn format_publish_date(publish_time: &str) -> String {
    let date_part = publish_time.split_whitespace().next().unwrap_or_default();
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d %A").to_string(),
        Err(_) => publish_time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_author_strips_nationality_tag() {
        assert_eq!(clean_author("[US] Mark Twain"), "Mark Twain");
        assert_eq!(clean_author("[法]加缪"), "加缪");
        assert_eq!(clean_author("鲁迅"), "鲁迅");
    }

    #[test]
    fn clean_author_never_produces_empty_output_from_nonempty_input() {
        assert_eq!(clean_author("[US]"), "[US]");
        assert_eq!(clean_author(""), "");
    }

    #[test]
    fn simplify_category_collapses_taxonomy_path() {
        let cats = vec![Category {
            title: "精品小说-现代-社会小说".to_string(),
        }];
        assert_eq!(simplify_category(&cats), "精品小说-社会小说");
    }

    #[test]
    fn simplify_category_keeps_two_level_titles() {
        let cats = vec![Category {
            title: "Fiction-Social Fiction".to_string(),
        }];
        assert_eq!(simplify_category(&cats), "Fiction-Social Fiction");
    }

    #[test]
    fn simplify_category_falls_back_when_empty() {
        assert_eq!(simplify_category(&[]), "未分类");
    }

    #[test]
    fn parse_range_handles_all_shapes() {
        assert_eq!(parse_range("120-245"), (120, 245));
        assert_eq!(parse_range("120"), (120, 120));
        assert_eq!(parse_range(""), (0, 0));
        assert_eq!(parse_range("-245"), (0, 245));
        assert_eq!(parse_range("120-"), (120, 120));
    }

    #[test]
    fn parse_range_is_soft_on_garbage() {
        assert_eq!(parse_range("x-y"), (0, 0));
        assert_eq!(parse_range("120-y"), (120, 120));
    }

    #[test]
    fn date_link_is_empty_for_missing_timestamps() {
        assert_eq!(format_date_link(0), "");
        assert_eq!(format_date_link(-5), "");
    }

    #[test]
    fn date_link_carries_weekday_suffix() {
        let link = format_date_link(1_700_000_000);
        assert!(link.starts_with("[[20"));
        assert!(link.ends_with("day]]"), "weekday suffix missing: {}", link);
    }

    #[test]
    fn publish_date_parses_date_portion_only() {
        assert_eq!(format_publish_date("2025-08-07 00:00:00"), "2025-08-07 Thursday");
    }

    #[test]
    fn publish_date_degrades_to_input_on_parse_failure() {
        assert_eq!(format_publish_date("公元前"), "公元前");
        assert_eq!(format_publish_date(""), "");
    }
}
