//! Date recognition and normalization.

use chrono::NaiveDate;
use regex::Regex;

use super::patterns::{
    DATE_CJK, DATE_DASH_DMY, DATE_DOT_YMD, DATE_ISO, DATE_MONTH_NAME, DATE_SLASH_DMY,
    DATE_SLASH_YMD,
};
use super::{ExtractionMatch, FieldExtractor};

/// Supported date notations, in catalog priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateNotation {
    /// `YYYY-MM-DD`, already canonical.
    Iso,
    /// `YYYY/MM/DD`.
    SlashYmd,
    /// `YYYY.MM.DD`.
    DotYmd,
    /// `DD-MM-YYYY`.
    DashDmy,
    /// `DD/MM/YYYY`.
    SlashDmy,
    /// `Month D, YYYY` / `Month Dth, YYYY`.
    MonthName,
    /// `YYYY年MM月DD日`, preserved verbatim by policy.
    Cjk,
}

fn catalog() -> [(DateNotation, &'static Regex); 7] {
    [
        (DateNotation::Iso, &*DATE_ISO),
        (DateNotation::SlashYmd, &*DATE_SLASH_YMD),
        (DateNotation::DotYmd, &*DATE_DOT_YMD),
        (DateNotation::DashDmy, &*DATE_DASH_DMY),
        (DateNotation::SlashDmy, &*DATE_SLASH_DMY),
        (DateNotation::MonthName, &*DATE_MONTH_NAME),
        (DateNotation::Cjk, &*DATE_CJK),
    ]
}

/// Date field extractor.
///
/// Recognizes the notations in [`DateNotation`] order; the first notation
/// with a match wins and its leftmost occurrence is used. Western numeric
/// notations are rewritten to `YYYY-MM-DD`; the CJK notation is preserved
/// verbatim, as is any matched substring whose components do not form a
/// real calendar date.
pub struct DateNormalizer;

impl DateNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateNormalizer {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (notation, pattern) in catalog() {
            for caps in pattern.captures_iter(text) {
                let full_match = caps.get(0).expect("group 0 always present");
                let normalized = match notation {
                    // Already canonical; returned unchanged.
                    DateNotation::Iso => full_match.as_str().to_string(),
                    // Preserved verbatim by policy, not rewritten to ISO.
                    DateNotation::Cjk => full_match.as_str().to_string(),
                    DateNotation::SlashYmd | DateNotation::DotYmd => {
                        normalize_ymd(&caps[1], &caps[2], &caps[3])
                            .unwrap_or_else(|| full_match.as_str().to_string())
                    }
                    DateNotation::DashDmy | DateNotation::SlashDmy => {
                        normalize_ymd(&caps[3], &caps[2], &caps[1])
                            .unwrap_or_else(|| full_match.as_str().to_string())
                    }
                    DateNotation::MonthName => {
                        normalize_month_name(&caps[1], &caps[2], &caps[3])
                            .unwrap_or_else(|| full_match.as_str().to_string())
                    }
                };

                results.push(
                    ExtractionMatch::new(normalized, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

fn normalize_ymd(year: &str, month: &str, day: &str) -> Option<String> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.format("%Y-%m-%d").to_string())
}

fn normalize_month_name(month: &str, day: &str, year: &str) -> Option<String> {
    let month = month_to_number(month)?;
    normalize_ymd(year, &month.to_string(), day)
}

fn month_to_number(month: &str) -> Option<u32> {
    match month.to_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}

/// Extract and normalize the invoice date from the whole text.
pub fn extract_date(text: &str) -> Option<String> {
    DateNormalizer::new().extract(text).map(|m| m.value)
}
