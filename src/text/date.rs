//! Release-year recovery from free-form date strings.
//!
//! Infobox "Released" cells come in many shapes ("5 August 1966",
//! "August 1966 (1966-08-05)", "1966"), so extraction runs through an
//! ordered list of strategies and the first one that yields a year wins.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Stand-in for an unknown year; loses every `min()` against a real year.
pub const UNKNOWN_YEAR_SENTINEL: i32 = 4000;

lazy_static! {
    static ref ISO_IN_PARENS_RE: Regex =
        Regex::new(r"\((\d{4})-").expect("iso year regex is valid");
    static ref STANDALONE_YEAR_RE: Regex =
        Regex::new(r"\b(\d{4})\b").expect("standalone year regex is valid");
}

/// A named way of pulling a year out of a string.
pub struct YearStrategy {
    pub name: &'static str,
    pub extract: fn(&str) -> Option<i32>,
}

/// Strategies in priority order.
pub const YEAR_STRATEGIES: &[YearStrategy] = &[
    YearStrategy {
        name: "iso_in_parens",
        extract: iso_year_in_parens,
    },
    YearStrategy {
        name: "standalone_year",
        extract: standalone_year,
    },
    YearStrategy {
        name: "day_month_year",
        extract: day_month_year,
    },
];

/// Extract a 4-digit year, or `None` when no strategy recognises the input.
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_STRATEGIES.iter().find_map(|strategy| {
        let year = (strategy.extract)(text)?;
        debug!("Year {} extracted from {:?} via {}", year, text, strategy.name);
        Some(year)
    })
}

fn iso_year_in_parens(text: &str) -> Option<i32> {
    ISO_IN_PARENS_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

fn standalone_year(text: &str) -> Option<i32> {
    STANDALONE_YEAR_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// chrono's `%Y` takes any digit count, so short years are rejected here.
fn day_month_year(text: &str) -> Option<i32> {
    NaiveDate::parse_from_str(text.trim(), "%d %B %Y")
        .ok()
        .map(|date| date.year())
        .filter(|year| (1000..=9999).contains(year))
}
