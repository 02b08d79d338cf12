//! Decade phrases for release years.

/// "early 1990s", "mid 1990s" or "late 1990s".
pub fn precise_decade(year: i32) -> String {
    let decade = year.div_euclid(10) * 10;
    let period = match year.rem_euclid(10) {
        0..=2 => "early",
        3..=6 => "mid",
        _ => "late",
    };
    format!("{} {}s", period, decade)
}

/// Coarse "1990's" form, used for display.
pub fn coarse_decade(year: i32) -> String {
    format!("{}'s", year.div_euclid(10) * 10)
}
