//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Build a five-star string with `floor(value)` filled stars.
///
/// Ratings and product averages both flow through here; values outside 0-5
/// clamp to the displayable range.
fn stars_for(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = value.floor().clamp(0.0, 5.0) as usize;
    let mut stars = "\u{2605}".repeat(filled);
    stars.push_str(&"\u{2606}".repeat(5 - filled));
    stars
}

/// Render a rating value as filled and empty stars.
///
/// Usage in templates: `{{ review.rating|rating_stars }}`
#[askama::filter_fn]
pub fn rating_stars(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let value = value.to_string().parse::<f64>().unwrap_or(0.0);
    Ok(stars_for(value))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
