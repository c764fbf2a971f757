//! Formatting helpers for axis labels.

use time::{macros::format_description, PrimitiveDateTime};

/// Time axis label, `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(value: PrimitiveDateTime) -> String {
    value
        .format(&format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_default()
}

/// Value axis label: whole numbers without decimals, otherwise up to two.
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').to_string()
    }
}
