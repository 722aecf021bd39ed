//! Display formatting and identifier generation.

use chrono::{DateTime, Utc};
use timeago::Formatter;

use crate::model::ListingId;

/// Formats a price as US dollars with en-US digit grouping.
///
/// Up to three fraction digits are kept and trailing zeros dropped, so
/// `28500.0` renders as `$28,500` and `1234.5` as `$1,234.5`.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "$NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "$∞" } else { "$-∞" }.to_string();
    }

    // Round by formatting; `price * 1000.0` overflows near `f64::MAX`.
    let fixed = format!("{:.3}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = frac_part.is_empty() && int_part.bytes().all(|b| b == b'0');

    let mut out = String::from("$");
    if price < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A fresh identifier derived from the current time in milliseconds.
///
/// Two listings created within the same millisecond get the same id.
pub fn generate_id() -> ListingId {
    Utc::now().timestamp_millis()
}

/// The "N cars found" label shown above a result list.
pub fn results_count(count: usize) -> String {
    format!("{} car{} found", count, if count == 1 { "" } else { "s" })
}

/// Relative age of a listing, e.g. "3 days ago".
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
