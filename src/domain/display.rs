use super::payout::{Currency, MinorUnits};
use chrono::{DateTime, Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

/// Masks a raw destination identifier for display.
///
/// `ba_` identifiers render as bank accounts and `card_` as cards; any other
/// tag falls back to a generic account label. The suffix is the last four
/// characters of the identifier body; a body shorter than four characters
/// shows the whole identifier instead of failing.
pub fn mask_destination(raw: &str) -> String {
    let (kind, body) = match raw.split_once('_') {
        Some(("ba", body)) => ("Bank", body),
        Some(("card", body)) => ("Card", body),
        Some((_, body)) => ("Account", body),
        None => ("Account", raw),
    };
    let suffix = match body.char_indices().rev().nth(3) {
        Some((idx, _)) => &body[idx..],
        None => raw,
    };
    format!("{kind} ••••{suffix}")
}

/// Formats a minor-unit amount as a major-unit display string, e.g.
/// `1050, USD` becomes `"$10.50"`. Codes without a known symbol are prefixed
/// with the code itself.
pub fn format_currency(amount: MinorUnits, currency: &Currency) -> String {
    let major = Decimal::new(amount.value(), 2);
    match currency.symbol() {
        Some(symbol) => format!("{symbol}{major}"),
        None => format!("{} {major}", currency.code()),
    }
}

/// Renders an epoch timestamp as `"Apr 6, 2022"`.
pub fn format_short_date(epoch_secs: i64) -> String {
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Next business day after `today`, rendered as `"April 5"`. Weekends are
/// skipped; holidays are not tracked.
pub fn next_business_day(today: NaiveDate) -> String {
    let mut day = today + Days::new(1);
    while matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        day = day + Days::new(1);
    }
    day.format("%B %-d").to_string()
}
