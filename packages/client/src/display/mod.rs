//! Localized display formatting.

use chrono::{Locale, NaiveDate};

/// Locale for all user-facing dates. The issuer's audience is Colombian.
const DISPLAY_LOCALE: Locale = Locale::es_CO;

/// Render a date the way the certificate screens show it: day, full month
/// name, year ("15 de enero de 2024").
///
/// Pure and total over valid dates.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format_localized("%-d de %B de %Y", DISPLAY_LOCALE)
        .to_string()
}
