// src/domain/publication_date.rs
use chrono::{DateTime, Datelike, Utc};

const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Render a publication timestamp as `"<quarter> <month> <year>"` with
/// pt-BR month abbreviations, evaluated in UTC.
pub fn format_publication_date(timestamp: DateTime<Utc>) -> String {
    let month0 = timestamp.month0() as usize;
    let quarter = month0 / 3 + 1;
    format!("{quarter} {} {}", MONTHS_PT_BR[month0], timestamp.year())
}

pub fn format_optional(timestamp: Option<DateTime<Utc>>) -> Option<String> {
    timestamp.map(format_publication_date)
}
