use error_stack::Report;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// Publication date normalized to a UTC instant. Date-only inputs land on midnight.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookPublished(OffsetDateTime);

type Parser = fn(&str) -> Option<OffsetDateTime>;

// First success wins, so `DD/MM/YYYY` shadows `MM/DD/YYYY` whenever the day is <= 12.
const PARSERS: [(&str, Parser); 5] = [
    ("YYYY-MM-DD", parse_date),
    ("DD/MM/YYYY", parse_day_first),
    ("MM/DD/YYYY", parse_month_first),
    ("YYYY-MM-DDThh:mm:ssZ", parse_utc_date_time),
    ("RFC3339", parse_rfc3339),
];

impl BookPublished {
    pub fn new(published: impl Into<OffsetDateTime>) -> Self {
        Self(published.into().to_offset(UtcOffset::UTC))
    }

    /// Returns `Ok(None)` for an empty string or the literal `null`.
    pub fn parse(value: &str) -> error_stack::Result<Option<Self>, KernelError> {
        let value = value.trim();
        if value.is_empty() || value == "null" {
            return Ok(None);
        }
        PARSERS
            .iter()
            .find_map(|(_, parser)| parser(value))
            .map(|published| Some(Self::new(published)))
            .ok_or_else(|| {
                let accepted = PARSERS
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", ");
                Report::new(KernelError::InvalidDateFormat)
                    .attach_printable(format!("`{value}` matches none of: {accepted}"))
            })
    }
}

fn at_midnight(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

// `[year]` alone would also take a leading sign.
fn is_year(year: Option<&str>) -> bool {
    year.is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_date(value: &str) -> Option<OffsetDateTime> {
    if !is_year(value.get(..4)) {
        return None;
    }
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(at_midnight)
}

fn parse_day_first(value: &str) -> Option<OffsetDateTime> {
    if !is_year(value.rsplit('/').next()) {
        return None;
    }
    Date::parse(value, format_description!("[day]/[month]/[year]"))
        .ok()
        .map(at_midnight)
}

fn parse_month_first(value: &str) -> Option<OffsetDateTime> {
    if !is_year(value.rsplit('/').next()) {
        return None;
    }
    Date::parse(value, format_description!("[month]/[day]/[year]"))
        .ok()
        .map(at_midnight)
}

fn parse_utc_date_time(value: &str) -> Option<OffsetDateTime> {
    if !is_year(value.get(..4)) {
        return None;
    }
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"),
    )
    .ok()
    .map(PrimitiveDateTime::assume_utc)
}

fn parse_rfc3339(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}
