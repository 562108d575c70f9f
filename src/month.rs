//! Calendar month extraction from sale dates and month names in requests.
//!
//! Sale dates are kept as the raw strings supplied by the seed feed, e.g.
//! `2021-11-27T20:29:54+05:30`. All month matching goes through
//! [month_of_sale] so that the SQL and in-memory query paths agree.

use std::fmt::Display;

use time::Month;

/// Extract the calendar month from a raw `date_of_sale` string.
///
/// Only the leading `YYYY-MM-` prefix is inspected, the rest of the string
/// (day, time, offset) is ignored. Returns `None` when the prefix does not
/// have that shape or the month number is outside 1-12.
pub fn month_of_sale(date_of_sale: &str) -> Option<Month> {
    let mut parts = date_of_sale.trim_start().splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    // A day component must follow the month.
    parts.next()?;

    if !is_digits(year, 4) || !is_digits(month, 2) {
        return None;
    }

    let number: u8 = month.parse().ok()?;
    Month::try_from(number).ok()
}

/// Parse an English month name, ignoring ASCII case and surrounding whitespace.
pub fn parse_month_name(name: &str) -> Option<Month> {
    let name = name.trim();

    (1..=12u8)
        .filter_map(|number| Month::try_from(number).ok())
        .find(|month| month.to_string().eq_ignore_ascii_case(name))
}

fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// The month given in a request, as typed by the client.
///
/// A name that is not a calendar month is kept so that it can be echoed back
/// in chart titles, but it matches no transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedMonth {
    name: String,
    month: Option<Month>,
}

impl RequestedMonth {
    /// Create a [RequestedMonth] from the raw query parameter.
    pub fn parse(name: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            month: parse_month_name(name),
        }
    }

    /// The calendar month, or `None` if the name was not recognised.
    pub fn month(&self) -> Option<Month> {
        self.month
    }
}

impl Display for RequestedMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.month {
            Some(month) => write!(f, "{month}"),
            None => write!(f, "{}", self.name),
        }
    }
}
