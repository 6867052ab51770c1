use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveDate;
use thiserror::Error;

/// Accepted resume date formats, tried in order. Month-only and year-only
/// formats resolve to the first day of the period.
const DATE_FORMATS: &[&str] = &["%b %Y", "%B %Y", "%Y", "%b %d, %Y", "%B %d, %Y"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unable to parse date: {0}")]
pub struct DateParseError(pub String);

/// Parse a date string against the fixed format list; the first format that
/// succeeds wins. Callers treat a failure as "no date", never as fatal.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| try_format(raw, fmt))
        .ok_or_else(|| DateParseError(raw.to_string()))
}

fn try_format(raw: &str, fmt: &str) -> Option<NaiveDate> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, raw, StrftimeItems::new(fmt)).ok()?;
    // Fill whatever the format left unset; set_* refuses to overwrite a
    // value the parse already produced.
    let _ = parsed.set_month(1);
    let _ = parsed.set_day(1);
    parsed.to_naive_date().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_abbreviated_month_and_year() {
        assert_eq!(
            parse_date("Jan 2020"),
            Ok(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        );
    }

    #[test]
    fn parses_full_month_name() {
        assert_eq!(
            parse_date("September 2015"),
            Ok(NaiveDate::from_ymd_opt(2015, 9, 1).unwrap())
        );
    }

    #[test]
    fn parses_bare_year() {
        assert_eq!(
            parse_date("2018"),
            Ok(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
        );
    }

    #[test]
    fn parses_month_day_year() {
        assert_eq!(
            parse_date("Mar 03, 2021"),
            Ok(NaiveDate::from_ymd_opt(2021, 3, 3).unwrap())
        );
        assert_eq!(
            parse_date("March 03, 2021"),
            Ok(NaiveDate::from_ymd_opt(2021, 3, 3).unwrap())
        );
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(parse_date("sometime in 2020").is_err());
        assert!(parse_date("").is_err());
    }
}
