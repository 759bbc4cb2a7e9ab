//! Formatting helpers shared by Fact and Period rendering.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Renders an instant as a human date.
///
/// A date-only instant marking the end of a reporting period is shown as the
/// previous calendar day: the ISO interval `2018-01-01/2019-01-01` reads as
/// "1 Jan 2018 to 31 Dec 2018". Instants with a time of day are shown as-is
/// with the time appended.
pub fn isodate_to_human(dt: NaiveDateTime, is_end: bool) -> String {
    if dt.time() == NaiveTime::MIN {
        let date = if is_end {
            dt.date() - Duration::days(1)
        } else {
            dt.date()
        };
        date.format("%-d %b %Y").to_string()
    } else {
        dt.format("%-d %b %Y %H:%M:%S").to_string()
    }
}

/// Formats a number with thousands separators, rounded to `decimals`
/// fraction digits. `1234567.5` with 0 decimals gives `"1,234,568"`.
pub fn format_number(v: f64, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(s.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Number of fraction digits in the value's shortest decimal representation.
/// Used to display numeric facts that carry no decimals attribute.
pub fn natural_decimals(v: f64) -> usize {
    let s = format!("{v}");
    match s.split_once('.') {
        Some((_, frac)) => frac.len(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    #[test]
    fn grouping() {
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(100.0, 0), "100");
        assert_eq!(format_number(1234567.0, 0), "1,234,567");
        assert_eq!(format_number(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_number(0.0, 0), "0");
    }

    #[test]
    fn rounding() {
        assert_eq!(format_number(1234.5678, 2), "1,234.57");
        assert_eq!(format_number(999.9, 0), "1,000");
        assert_eq!(format_number(1000.0, 2), "1,000.00");
    }

    #[test]
    fn natural_fraction_digits() {
        assert_eq!(natural_decimals(1000.0), 0);
        assert_eq!(natural_decimals(3.25), 2);
        assert_eq!(natural_decimals(0.5), 1);
    }

    #[test]
    fn human_dates() {
        assert_eq!(isodate_to_human(date(2019, 1, 1), false), "1 Jan 2019");
        // End dates roll back one day to read as an inclusive period end.
        assert_eq!(isodate_to_human(date(2019, 1, 1), true), "31 Dec 2018");
        assert_eq!(isodate_to_human(date(2020, 3, 1), true), "29 Feb 2020");

        let with_time = NaiveDate::from_ymd_opt(2019, 1, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        assert_eq!(isodate_to_human(with_time, true), "1 Jan 2019 06:00:00");
    }
}
