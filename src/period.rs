use crate::util::isodate_to_human;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// The temporal context of a fact: forever (no period string), an instant
/// (a single ISO 8601 date or date-time), or a half-open interval (two
/// ISO 8601 instants joined by `/`).
///
/// Construction never fails; malformed period strings surface as
/// [`Error::MalformedPeriod`] from [`Period::from`] / [`Period::to`], so one
/// bad fact does not block the rest of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    raw: Option<String>,
}

impl Period {
    pub fn new(p: Option<&str>) -> Period {
        Period {
            raw: p.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn is_forever(&self) -> bool {
        self.raw.is_none()
    }

    pub fn is_instant(&self) -> bool {
        matches!(&self.raw, Some(p) if !p.contains('/'))
    }

    /// The end (or sole) instant. `None` only for a forever period.
    pub fn to(&self) -> Result<Option<NaiveDateTime>> {
        match &self.raw {
            None => Ok(None),
            Some(p) => {
                let end = match p.split_once('/') {
                    Some((_, to)) => to,
                    None => p.as_str(),
                };
                parse_instant(end).map(Some)
            }
        }
    }

    /// The start instant of an interval; `None` for forever or an instant.
    pub fn from(&self) -> Result<Option<NaiveDateTime>> {
        match &self.raw {
            Some(p) => match p.split_once('/') {
                Some((from, _)) => parse_instant(from).map(Some),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }

    /// Whether two periods cover durations of comparable length. Instants
    /// are mutually equivalent; an instant never matches an interval; two
    /// intervals match when their lengths differ by less than 10% of their
    /// combined length. Malformed periods compare as non-equivalent.
    pub fn is_equivalent_duration(&self, other: &Period) -> bool {
        let bounds = |p: &Period| match (p.from(), p.to()) {
            (Ok(f), Ok(t)) => Some((f, t)),
            _ => None,
        };
        let (Some((f1, t1)), Some((f2, t2))) = (bounds(self), bounds(other)) else {
            return false;
        };
        match (f1, t1, f2, t2) {
            (None, _, None, _) => true,
            (Some(f1), Some(t1), Some(f2), Some(t2)) => {
                let d1 = (t1 - f1).num_seconds().abs() as f64;
                let d2 = (t2 - f2).num_seconds().abs() as f64;
                (d1 - d2).abs() < 0.1 * (d1 + d2)
            }
            _ => false,
        }
    }
}

/// Human rendering: `"None"` for forever, the humanized end date for an
/// instant, `"<from> to <to>"` for an interval. A malformed period string is
/// rendered raw; the parse error stays reachable through `from()`/`to()`.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(raw) = &self.raw else {
            return write!(f, "None");
        };
        match (self.from(), self.to()) {
            (Ok(Some(from)), Ok(Some(to))) => {
                write!(
                    f,
                    "{} to {}",
                    isodate_to_human(from, false),
                    isodate_to_human(to, true)
                )
            }
            (Ok(None), Ok(Some(to))) => write!(f, "{}", isodate_to_human(to, true)),
            _ => write!(f, "{raw}"),
        }
    }
}

fn parse_instant(s: &str) -> Result<NaiveDateTime> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    // Zoned date-times normalize to UTC.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    Err(Error::MalformedPeriod(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn instant(s: &str) -> NaiveDateTime {
        parse_instant(s).unwrap()
    }

    #[test]
    fn duration() {
        let d = Period::new(Some("2018-01-01/2019-01-01"));
        assert_eq!(d.from().unwrap(), Some(instant("2018-01-01")));
        assert_eq!(d.to().unwrap(), Some(instant("2019-01-01")));
        assert!(!d.is_instant());
        assert!(!d.is_forever());
        assert_eq!(d.to_string(), "1 Jan 2018 to 31 Dec 2018");
    }

    #[test]
    fn instant_without_time() {
        let i = Period::new(Some("2019-01-01"));
        assert_eq!(i.from().unwrap(), None);
        assert_eq!(i.to().unwrap(), Some(instant("2019-01-01")));
        assert!(i.is_instant());
        assert_eq!(i.to_string(), "31 Dec 2018");
    }

    #[test]
    fn instant_with_time() {
        let i = Period::new(Some("2019-01-01T06:00:00"));
        assert_eq!(i.from().unwrap(), None);
        assert_eq!(i.to().unwrap(), Some(instant("2019-01-01T06:00:00")));
        assert_eq!(i.to_string(), "1 Jan 2019 06:00:00");
    }

    #[test]
    fn forever() {
        let p = Period::new(None);
        assert!(p.is_forever());
        assert_eq!(p.from().unwrap(), None);
        assert_eq!(p.to().unwrap(), None);
        assert_eq!(p.to_string(), "None");

        // An empty string is also forever.
        assert_eq!(Period::new(Some("")).to_string(), "None");
    }

    #[test]
    fn malformed() {
        let p = Period::new(Some("not-a-date"));
        assert!(matches!(p.to(), Err(Error::MalformedPeriod(_))));
        // Display falls back to the raw string.
        assert_eq!(p.to_string(), "not-a-date");
    }

    #[test]
    fn equivalent_durations() {
        let i1 = Period::new(Some("2019-01-01"));
        let i2 = Period::new(Some("2018-01-01"));
        let d1 = Period::new(Some("2018-01-01/2019-01-01"));
        let d2 = Period::new(Some("2018-01-01/2019-01-01"));
        let leap = Period::new(Some("2016-01-01/2017-01-01"));
        let month = Period::new(Some("2018-01-01/2018-02-01"));

        assert!(i1.is_equivalent_duration(&i2));
        assert!(!i1.is_equivalent_duration(&d1));
        assert!(!d1.is_equivalent_duration(&i1));
        assert!(d1.is_equivalent_duration(&d2));
        // One day's difference between a leap and a common year is within
        // tolerance.
        assert!(d1.is_equivalent_duration(&leap));
        assert!(!d1.is_equivalent_duration(&month));
    }
}
