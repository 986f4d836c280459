use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::NumeralDateError;

/// One input box of a numeral date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Dd,
    Mm,
    Yyyy,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Dd => "dd",
            Segment::Mm => "mm",
            Segment::Yyyy => "yyyy",
        }
    }

    pub fn max_len(&self) -> usize {
        match self {
            Segment::Dd | Segment::Mm => 2,
            Segment::Yyyy => 4,
        }
    }

    /// Whether a complete segment value is in range.
    pub fn is_valid(&self, value: &str) -> bool {
        if value.is_empty() || value.len() > self.max_len() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match self {
            Segment::Dd => matches!(value.parse::<u32>(), Ok(1..=31)),
            Segment::Mm => matches!(value.parse::<u32>(), Ok(1..=12)),
            Segment::Yyyy => value.len() == 4,
        }
    }

    /// Whether `value` can still become valid while typing.
    pub fn accepts_partial(&self, value: &str) -> bool {
        value.len() <= self.max_len() && value.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Allowed input layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumeralDateFormat {
    #[default]
    DayMonthYear,
    MonthDayYear,
    DayMonth,
    MonthDay,
    MonthYear,
}

impl NumeralDateFormat {
    pub fn segments(&self) -> &'static [Segment] {
        match self {
            NumeralDateFormat::DayMonthYear => &[Segment::Dd, Segment::Mm, Segment::Yyyy],
            NumeralDateFormat::MonthDayYear => &[Segment::Mm, Segment::Dd, Segment::Yyyy],
            NumeralDateFormat::DayMonth => &[Segment::Dd, Segment::Mm],
            NumeralDateFormat::MonthDay => &[Segment::Mm, Segment::Dd],
            NumeralDateFormat::MonthYear => &[Segment::Mm, Segment::Yyyy],
        }
    }

    /// Layout from a list such as `["mm", "dd", "yyyy"]`.
    pub fn from_segments<S: AsRef<str>>(names: &[S]) -> Result<Self, NumeralDateError> {
        let names: Vec<String> = names.iter().map(|s| s.as_ref().to_lowercase()).collect();
        let joined: Vec<&str> = names.iter().map(String::as_str).collect();
        match joined.as_slice() {
            ["dd", "mm", "yyyy"] => Ok(NumeralDateFormat::DayMonthYear),
            ["mm", "dd", "yyyy"] => Ok(NumeralDateFormat::MonthDayYear),
            ["dd", "mm"] => Ok(NumeralDateFormat::DayMonth),
            ["mm", "dd"] => Ok(NumeralDateFormat::MonthDay),
            ["mm", "yyyy"] => Ok(NumeralDateFormat::MonthYear),
            _ => Err(NumeralDateError::UnsupportedFormat(names)),
        }
    }
}

/// Segment values keyed by segment.
pub type NumeralDateValue = BTreeMap<Segment, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralDateEvent {
    pub name: String,
    pub id: String,
    pub value: NumeralDateValue,
}

/// Problems found in a numeral date, keyed by segment.
pub fn validate(format: NumeralDateFormat, value: &NumeralDateValue) -> Vec<Segment> {
    let mut invalid: Vec<Segment> = format
        .segments()
        .iter()
        .copied()
        .filter(|segment| {
            let text = value.get(segment).map(String::as_str).unwrap_or("");
            !segment.is_valid(text)
        })
        .collect();

    let full_date = matches!(
        format,
        NumeralDateFormat::DayMonthYear | NumeralDateFormat::MonthDayYear
    );
    if invalid.is_empty() && full_date && to_date(value).is_none() {
        invalid.push(Segment::Dd);
    }
    invalid
}

/// Full calendar date when all three segments are present and valid.
pub fn to_date(value: &NumeralDateValue) -> Option<NaiveDate> {
    let get = |segment: Segment| -> Option<u32> { value.get(&segment).and_then(|v| v.parse().ok()) };
    NaiveDate::from_ymd_opt(get(Segment::Yyyy)? as i32, get(Segment::Mm)?, get(Segment::Dd)?)
}

/// Empty value with one entry per segment of `format`.
pub fn empty_value(format: NumeralDateFormat) -> NumeralDateValue {
    format
        .segments()
        .iter()
        .map(|segment| (*segment, String::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(pairs: &[(Segment, &str)]) -> NumeralDateValue {
        pairs.iter().map(|(s, v)| (*s, v.to_string())).collect()
    }

    #[test]
    fn test_format_from_segments() {
        assert_eq!(
            NumeralDateFormat::from_segments(&["mm", "dd", "yyyy"]),
            Ok(NumeralDateFormat::MonthDayYear)
        );
        assert_eq!(
            NumeralDateFormat::from_segments(&["MM", "YYYY"]),
            Ok(NumeralDateFormat::MonthYear)
        );
        assert!(NumeralDateFormat::from_segments(&["yyyy", "mm", "dd"]).is_err());
    }

    #[test]
    fn test_segment_ranges() {
        assert!(Segment::Dd.is_valid("31"));
        assert!(!Segment::Dd.is_valid("32"));
        assert!(!Segment::Dd.is_valid("0"));
        assert!(Segment::Mm.is_valid("1"));
        assert!(!Segment::Mm.is_valid("13"));
        assert!(Segment::Yyyy.is_valid("2021"));
        assert!(!Segment::Yyyy.is_valid("21"));
        assert!(!Segment::Yyyy.is_valid("20a1"));
    }

    #[test]
    fn test_partial_input() {
        assert!(Segment::Dd.accepts_partial(""));
        assert!(Segment::Dd.accepts_partial("3"));
        assert!(!Segment::Dd.accepts_partial("311"));
        assert!(!Segment::Yyyy.accepts_partial("20x"));
    }

    #[test]
    fn test_validate_full_date() {
        let ok = value(&[(Segment::Dd, "15"), (Segment::Mm, "03"), (Segment::Yyyy, "2021")]);
        assert!(validate(NumeralDateFormat::DayMonthYear, &ok).is_empty());
        assert_eq!(to_date(&ok), NaiveDate::from_ymd_opt(2021, 3, 15));

        let feb = value(&[(Segment::Dd, "31"), (Segment::Mm, "02"), (Segment::Yyyy, "2021")]);
        assert_eq!(validate(NumeralDateFormat::DayMonthYear, &feb), vec![Segment::Dd]);
    }

    #[test]
    fn test_validate_partial_layouts() {
        let month_year = value(&[(Segment::Mm, "13"), (Segment::Yyyy, "2021")]);
        assert_eq!(validate(NumeralDateFormat::MonthYear, &month_year), vec![Segment::Mm]);

        let day_month = value(&[(Segment::Dd, "31"), (Segment::Mm, "02")]);
        assert!(validate(NumeralDateFormat::DayMonth, &day_month).is_empty());
    }

    #[test]
    fn test_empty_value_has_layout_segments() {
        let empty = empty_value(NumeralDateFormat::MonthYear);
        assert_eq!(empty.len(), 2);
        assert!(empty.contains_key(&Segment::Mm));
        assert!(empty.contains_key(&Segment::Yyyy));
    }

    #[test]
    fn test_event_serializes_segment_keys() {
        let event = NumeralDateEvent {
            name: "dob".to_string(),
            id: "dob-id".to_string(),
            value: value(&[(Segment::Dd, "01"), (Segment::Mm, "02")]),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["value"]["dd"], "01");
        assert_eq!(json["value"]["mm"], "02");
    }
}
