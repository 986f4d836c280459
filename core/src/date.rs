use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// chrono format of the canonical raw value.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Locale used to display dates to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateLocale {
    #[default]
    EnGb,
    EnUs,
    De,
    Fr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    DayMonthYear,
    MonthDayYear,
}

impl DateLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateLocale::EnGb => "en-GB",
            DateLocale::EnUs => "en-US",
            DateLocale::De => "de-DE",
            DateLocale::Fr => "fr-FR",
        }
    }

    /// chrono format string used for the visible value.
    pub fn display_format(&self) -> &'static str {
        match self {
            DateLocale::EnGb | DateLocale::Fr => "%d/%m/%Y",
            DateLocale::EnUs => "%m/%d/%Y",
            DateLocale::De => "%d.%m.%Y",
        }
    }

    /// Human readable pattern, used as the input placeholder.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateLocale::EnGb | DateLocale::Fr => "DD/MM/YYYY",
            DateLocale::EnUs => "MM/DD/YYYY",
            DateLocale::De => "DD.MM.YYYY",
        }
    }

    fn field_order(&self) -> FieldOrder {
        match self {
            DateLocale::EnUs => FieldOrder::MonthDayYear,
            _ => FieldOrder::DayMonthYear,
        }
    }
}

impl FromStr for DateLocale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "en" | "en-gb" | "gb" => Ok(DateLocale::EnGb),
            "en-us" | "us" => Ok(DateLocale::EnUs),
            "de" | "de-de" | "de-at" | "de-ch" => Ok(DateLocale::De),
            "fr" | "fr-fr" => Ok(DateLocale::Fr),
            _ => Err(()),
        }
    }
}

/// Strictly parse a `YYYY-MM-DD` string.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_FORMAT).ok()
}

pub fn is_valid_iso(value: &str) -> bool {
    parse_iso(value).is_some()
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Get "today" in the given timezone. Unknown zones fall back to UTC.
pub fn today_in_tz(tz_str: &str) -> NaiveDate {
    let tz: Tz = tz_str.parse().unwrap_or(chrono_tz::UTC);
    Utc::now().with_timezone(&tz).date_naive()
}

/// Normalise the separators of typed text to `/`.
///
/// `15.03.2021`, `15-03-2021` and `15 03 2021` all become `15/03/2021`.
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.trim().chars() {
        let c = match c {
            '.' | '-' | ' ' | ',' | '\\' => '/',
            other => other,
        };
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Converts between the locale display format and ISO values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateHelper {
    locale: DateLocale,
}

impl DateHelper {
    pub fn new(locale: DateLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> DateLocale {
        self.locale
    }

    /// Parse user text or an ISO value.
    ///
    /// Accepts strict ISO, locale ordered day/month/year with any of the
    /// separators handled by [`sanitize_input`], two digit years (2000 based)
    /// and the compact eight digit form.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(date) = parse_iso(trimmed) {
            return Some(date);
        }

        let sanitized = sanitize_input(trimmed);
        let parts: Vec<&str> = sanitized.split('/').collect();
        let (first, second, third) = match parts.as_slice() {
            [a, b, c] => (*a, *b, *c),
            [compact] if compact.len() == 8 && compact.bytes().all(|b| b.is_ascii_digit()) => {
                (&compact[0..2], &compact[2..4], &compact[4..8])
            }
            _ => return None,
        };

        if [first, second, third]
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        if first.len() == 4 {
            let year = first.parse().ok()?;
            return NaiveDate::from_ymd_opt(year, second.parse().ok()?, third.parse().ok()?);
        }

        if first.len() > 2 || second.len() > 2 {
            return None;
        }

        let year: i32 = match third.len() {
            4 => third.parse().ok()?,
            2 => 2000 + third.parse::<i32>().ok()?,
            _ => return None,
        };
        let a: u32 = first.parse().ok()?;
        let b: u32 = second.parse().ok()?;
        let (day, month) = match self.locale.field_order() {
            FieldOrder::DayMonthYear => (a, b),
            FieldOrder::MonthDayYear => (b, a),
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_some()
    }

    pub fn format_display(&self, date: NaiveDate) -> String {
        date.format(self.locale.display_format()).to_string()
    }

    /// Reformat any accepted input in the display format.
    pub fn to_display(&self, input: &str) -> Option<String> {
        self.parse(input).map(|d| self.format_display(d))
    }

    /// Reformat any accepted input as ISO.
    pub fn to_iso(&self, input: &str) -> Option<String> {
        self.parse(input).map(format_iso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse(), Ok(DateLocale::EnGb));
        assert_eq!("en_US".parse(), Ok(DateLocale::EnUs));
        assert_eq!("DE".parse(), Ok(DateLocale::De));
        assert_eq!("fr-FR".parse(), Ok(DateLocale::Fr));
        assert!("xx".parse::<DateLocale>().is_err());
    }

    #[test]
    fn test_parse_iso_is_strict() {
        assert_eq!(parse_iso("2021-03-15"), Some(ymd(2021, 3, 15)));
        assert_eq!(parse_iso("2021-3-15"), None);
        assert_eq!(parse_iso("15/03/2021"), None);
        assert_eq!(parse_iso("2021-02-31"), None);
        assert!(!is_valid_iso(""));
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(sanitize_input("15.03.2021"), "15/03/2021");
        assert_eq!(sanitize_input(" 15 - 03 - 2021 "), "15/03/2021");
        assert_eq!(sanitize_input("2021-03-15"), "2021/03/15");
    }

    #[test]
    fn test_parse_uk_display() {
        let helper = DateHelper::default();
        assert_eq!(helper.parse("15/03/2021"), Some(ymd(2021, 3, 15)));
        assert_eq!(helper.parse("15/3/21"), Some(ymd(2021, 3, 15)));
        assert_eq!(helper.parse("15032021"), Some(ymd(2021, 3, 15)));
        assert_eq!(helper.parse("2021-03-15"), Some(ymd(2021, 3, 15)));
        assert_eq!(helper.parse("2021/03/15"), Some(ymd(2021, 3, 15)));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        let helper = DateHelper::default();
        assert!(!helper.is_valid("31/02/2021"));
        assert!(!helper.is_valid("29/02/2021"));
        assert!(helper.is_valid("29/02/2020"));
        assert!(!helper.is_valid("15/13/2021"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let helper = DateHelper::default();
        assert!(!helper.is_valid(""));
        assert!(!helper.is_valid("abc"));
        assert!(!helper.is_valid("15/03"));
        assert!(!helper.is_valid("15/03/2x21"));
        assert!(!helper.is_valid("150/03/2021"));
        assert!(!helper.is_valid("15/03/202"));
    }

    #[test]
    fn test_us_order() {
        let helper = DateHelper::new(DateLocale::EnUs);
        assert_eq!(helper.parse("03/15/2021"), Some(ymd(2021, 3, 15)));
        assert!(!helper.is_valid("15/03/2021"));
        assert_eq!(helper.format_display(ymd(2021, 3, 15)), "03/15/2021");
    }

    #[test]
    fn test_german_display() {
        let helper = DateHelper::new(DateLocale::De);
        assert_eq!(helper.to_display("2021-03-15").as_deref(), Some("15.03.2021"));
        assert_eq!(helper.to_iso("15.03.2021").as_deref(), Some("2021-03-15"));
    }

    #[test]
    fn test_to_display_invalid_is_none() {
        let helper = DateHelper::default();
        assert_eq!(helper.to_display("31/02/2021"), None);
        assert_eq!(helper.to_iso(""), None);
    }

    #[test]
    fn test_parse_multibyte_compact_text_is_none() {
        let helper = DateHelper::default();
        assert_eq!(helper.parse("a€€b"), None);
        assert_eq!(helper.parse("€€ab"), None);
        assert_eq!(helper.parse("1€€1"), None);
    }

    #[test]
    fn test_today_invalid_timezone_defaults_to_utc() {
        assert_eq!(today_in_tz("Invalid/Timezone"), today_in_tz("UTC"));
    }

    proptest! {
        #[test]
        fn iso_display_round_trip(y in 1900i32..2100, m in 1u32..=12, d in 1u32..=31) {
            let date = NaiveDate::from_ymd_opt(y, m, d);
            prop_assume!(date.is_some());
            let iso = format_iso(date.unwrap());
            for locale in [DateLocale::EnGb, DateLocale::EnUs, DateLocale::De, DateLocale::Fr] {
                let helper = DateHelper::new(locale);
                let display = helper.to_display(&iso).unwrap();
                prop_assert_eq!(helper.to_iso(&display), Some(iso.clone()));
            }
        }
    }
}
