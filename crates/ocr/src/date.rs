use chrono::NaiveDate;
use regex::{Captures, Regex};
use slipscan_core::DateRange;
use tracing::debug;

use crate::normalize::LineList;
use crate::patterns::{
    re_date_dash_long, re_date_dash_short, re_date_day_first, re_date_iso, re_date_month_first,
    re_date_slash_long, re_date_slash_short,
};

/// How the three capture groups of a date pattern map onto a calendar date.
/// Numeric forms are always read day-before-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    YearMonthDay,
    /// `DD/MM/YYYY`, `DD-MM-YYYY`
    DayMonthYear,
    /// `DD/MM/YY`, `DD-MM-YY`
    DayMonthShortYear,
    /// `Mon DD, YYYY`
    MonthNameDayYear,
    /// `DD Mon YYYY`
    DayMonthNameYear,
}

pub struct DatePatternEntry {
    pub regex: fn() -> &'static Regex,
    pub format: DateFormat,
}

/// Tried in order against each line; the first pattern that yields a valid,
/// in-window date ends the scan.
pub static DATE_PATTERNS: [DatePatternEntry; 7] = [
    DatePatternEntry { regex: re_date_iso, format: DateFormat::YearMonthDay },
    DatePatternEntry { regex: re_date_slash_long, format: DateFormat::DayMonthYear },
    DatePatternEntry { regex: re_date_slash_short, format: DateFormat::DayMonthShortYear },
    DatePatternEntry { regex: re_date_dash_long, format: DateFormat::DayMonthYear },
    DatePatternEntry { regex: re_date_dash_short, format: DateFormat::DayMonthShortYear },
    DatePatternEntry { regex: re_date_month_first, format: DateFormat::MonthNameDayYear },
    DatePatternEntry { regex: re_date_day_first, format: DateFormat::DayMonthNameYear },
];

/// First-found date search across lines in order. Candidates that are not
/// real calendar dates, or that fall outside `[today - window_years, today]`,
/// are skipped and the scan carries on.
pub fn extract_date(
    lines: &LineList<'_>,
    today: NaiveDate,
    window_years: u32,
    year_pivot: u32,
) -> Option<NaiveDate> {
    let window = DateRange::trailing_years(today, window_years);

    for line in lines.iter() {
        for entry in &DATE_PATTERNS {
            let Some(caps) = (entry.regex)().captures(line) else {
                continue;
            };
            match resolve(entry.format, &caps, year_pivot) {
                Some(date) if window.contains(date) => return Some(date),
                Some(date) => debug!(%date, %window, "date outside validity window"),
                None => debug!(candidate = &caps[0], "not a calendar date"),
            }
        }
    }
    None
}

fn resolve(format: DateFormat, c: &Captures<'_>, year_pivot: u32) -> Option<NaiveDate> {
    let num = |i: usize| c.get(i)?.as_str().parse::<u32>().ok();
    let (year, month, day) = match format {
        DateFormat::YearMonthDay => (num(1)? as i32, num(2)?, num(3)?),
        DateFormat::DayMonthYear => (num(3)? as i32, num(2)?, num(1)?),
        DateFormat::DayMonthShortYear => (expand_two_digit_year(num(3)?, year_pivot), num(2)?, num(1)?),
        DateFormat::MonthNameDayYear => (num(3)? as i32, month_abbr_to_num(c.get(1)?.as_str())?, num(2)?),
        DateFormat::DayMonthNameYear => (num(3)? as i32, month_abbr_to_num(c.get(2)?.as_str())?, num(1)?),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `yy <= pivot` is 20yy, anything above is 19yy.
pub fn expand_two_digit_year(yy: u32, pivot: u32) -> i32 {
    if yy <= pivot {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

fn month_abbr_to_num(name: &str) -> Option<u32> {
    match name.get(..3)?.to_lowercase().as_str() {
        "jan" => Some(1), "feb" => Some(2), "mar" => Some(3), "apr" => Some(4),
        "may" => Some(5), "jun" => Some(6), "jul" => Some(7), "aug" => Some(8),
        "sep" => Some(9), "oct" => Some(10), "nov" => Some(11), "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn date(text: &str) -> Option<NaiveDate> {
        extract_date(&LineList::from_raw(text), today(), 5, 30)
    }

    #[test]
    fn iso_date() {
        assert_eq!(date("AMAZON\nOrder 2024-03-15"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn slash_is_day_first() {
        assert_eq!(date("Starbucks #1123\n05/12/2023"), Some(d(2023, 12, 5)));
    }

    #[test]
    fn dash_is_day_first() {
        assert_eq!(date("04-01-2024"), Some(d(2024, 1, 4)));
    }

    #[test]
    fn short_years_use_pivot() {
        assert_eq!(date("14/02/24"), Some(d(2024, 2, 14)));
        assert_eq!(date("01-06-25"), Some(d(2025, 6, 1)));
    }

    #[test]
    fn pivot_boundary() {
        assert_eq!(expand_two_digit_year(30, 30), 2030);
        assert_eq!(expand_two_digit_year(31, 30), 1931);
        assert_eq!(expand_two_digit_year(0, 30), 2000);
        assert_eq!(expand_two_digit_year(99, 30), 1999);
    }

    #[test]
    fn month_name_forms() {
        assert_eq!(date("Date: Mar 15, 2024"), Some(d(2024, 3, 15)));
        assert_eq!(date("March 15 2024"), Some(d(2024, 3, 15)));
        assert_eq!(date("15 Jan 2024"), Some(d(2024, 1, 15)));
        assert_eq!(date("15 january 2024"), Some(d(2024, 1, 15)));
    }

    #[test]
    fn words_starting_like_months_are_not_dates() {
        assert_eq!(date("Market 12, 2024"), None);
        assert_eq!(date("Decaf 3 2025"), None);
        assert_eq!(date("Sept 3, 2025"), Some(d(2025, 9, 3)));
    }

    #[test]
    fn older_than_window_rejected() {
        assert_eq!(date("2019-03-01"), None);
        assert_eq!(date("01/03/2019"), None);
    }

    #[test]
    fn future_date_rejected() {
        assert_eq!(date("2026-10-19"), None);
        // "30" pivots to 2030, which has not happened yet.
        assert_eq!(date("01/01/30"), None);
        // "31" pivots to 1931, far outside the window.
        assert_eq!(date("01/01/31"), None);
    }

    #[test]
    fn window_edges_are_inclusive() {
        assert_eq!(date("2021-10-18"), Some(d(2021, 10, 18)));
        assert_eq!(date("2026-10-18"), Some(d(2026, 10, 18)));
        assert_eq!(date("2021-10-17"), None);
    }

    #[test]
    fn rejected_candidate_does_not_stop_scan() {
        assert_eq!(date("2018-05-05\nVISIT AGAIN\n10/08/2025"), Some(d(2025, 8, 10)));
    }

    #[test]
    fn later_pattern_on_same_line_tried_after_rejection() {
        assert_eq!(date("Printed 2019-01-01 Sold 14/02/2024"), Some(d(2024, 2, 14)));
    }

    #[test]
    fn impossible_calendar_date_skipped() {
        assert_eq!(date("31/02/2024\n2024-02-29"), Some(d(2024, 2, 29)));
    }

    #[test]
    fn table_order_beats_position_in_line() {
        assert_eq!(date("03/04/2024 2024-05-06"), Some(d(2024, 5, 6)));
    }

    #[test]
    fn first_line_wins_over_later_lines() {
        assert_eq!(date("Jan 2, 2025\n2024-05-06"), Some(d(2025, 1, 2)));
    }

    #[test]
    fn no_date_is_none() {
        assert_eq!(date(""), None);
        assert_eq!(date("Total $5.00"), None);
    }

    #[test]
    fn table_is_in_documented_order() {
        let formats: Vec<_> = DATE_PATTERNS.iter().map(|e| e.format).collect();
        assert_eq!(
            formats,
            vec![
                DateFormat::YearMonthDay,
                DateFormat::DayMonthYear,
                DateFormat::DayMonthShortYear,
                DateFormat::DayMonthYear,
                DateFormat::DayMonthShortYear,
                DateFormat::MonthNameDayYear,
                DateFormat::DayMonthNameYear,
            ]
        );
    }
}
