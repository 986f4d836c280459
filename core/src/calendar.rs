use chrono::{Datelike, NaiveDate};

/// One calendar row, Monday first. Days outside the month are `None`.
pub type Week = [Option<NaiveDate>; 7];

/// Weeks covering the given month.
pub fn month_grid(year: i32, month: u32) -> Vec<Week> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut slot = offset;
    for day in 1..=days {
        week[slot] = NaiveDate::from_ymd_opt(year, month, day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = shift_month(year, month, 1);
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Move `delta` months from `year`/`month`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// Whether `day` lies inside the optional inclusive range.
pub fn is_selectable(day: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.map_or(true, |min| day >= min) && max.map_or(true, |max| day <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2021, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2021, 12), 31);
        assert_eq!(days_in_month(2021, 4), 30);
    }

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(2021, 12, 1), (2022, 1));
        assert_eq!(shift_month(2021, 1, -1), (2020, 12));
        assert_eq!(shift_month(2021, 3, 0), (2021, 3));
        assert_eq!(shift_month(2021, 3, -15), (2019, 12));
    }

    #[test]
    fn test_month_grid_starts_on_monday() {
        // March 2021 starts on a Monday.
        let grid = month_grid(2021, 3);
        assert_eq!(grid[0][0], Some(ymd(2021, 3, 1)));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[4][2], Some(ymd(2021, 3, 31)));
        assert_eq!(grid[4][3], None);
    }

    #[test]
    fn test_month_grid_leading_blanks() {
        // August 2021 starts on a Sunday.
        let grid = month_grid(2021, 8);
        assert!(grid[0][..6].iter().all(Option::is_none));
        assert_eq!(grid[0][6], Some(ymd(2021, 8, 1)));
        let count = grid.iter().flatten().flatten().count();
        assert_eq!(count, 31);
    }

    #[test]
    fn test_month_grid_invalid_month() {
        assert!(month_grid(2021, 13).is_empty());
    }

    #[test]
    fn test_is_selectable() {
        let min = Some(ymd(2021, 3, 10));
        let max = Some(ymd(2021, 3, 20));
        assert!(is_selectable(ymd(2021, 3, 10), min, max));
        assert!(is_selectable(ymd(2021, 3, 20), min, max));
        assert!(!is_selectable(ymd(2021, 3, 9), min, max));
        assert!(!is_selectable(ymd(2021, 3, 21), min, max));
        assert!(is_selectable(ymd(1999, 1, 1), None, None));
    }
}
