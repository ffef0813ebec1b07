//! In-game trophy season window.
//!
//! A season ends on the last Monday of a month at 05:00 UTC and the next one
//! starts at that same instant.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};

/// Hour (UTC) at which the season resets.
const SEASON_RESET_HOUR: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonInfo {
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    /// Year and month of the season end, formatted `YYYY-MM`.
    pub season_id: String,
}

impl SeasonInfo {
    pub fn current() -> Self {
        Self::at(Utc::now())
    }

    /// Season window containing `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let month = first_of_month(now.date_naive());

        let mut season_start = season_end_for(month - Months::new(1));
        let mut season_end = season_end_for(month);

        if season_end <= now {
            season_start = season_end;
            season_end = season_end_for(month + Months::new(1));
        }

        Self {
            season_start,
            season_end,
            season_id: season_end.format("%Y-%m").to_string(),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Reset instant of the season ending in the month starting at `month_start`.
pub fn season_end_for(month_start: NaiveDate) -> DateTime<Utc> {
    let last_day = first_of_month(month_start) + Months::new(1) - Days::new(1);
    let last_monday =
        last_day - Days::new(u64::from(last_day.weekday().num_days_from_monday()));

    Utc.from_utc_datetime(&last_monday.and_time(NaiveTime::default()))
        + Duration::hours(SEASON_RESET_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn season_end_is_last_monday_at_reset_hour() {
        let oct = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        assert_eq!(season_end_for(oct), utc(2026, 10, 26, 5));

        // November 2026 ends on a Monday.
        let nov = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert_eq!(season_end_for(nov), utc(2026, 11, 30, 5));
    }

    #[test]
    fn window_inside_current_month() {
        let info = SeasonInfo::at(utc(2026, 10, 18, 12));

        assert_eq!(info.season_start, utc(2026, 9, 28, 5));
        assert_eq!(info.season_end, utc(2026, 10, 26, 5));
        assert_eq!(info.season_id, "2026-10");
    }

    #[test]
    fn window_advances_after_month_boundary() {
        let info = SeasonInfo::at(utc(2026, 10, 28, 0));

        assert_eq!(info.season_start, utc(2026, 10, 26, 5));
        assert_eq!(info.season_end, utc(2026, 11, 30, 5));
        assert_eq!(info.season_id, "2026-11");
    }

    #[test]
    fn boundary_instant_belongs_to_next_season() {
        let info = SeasonInfo::at(utc(2026, 10, 26, 5));

        assert_eq!(info.season_start, utc(2026, 10, 26, 5));
        assert_eq!(info.season_id, "2026-11");
    }

    #[test]
    fn december_rolls_over_to_next_year() {
        let info = SeasonInfo::at(utc(2026, 12, 30, 0));

        assert_eq!(info.season_start, utc(2026, 12, 28, 5));
        assert_eq!(info.season_id, "2027-01");
    }
}
