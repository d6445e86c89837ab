use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 17;
pub const BOOKING_HORIZON_DAYS: i64 = 30;

/// Whether a consultation can be booked on `date`, seen from `today`.
/// Weekdays only, strictly in the future, within the rolling booking
/// horizon. The backend remains the authority on real conflicts.
pub fn is_date_available(today: NaiveDate, date: NaiveDate) -> bool {
    let weekday = date.weekday();
    if weekday == Weekday::Sat || weekday == Weekday::Sun {
        return false;
    }

    let days_ahead = (date - today).num_days();
    (1..=BOOKING_HORIZON_DAYS).contains(&days_ahead)
}

/// The fixed half-hour slot labels offered for every bookable day,
/// 09:00 through 17:00 inclusive.
pub fn time_slots() -> Vec<String> {
    let mut slots = Vec::new();
    for hour in OPENING_HOUR..=CLOSING_HOUR {
        slots.push(format!("{hour:02}:00"));
        if hour < CLOSING_HOUR {
            slots.push(format!("{hour:02}:30"));
        }
    }
    slots
}

pub fn is_valid_slot(time: &str) -> bool {
    time_slots().iter().any(|s| s == time)
}

/// One month of the booking calendar. Navigation wraps across year
/// boundaries: December forward rolls into January of the next year,
/// January back rolls into December of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        (self.next().first_day() - self.first_day()).num_days() as u32
    }

    /// Empty grid cells before day 1 in a Monday-first calendar.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_monday()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        let first = self.first_day();
        (0..self.days_in_month())
            .filter_map(|offset| first.checked_add_days(Days::new(offset as u64)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekend_unavailable() {
        // 2024-03-06 is a Wednesday; 03-09/03-10 are Sat/Sun
        let today = d("2024-03-06");
        assert!(!is_date_available(today, d("2024-03-09")));
        assert!(!is_date_available(today, d("2024-03-10")));
    }

    #[test]
    fn test_next_weekday_available() {
        let today = d("2024-03-06");
        assert!(is_date_available(today, d("2024-03-07")));
        assert!(is_date_available(today, d("2024-03-08")));
    }

    #[test]
    fn test_today_and_past_unavailable() {
        let today = d("2024-03-06");
        assert!(!is_date_available(today, d("2024-03-06")));
        assert!(!is_date_available(today, d("2024-03-05")));
        assert!(!is_date_available(today, d("2023-12-29")));
    }

    #[test]
    fn test_horizon_boundaries() {
        let today = d("2024-03-06");
        // +30 days lands on Friday 2024-04-05, the last bookable day
        assert!(is_date_available(today, d("2024-04-05")));
        // +35 days is out of the horizon even though it is a Wednesday
        assert!(!is_date_available(today, d("2024-04-10")));
    }

    #[test]
    fn test_slot_list_shape() {
        let slots = time_slots();
        assert_eq!(slots.len(), 17);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.get(1).map(String::as_str), Some("09:30"));
        assert_eq!(slots.last().map(String::as_str), Some("17:00"));
    }

    #[test]
    fn test_valid_slot() {
        assert!(is_valid_slot("09:00"));
        assert!(is_valid_slot("16:30"));
        assert!(is_valid_slot("17:00"));
        assert!(!is_valid_slot("17:30"));
        assert!(!is_valid_slot("08:30"));
        assert!(!is_valid_slot("10:15"));
    }

    #[test]
    fn test_month_navigation_wraps_year() {
        let dec = MonthView::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthView { year: 2025, month: 1 });

        let jan = MonthView::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthView { year: 2024, month: 12 });
    }

    #[test]
    fn test_month_navigation_within_year() {
        let mar = MonthView::new(2024, 3).unwrap();
        assert_eq!(mar.next(), MonthView { year: 2024, month: 4 });
        assert_eq!(mar.prev(), MonthView { year: 2024, month: 2 });
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(MonthView::new(2024, 0).is_none());
        assert!(MonthView::new(2024, 13).is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthView::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthView::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthView::new(2024, 12).unwrap().days_in_month(), 31);
        assert_eq!(MonthView::new(2024, 4).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_leading_blanks_monday_first() {
        // 2024-03-01 is a Friday → four blanks (Mon-Thu)
        assert_eq!(MonthView::new(2024, 3).unwrap().leading_blanks(), 4);
        // 2024-04-01 is a Monday → none
        assert_eq!(MonthView::new(2024, 4).unwrap().leading_blanks(), 0);
        // 2024-12-01 is a Sunday → six
        assert_eq!(MonthView::new(2024, 12).unwrap().leading_blanks(), 6);
    }

    #[test]
    fn test_dates_cover_whole_month() {
        let view = MonthView::new(2024, 3).unwrap();
        let dates = view.dates();
        assert_eq!(dates.len(), 31);
        assert_eq!(dates.first().copied(), Some(d("2024-03-01")));
        assert_eq!(dates.last().copied(), Some(d("2024-03-31")));
    }
}
