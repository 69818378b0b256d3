//! Calendar data for a non-leap journal year

use crate::constants::{NUM_MONTHS, PAGE_DAILY_START, PAGE_MONTHLY_START, PAGE_WEEKLY_START};

const DAYS_PER_MONTH: [u8; NUM_MONTHS] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; NUM_MONTHS] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_ABBREVS: [&str; NUM_MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First week number listed next to each month on the main index
const WEEK_STARTS: [u8; NUM_MONTHS] = [1, 6, 10, 14, 19, 23, 27, 32, 36, 40, 45, 49];

/// One past the last week number of the year
const WEEK_END: u8 = 54;

/// A month of the journal year (0 = January)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month(usize);

impl Month {
    /// Create a month from its zero-based index.
    ///
    /// Panics if `index >= 12`; month indexes come from fixed tables.
    pub fn new(index: usize) -> Self {
        assert!(index < NUM_MONTHS, "month index out of range: {index}");
        Self(index)
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (0..NUM_MONTHS).map(Month)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.0]
    }

    pub fn abbrev(self) -> &'static str {
        MONTH_ABBREVS[self.0]
    }

    pub fn days(self) -> u8 {
        DAYS_PER_MONTH[self.0]
    }

    /// Days in all months before this one
    pub fn days_before(self) -> usize {
        DAYS_PER_MONTH[..self.0].iter().map(|&d| d as usize).sum()
    }

    /// Week numbers shown for this month on the main index
    pub fn weeks(self) -> std::ops::Range<u8> {
        let end = WEEK_STARTS.get(self.0 + 1).copied().unwrap_or(WEEK_END);
        WEEK_STARTS[self.0]..end
    }

    /// Page number of this month's timeline page
    pub fn timeline_page(self) -> usize {
        PAGE_MONTHLY_START + self.0 * 2
    }

    /// Page number of this month's action plan page
    pub fn action_plan_page(self) -> usize {
        self.timeline_page() + 1
    }

    /// Page number of the daily log for `day` (1-based) of this month
    pub fn daily_page(self, day: u8) -> usize {
        PAGE_DAILY_START + self.days_before() + (day as usize - 1)
    }
}

/// Page number of the action plan for `week` (1-based)
pub fn weekly_page(week: u8) -> usize {
    PAGE_WEEKLY_START + (week as usize - 1) * 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NUM_DAYS, NUM_WEEKS, PAGE_COLLECTION_START};

    #[test]
    fn test_year_has_365_days() {
        let total: usize = Month::all().map(|m| m.days() as usize).sum();
        assert_eq!(total, NUM_DAYS);
    }

    #[test]
    fn test_weeks_cover_whole_year() {
        let weeks: Vec<u8> = Month::all().flat_map(|m| m.weeks()).collect();
        assert_eq!(weeks.len(), NUM_WEEKS);
        assert_eq!(weeks.first(), Some(&1));
        assert_eq!(weeks.last(), Some(&53));
        assert_eq!(Month::new(11).weeks(), 49..54);
    }

    #[test]
    fn test_daily_pages() {
        assert_eq!(Month::new(0).daily_page(1), PAGE_DAILY_START);
        assert_eq!(Month::new(1).daily_page(1), PAGE_DAILY_START + 31);
        assert_eq!(Month::new(11).daily_page(31), PAGE_COLLECTION_START - 1);
    }

    #[test]
    fn test_monthly_pages() {
        assert_eq!(Month::new(0).timeline_page(), 16);
        assert_eq!(Month::new(0).action_plan_page(), 17);
        assert_eq!(Month::new(11).action_plan_page(), 39);
        assert_eq!(weekly_page(1), 40);
        assert_eq!(weekly_page(53), 144);
    }
}
