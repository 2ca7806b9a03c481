//! Date rule evaluation.
//!
//! A holiday rule pins a calendar day for a given year in one of four ways:
//! a fixed month/day, an offset from Easter Sunday, the nth weekday of a
//! month, or the last weekday of a month. Rules can additionally carry an
//! observed-day shift that produces a compensatory entry when the computed
//! date falls on a weekend.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::HolidayKind;

/// How a rule's calendar day is derived for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Same month/day every year.
    Fixed { month: u32, day: u32 },
    /// Offset in days from Easter Sunday (Good Friday = -2, Easter Monday =
    /// +1, Ascension = +39, Whit Monday = +50, Corpus Christi = +60).
    EasterOffset { days: i64 },
    /// The nth given weekday of a month (1-based).
    NthWeekday { month: u32, weekday: Weekday, nth: u8 },
    /// The last given weekday of a month.
    LastWeekday { month: u32, weekday: Weekday },
}

impl DateRule {
    /// Resolve the rule to a concrete date for `year`.
    ///
    /// Returns `None` for degenerate table entries (e.g. Feb 29 in a
    /// non-leap year) rather than panicking.
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            Self::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Self::EasterOffset { days } => Some(easter_sunday(year)? + Duration::days(days)),
            Self::NthWeekday {
                month,
                weekday,
                nth,
            } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let offset =
                    (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday())
                        % 7;
                let date = first + Duration::days(offset as i64 + 7 * (nth as i64 - 1));
                // nth may overflow the month
                (date.month() == month).then_some(date)
            }
            Self::LastWeekday { month, weekday } => {
                let last = last_day_of_month(year, month)?;
                let offset =
                    (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday())
                        % 7;
                Some(last - Duration::days(offset as i64))
            }
        }
    }
}

/// Easter Sunday for `year`, via Oudin's algorithm.
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next - Duration::days(1))
}

/// Observed-day handling when the computed date falls on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// No compensatory day.
    None,
    /// Sat/Sun roll forward to the following Monday (UK-style bank holiday
    /// substitution).
    NextMonday,
    /// Sat observes on the preceding Friday, Sun on the following Monday
    /// (US federal style).
    NearestWeekday,
}

impl Shift {
    /// The compensatory date for `date`, if the shift applies.
    pub fn observed(&self, date: NaiveDate) -> Option<NaiveDate> {
        match (self, date.weekday()) {
            (Self::None, _) => None,
            (Self::NextMonday, Weekday::Sat) => Some(date + Duration::days(2)),
            (Self::NextMonday, Weekday::Sun) => Some(date + Duration::days(1)),
            (Self::NearestWeekday, Weekday::Sat) => Some(date - Duration::days(1)),
            (Self::NearestWeekday, Weekday::Sun) => Some(date + Duration::days(1)),
            _ => None,
        }
    }
}

/// One rule-table entry.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRule {
    pub name: &'static str,
    pub rule: DateRule,
    pub kind: HolidayKind,
    pub shift: Shift,
}

impl HolidayRule {
    pub const fn new(name: &'static str, rule: DateRule, kind: HolidayKind) -> Self {
        Self {
            name,
            rule,
            kind,
            shift: Shift::None,
        }
    }

    pub const fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = shift;
        self
    }
}

/// Fixed-date public holiday.
pub const fn public(name: &'static str, month: u32, day: u32) -> HolidayRule {
    HolidayRule::new(name, DateRule::Fixed { month, day }, HolidayKind::Public)
}

/// Fixed-date holiday of an arbitrary kind.
pub const fn fixed(name: &'static str, month: u32, day: u32, kind: HolidayKind) -> HolidayRule {
    HolidayRule::new(name, DateRule::Fixed { month, day }, kind)
}

/// Easter-relative holiday.
pub const fn easter(name: &'static str, days: i64, kind: HolidayKind) -> HolidayRule {
    HolidayRule::new(name, DateRule::EasterOffset { days }, kind)
}

/// Nth-weekday-of-month holiday.
pub const fn nth_weekday(
    name: &'static str,
    month: u32,
    weekday: Weekday,
    nth: u8,
    kind: HolidayKind,
) -> HolidayRule {
    HolidayRule::new(
        name,
        DateRule::NthWeekday {
            month,
            weekday,
            nth,
        },
        kind,
    )
}

/// Last-weekday-of-month holiday.
pub const fn last_weekday(
    name: &'static str,
    month: u32,
    weekday: Weekday,
    kind: HolidayKind,
) -> HolidayRule {
    HolidayRule::new(name, DateRule::LastWeekday { month, weekday }, kind)
}
