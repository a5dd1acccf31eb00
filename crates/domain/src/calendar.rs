// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Simplified solar-hijri calendar used for shift scheduling.
//!
//! Months 1 through 6 have 31 days, months 7 through 11 have 30 days and
//! month 12 has 29 days, or 30 in the designated leap years. This is the
//! month model every date key and calendar view is validated against; it is
//! intentionally not an astronomically exact calendar.
//!
//! The wall clock enters the system only through [`Clock`].

use crate::types::DateKey;
use time::{OffsetDateTime, UtcOffset, macros::offset};

/// Years in which the final month has 30 days instead of 29.
pub const LEAP_YEARS: [u16; 3] = [1403, 1408, 1412];

/// Display names of the twelve months, in order.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// The local offset the calendar is anchored to (Iran Standard Time).
pub const LOCAL_OFFSET: UtcOffset = offset!(+3:30);

/// Returns the number of days in a month of the simplified calendar.
///
/// `month` must be in `1..=12`.
#[must_use]
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ if LEAP_YEARS.contains(&year) => 30,
        _ => 29,
    }
}

/// Returns the display name of a month, or `None` when out of range.
#[must_use]
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Returns the name of the fixed holiday falling on `month`/`day`, if any.
#[must_use]
pub const fn holiday(month: u8, day: u8) -> Option<&'static str> {
    match (month, day) {
        (1, 1..=4) => Some("نوروز"),
        (1, 12) => Some("روز جمهوری اسلامی"),
        (1, 13) => Some("روز طبیعت"),
        _ => None,
    }
}

/// Source of the current wall-clock time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;

    /// Returns the current instant as Unix milliseconds.
    fn now_millis(&self) -> i64 {
        let millis: i128 = self.now().unix_timestamp_nanos() / 1_000_000;
        i64::try_from(millis).unwrap_or(i64::MAX)
    }
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Converts a Gregorian date to `(year, month, day)` in the solar-hijri calendar.
///
/// The month and day come from the real calendar, so the day may exceed the
/// simplified month length in the final month of some years.
#[must_use]
pub fn gregorian_to_solar(date: time::Date) -> (i32, u8, u8) {
    const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let gy: i64 = i64::from(date.year());
    let gm: usize = usize::from(u8::from(date.month()));
    let gd: i64 = i64::from(date.day());

    let gy2: i64 = if gm > 2 { gy + 1 } else { gy };
    let mut days: i64 = 355_666 + 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + gd
        + CUMULATIVE_DAYS[gm - 1];

    let mut jy: i64 = -1595 + 33 * days.div_euclid(12_053);
    days = days.rem_euclid(12_053);
    jy += 4 * days.div_euclid(1461);
    days = days.rem_euclid(1461);
    if days > 365 {
        jy += (days - 1).div_euclid(365);
        days = (days - 1).rem_euclid(365);
    }

    let (jm, jd): (i64, i64) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (
        i32::try_from(jy).unwrap_or(i32::MAX),
        u8::try_from(jm).unwrap_or(12),
        u8::try_from(jd).unwrap_or(1),
    )
}

/// Returns today's date key in the simplified calendar.
///
/// A real-calendar day that does not exist in the simplified month (day 30
/// of the final month outside the designated leap years) maps to the last
/// day of that month.
#[must_use]
pub fn today(clock: &dyn Clock) -> DateKey {
    let local: OffsetDateTime = clock.now().to_offset(LOCAL_OFFSET);
    let (year, month, day): (i32, u8, u8) = gregorian_to_solar(local.date());
    let year: u16 = u16::try_from(year).unwrap_or(0);
    let day: u8 = day.min(days_in_month(year, month));
    DateKey::from_calendar(year, month, day)
}

/// Returns the current `(year, month)` in the simplified calendar.
#[must_use]
pub fn current_year_month(clock: &dyn Clock) -> (u16, u8) {
    let key: DateKey = today(clock);
    (key.year(), key.month())
}
