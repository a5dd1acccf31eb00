// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repeating shift rotations.
//!
//! A rotation is a run of day shifts, a run of night shifts and a run of
//! rest days, in a configurable order, repeated for as long as needed.

use crate::error::DomainError;
use crate::types::{DateKey, ShiftType};
use serde::{Deserialize, Serialize};

/// Default number of consecutive days per shift type.
pub const DEFAULT_RUN_LENGTH: u16 = 4;

/// Default number of days a rotation is applied for.
pub const DEFAULT_ROTATION_DAYS: u16 = 30;

/// A repeating rotation of day, night and rest runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPattern {
    /// Consecutive day shifts per cycle.
    pub day: u16,
    /// Consecutive night shifts per cycle.
    pub night: u16,
    /// Consecutive rest days per cycle.
    pub rest: u16,
    /// Order in which the runs occur within a cycle.
    pub order: [ShiftType; 3],
}

impl Default for ShiftPattern {
    fn default() -> Self {
        Self {
            day: DEFAULT_RUN_LENGTH,
            night: DEFAULT_RUN_LENGTH,
            rest: DEFAULT_RUN_LENGTH,
            order: [ShiftType::Day, ShiftType::Night, ShiftType::Rest],
        }
    }
}

impl ShiftPattern {
    /// Returns the run length configured for `shift_type`.
    #[must_use]
    pub const fn run_length(&self, shift_type: ShiftType) -> u16 {
        match shift_type {
            ShiftType::Day => self.day,
            ShiftType::Night => self.night,
            ShiftType::Rest => self.rest,
        }
    }

    /// Expands one full cycle into a per-day sequence.
    #[must_use]
    pub fn cycle(&self) -> Vec<ShiftType> {
        self.order
            .iter()
            .flat_map(|shift_type| {
                std::iter::repeat_n(*shift_type, usize::from(self.run_length(*shift_type)))
            })
            .collect()
    }

    /// Validates that the pattern produces at least one shift per cycle and
    /// that each shift type appears exactly once in the order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order repeats a shift type or every run is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        let [a, b, c] = self.order;
        if a == b || b == c || a == c {
            return Err(DomainError::InvalidPattern(String::from(
                "order must list DAY, NIGHT and REST exactly once",
            )));
        }
        if self.day == 0 && self.night == 0 && self.rest == 0 {
            return Err(DomainError::InvalidPattern(String::from(
                "at least one run must be longer than zero days",
            )));
        }
        Ok(())
    }

    /// Lays the rotation over `duration_days` consecutive days starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid or the duration is zero.
    pub fn schedule(
        &self,
        start: DateKey,
        duration_days: u16,
    ) -> Result<Vec<(DateKey, ShiftType)>, DomainError> {
        self.validate()?;
        if duration_days == 0 {
            return Err(DomainError::InvalidPattern(String::from(
                "duration must be at least one day",
            )));
        }

        let cycle: Vec<ShiftType> = self.cycle();
        let mut date: DateKey = start;
        let mut schedule: Vec<(DateKey, ShiftType)> =
            Vec::with_capacity(usize::from(duration_days));
        for shift_type in cycle.iter().cycle().take(usize::from(duration_days)) {
            schedule.push((date, *shift_type));
            date = date.next_day();
        }
        Ok(schedule)
    }
}
