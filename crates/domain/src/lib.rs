// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod calendar;
mod error;
mod rotation;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{
    Clock, FixedClock, LEAP_YEARS, MONTH_NAMES, SystemClock, current_year_month, days_in_month,
    gregorian_to_solar, holiday, month_name, today,
};
pub use error::DomainError;
pub use rotation::{DEFAULT_ROTATION_DAYS, DEFAULT_RUN_LENGTH, ShiftPattern};
pub use types::{
    ActivityLog, BROADCAST_RECIPIENT, DateKey, LogStatus, LogType, Message, PersonnelId,
    Recipient, Role, ShiftRecord, ShiftType, User,
};
pub use validation::{
    validate_account_fields, validate_message, validate_personnel_id,
    validate_personnel_id_unique,
};
