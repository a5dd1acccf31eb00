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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod request_response;
mod service;

#[cfg(test)]
mod tests;

pub use auth::{actor_for, authenticate};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    ActivityLogInfo, CommandResponse, DayCellInfo, InboxResponse, MessageInfo, MonthViewResponse,
    PerformanceResponse, RosterEntryInfo, RosterResponse, ShiftInfo, UserInfo,
};
pub use service::{ApplyPatternRequest, ShiftDesk, SubmitLogRequest};
