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

mod apply;
mod authorization;
mod command;
mod error;
pub mod queries;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use authorization::authorize;
pub use command::Command;
pub use error::{CoreError, ErrorKind};
pub use queries::{DayCell, RosterEntry};
pub use state::{
    AppData, SEED_ROOT_ID, SEED_ROOT_NAME, SEED_ROOT_PASSWORD, TransitionResult, seed_root_user,
};
