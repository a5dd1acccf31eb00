// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand, ValueEnum};
use shiftdesk_domain::{
    DEFAULT_ROTATION_DAYS, DEFAULT_RUN_LENGTH, LogStatus, LogType, Role, ShiftType,
};

/// `ShiftDesk` - shift rosters, activity approvals and messages for a unit
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file, or `:memory:` for a throwaway store
    #[arg(long, env = "SHIFTDESK_DATABASE", default_value = "shiftdesk.db")]
    pub database: String,

    /// Personnel ID to log in as
    #[arg(long, global = true, env = "SHIFTDESK_ID")]
    pub id: Option<String>,

    /// Password to log in with
    #[arg(long, global = true, env = "SHIFTDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Portal to log in through
    #[arg(long, global = true, value_enum, env = "SHIFTDESK_PORTAL")]
    pub portal: Option<Portal>,

    #[command(subcommand)]
    pub command: Command,
}

/// The three login portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Portal {
    /// Senior management
    Root,
    /// Unit administrators
    Admin,
    /// Rank-and-file personnel
    Personnel,
}

impl From<Portal> for Role {
    fn from(portal: Portal) -> Self {
        match portal {
            Portal::Root => Self::Root,
            Portal::Admin => Self::UnitAdmin,
            Portal::Personnel => Self::Personnel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the logged-in account
    Whoami,

    /// Create an account one level below your own
    #[command(visible_alias = "ca")]
    CreateAccount {
        personnel_id: String,
        name: String,
        password: String,
    },

    /// Set one person's shift on one day
    #[command(visible_alias = "as")]
    AssignShift {
        personnel_id: String,
        /// Day as `YYYY-MM-DD`
        date: String,
        /// DAY, NIGHT or REST
        shift_type: ShiftType,
    },

    /// Fill consecutive days with a repeating rotation
    #[command(visible_alias = "ap")]
    ApplyPattern {
        personnel_id: String,
        /// First day as `YYYY-MM-DD`
        start: String,
        /// Number of days to fill
        #[arg(long, default_value_t = DEFAULT_ROTATION_DAYS)]
        duration: u16,
        /// Consecutive day shifts per cycle
        #[arg(long, default_value_t = DEFAULT_RUN_LENGTH)]
        day: u16,
        /// Consecutive night shifts per cycle
        #[arg(long, default_value_t = DEFAULT_RUN_LENGTH)]
        night: u16,
        /// Consecutive rest days per cycle
        #[arg(long, default_value_t = DEFAULT_RUN_LENGTH)]
        rest: u16,
        /// Order of the runs, e.g. `DAY,NIGHT,REST`
        #[arg(long, value_delimiter = ',', default_value = "DAY,NIGHT,REST")]
        order: Vec<ShiftType>,
    },

    /// Submit a fault or reward for approval
    #[command(visible_alias = "log")]
    SubmitLog {
        personnel_id: String,
        /// Day as `YYYY-MM-DD`
        date: String,
        /// FAULT or REWARD
        log_type: LogType,
        /// Signed score change
        #[arg(allow_hyphen_values = true)]
        count: i64,
        reason: String,
        /// Opaque attachment reference
        #[arg(long)]
        attachment: Option<String>,
    },

    /// Approve or reject a pending log
    #[command(visible_alias = "resolve")]
    ResolveLog {
        log_id: String,
        /// APPROVED or REJECTED
        decision: LogStatus,
    },

    /// Send a message to one person, or to everyone with `ALL`
    Send {
        to: String,
        #[arg(default_value = "")]
        text: String,
        /// Opaque attachment reference
        #[arg(long)]
        attachment: Option<String>,
    },

    /// Acknowledge a message
    MarkRead { message_id: String },

    /// List accounts holding a role
    Users {
        /// SUPER_ADMIN, ADMIN or USER
        role: Role,
    },

    /// List shifts, your own by default
    Shifts { personnel_id: Option<String> },

    /// Show your inbox
    Inbox,

    /// Show activity logs awaiting approval
    Pending,

    /// Show approved activity and score, your own by default
    Performance { personnel_id: Option<String> },

    /// Show every person's shift on a day, today by default
    Roster {
        #[arg(long)]
        date: Option<String>,
    },

    /// Show a month calendar, your own and the current month by default
    Month {
        personnel_id: Option<String>,
        #[arg(long, requires = "month")]
        year: Option<u16>,
        #[arg(long, requires = "year")]
        month: Option<u8>,
    },
}
