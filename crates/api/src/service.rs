// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The service facade.
//!
//! [`ShiftDesk`] owns the [`Store`] and the [`Clock`]. Every mutation builds
//! a [`Command`], runs it through `apply` against the current aggregate,
//! persists the whole result and only then returns. Views read the current
//! aggregate and never mutate it.

use shiftdesk::{AppData, Command, TransitionResult, apply, queries};
use shiftdesk_audit::{Actor, AuditEvent};
use shiftdesk_domain::{
    Clock, DateKey, LogStatus, LogType, PersonnelId, Recipient, Role, ShiftPattern, ShiftType,
    current_year_month, month_name, today,
};
use shiftdesk_persistence::{KeyValueStore, Store};
use tracing::info;

use crate::auth::authenticate;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ActivityLogInfo, CommandResponse, DayCellInfo, InboxResponse, MessageInfo, MonthViewResponse,
    PerformanceResponse, RosterEntryInfo, RosterResponse, ShiftInfo, UserInfo,
};

/// Request to generate a rotation for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPatternRequest {
    pub personnel_id: String,
    /// First day, `YYYY-MM-DD`.
    pub start: String,
    pub duration_days: u16,
    pub pattern: ShiftPattern,
}

/// Request to record a fault or reward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLogRequest {
    pub personnel_id: String,
    pub date: String,
    pub log_type: LogType,
    pub count: i64,
    pub reason: String,
    pub attachment: Option<String>,
}

/// The roster service.
pub struct ShiftDesk<K: KeyValueStore, C: Clock> {
    store: Store<K>,
    clock: C,
}

impl<K: KeyValueStore, C: Clock> ShiftDesk<K, C> {
    /// Loads the aggregate from `backend`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn open(backend: K, clock: C) -> Result<Self, ApiError> {
        let store: Store<K> = Store::load(backend, &clock)?;
        Ok(Self { store, clock })
    }

    /// The current aggregate.
    #[must_use]
    pub const fn data(&self) -> &AppData {
        self.store.data()
    }

    /// The storage backend.
    #[must_use]
    pub const fn backend(&self) -> &K {
        self.store.backend()
    }

    /// Logs in through the `portal` for `role`.
    ///
    /// # Errors
    ///
    /// Returns an error if no account matches.
    pub fn login(&self, personnel_id: &str, password: &str, portal: Role) -> Result<Actor, ApiError> {
        authenticate(self.store.data(), personnel_id, password, portal)
    }

    /// Runs `command` as `actor`, persists the result and returns the audit
    /// event.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is rejected or the aggregate cannot be
    /// persisted. Either way the current aggregate is unchanged.
    pub fn execute(&mut self, actor: &Actor, command: Command) -> Result<AuditEvent, ApiError> {
        let now: i64 = self.clock.now_millis();
        let result: TransitionResult = apply(self.store.data(), command, actor.clone(), now)
            .map_err(translate_core_error)?;

        self.store.replace(result.new_state)?;

        let event: AuditEvent = result.audit_event;
        info!(
            actor = %event.actor,
            action = %event.action.name,
            details = event.action.details.as_deref().unwrap_or(""),
            before = %event.before.data,
            after = %event.after.data,
            timestamp = event.timestamp,
            "Committed command"
        );
        Ok(event)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Creates an account. Root creates unit admins; unit admins create
    /// personnel.
    ///
    /// # Errors
    ///
    /// Returns an error if the role pairing is not allowed, a field is empty,
    /// or the personnel ID is taken.
    pub fn create_account(
        &mut self,
        actor: &Actor,
        personnel_id: &str,
        name: &str,
        password: &str,
        role: Role,
    ) -> Result<CommandResponse, ApiError> {
        let command: Command = Command::CreateAccount {
            personnel_id: PersonnelId::new(personnel_id),
            name: name.to_string(),
            password: password.to_string(),
            role,
        };
        let event: AuditEvent = self.execute(actor, command)?;
        Ok(CommandResponse::from_audit(
            &event,
            Some(personnel_id.to_string()),
        ))
    }

    /// Sets the shift for one person on one day.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not edit shifts or the date is invalid.
    pub fn assign_shift(
        &mut self,
        actor: &Actor,
        personnel_id: &str,
        date: &str,
        shift_type: ShiftType,
    ) -> Result<CommandResponse, ApiError> {
        let command: Command = Command::AssignShift {
            personnel_id: PersonnelId::new(personnel_id),
            date: date.to_string(),
            shift_type,
        };
        let event: AuditEvent = self.execute(actor, command)?;
        Ok(CommandResponse::from_audit(&event, None))
    }

    /// Fills consecutive days with a repeating rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not edit shifts, the start date is
    /// invalid, or the pattern or duration is empty.
    pub fn apply_shift_pattern(
        &mut self,
        actor: &Actor,
        request: ApplyPatternRequest,
    ) -> Result<CommandResponse, ApiError> {
        let command: Command = Command::ApplyShiftPattern {
            personnel_id: PersonnelId::new(&request.personnel_id),
            start: request.start,
            duration_days: request.duration_days,
            pattern: request.pattern,
        };
        let event: AuditEvent = self.execute(actor, command)?;
        Ok(CommandResponse::from_audit(&event, None))
    }

    /// Submits a pending fault or reward for root approval.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a unit admin or a field is invalid.
    pub fn submit_activity_log(
        &mut self,
        actor: &Actor,
        request: SubmitLogRequest,
    ) -> Result<CommandResponse, ApiError> {
        let command: Command = Command::SubmitActivityLog {
            personnel_id: PersonnelId::new(&request.personnel_id),
            date: request.date,
            log_type: request.log_type,
            count: request.count,
            reason: request.reason,
            attachment: request.attachment,
        };
        let event: AuditEvent = self.execute(actor, command)?;
        let id: Option<String> = self
            .store
            .data()
            .activity_logs()
            .last()
            .map(|log| log.id.clone());
        Ok(CommandResponse::from_audit(&event, id))
    }

    /// Approves or rejects a pending activity log.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not root, the log does not exist, or
    /// it has already been resolved.
    pub fn resolve_activity_log(
        &mut self,
        actor: &Actor,
        log_id: &str,
        decision: LogStatus,
    ) -> Result<CommandResponse, ApiError> {
        let command: Command = Command::ResolveActivityLog {
            log_id: log_id.to_string(),
            decision,
        };
        let event: AuditEvent = self.execute(actor, command)?;
        Ok(CommandResponse::from_audit(&event, Some(log_id.to_string())))
    }

    /// Sends a message to one person, or to everyone with `ALL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not send messages or the message is
    /// empty.
    pub fn send_message(
        &mut self,
        actor: &Actor,
        to: &str,
        text: &str,
        attachment: Option<String>,
    ) -> Result<CommandResponse, ApiError> {
        let command: Command = Command::SendMessage {
            to: Recipient::from(to),
            text: text.to_string(),
            attachment,
        };
        let event: AuditEvent = self.execute(actor, command)?;
        let id: Option<String> = self
            .store
            .data()
            .messages()
            .last()
            .map(|message| message.id.clone());
        Ok(CommandResponse::from_audit(&event, id))
    }

    /// Acknowledges a message. Repeating it changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the message does not exist or is not visible to
    /// the actor.
    pub fn mark_read(&mut self, actor: &Actor, message_id: &str) -> Result<CommandResponse, ApiError> {
        let command: Command = Command::MarkRead {
            message_id: message_id.to_string(),
        };
        let event: AuditEvent = self.execute(actor, command)?;
        Ok(CommandResponse::from_audit(
            &event,
            Some(message_id.to_string()),
        ))
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Accounts holding `role`.
    #[must_use]
    pub fn users_with_role(&self, role: Role) -> Vec<UserInfo> {
        queries::users_with_role(self.store.data(), role)
            .into_iter()
            .map(UserInfo::from)
            .collect()
    }

    /// One person's shifts, sorted by date.
    #[must_use]
    pub fn shifts_for(&self, personnel_id: &str) -> Vec<ShiftInfo> {
        let mut records = queries::shifts_for(self.store.data(), &PersonnelId::new(personnel_id));
        records.sort_by_key(|record| record.date);
        records.into_iter().map(ShiftInfo::from).collect()
    }

    /// The shift one person has on one day.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is not a valid date key.
    pub fn shift_on(&self, personnel_id: &str, date: &str) -> Result<Option<ShiftType>, ApiError> {
        let date: DateKey = DateKey::parse(date).map_err(translate_domain_error)?;
        Ok(
            queries::shift_on(self.store.data(), &PersonnelId::new(personnel_id), &date)
                .map(|record| record.shift_type),
        )
    }

    /// Messages visible to `reader`, oldest first, with the unread count.
    #[must_use]
    pub fn inbox_for(&self, reader: &str) -> InboxResponse {
        let reader: PersonnelId = PersonnelId::new(reader);
        let data: &AppData = self.store.data();
        InboxResponse {
            unread: queries::unread_count_for(data, &reader),
            messages: queries::inbox_for(data, &reader)
                .into_iter()
                .map(|message| MessageInfo::for_reader(message, &reader))
                .collect(),
        }
    }

    /// Directly-addressed messages `reader` has not acknowledged.
    #[must_use]
    pub fn unread_count_for(&self, reader: &str) -> usize {
        queries::unread_count_for(self.store.data(), &PersonnelId::new(reader))
    }

    /// The root approval queue, oldest first.
    #[must_use]
    pub fn pending_logs(&self) -> Vec<ActivityLogInfo> {
        queries::pending_logs(self.store.data())
            .into_iter()
            .map(ActivityLogInfo::from)
            .collect()
    }

    /// Approved logs for one person with their summed score.
    #[must_use]
    pub fn performance_for(&self, personnel_id: &str) -> PerformanceResponse {
        let logs = queries::approved_logs_for(self.store.data(), &PersonnelId::new(personnel_id));
        PerformanceResponse {
            personnel_id: personnel_id.to_string(),
            score: logs.iter().map(|log| log.count).sum(),
            logs: logs.into_iter().map(ActivityLogInfo::from).collect(),
        }
    }

    /// Every personnel account with its shift on `date`, or today.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is not a valid date key.
    pub fn roster_for(&self, date: Option<&str>) -> Result<RosterResponse, ApiError> {
        let date: DateKey = match date {
            Some(raw) => DateKey::parse(raw).map_err(translate_domain_error)?,
            None => today(&self.clock),
        };
        Ok(RosterResponse {
            date: date.to_string(),
            entries: queries::roster_for(self.store.data(), &date)
                .iter()
                .map(RosterEntryInfo::from)
                .collect(),
        })
    }

    /// One person's calendar for a month, defaulting to the current month.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is out of range.
    pub fn month_view(
        &self,
        personnel_id: &str,
        year_month: Option<(u16, u8)>,
    ) -> Result<MonthViewResponse, ApiError> {
        let (year, month) = year_month.unwrap_or_else(|| current_year_month(&self.clock));
        let cells = queries::month_view(
            self.store.data(),
            &PersonnelId::new(personnel_id),
            year,
            month,
        )
        .map_err(translate_domain_error)?;

        Ok(MonthViewResponse {
            personnel_id: personnel_id.to_string(),
            year,
            month,
            month_name: month_name(month).unwrap_or_default().to_string(),
            days: cells.iter().map(DayCellInfo::from).collect(),
        })
    }
}
