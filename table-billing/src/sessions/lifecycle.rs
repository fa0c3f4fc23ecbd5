//! Session lifecycle: open, pause, resume
//!
//! Release and close belong to [`TableFeeLedger`](crate::checkout::TableFeeLedger).

use shared::Timestamp;
use shared::models::{NewTableSession, SessionStatus, TableSession};
use shared::types::MILLIS_PER_SECOND;
use shared::util::snowflake_id;

use super::error::SessionError;
use crate::billing::validate_new_session;

fn require_active(session: &TableSession) -> Result<(), SessionError> {
    if session.status != SessionStatus::Active {
        return Err(SessionError::NotActive {
            session_id: session.id,
            status: session.status,
        });
    }
    Ok(())
}

/// Open a session; timing starts at `at`
pub fn open_session(input: NewTableSession, at: Timestamp) -> Result<TableSession, SessionError> {
    validate_new_session(&input)?;

    let session = TableSession {
        id: snowflake_id(),
        table_id: input.table_id,
        table_name: input.table_name,
        opened_at: at,
        paused_at: None,
        accumulated_paused_secs: 0,
        hourly_rate: input.hourly_rate,
        billing_mode: input.billing_mode,
        is_money_game: input.is_money_game,
        bet_amount: input.bet_amount,
        has_prepaid_credit: input.has_prepaid_credit,
        status: SessionStatus::Active,
    };

    tracing::info!(
        session_id = session.id,
        table_id = session.table_id,
        mode = ?session.billing_mode,
        "Table session opened"
    );
    Ok(session)
}

/// Suspend the clock at `at`
pub fn pause(session: &mut TableSession, at: Timestamp) -> Result<(), SessionError> {
    require_active(session)?;
    if session.is_paused() {
        tracing::warn!(session_id = session.id, "Pause rejected: already paused");
        return Err(SessionError::AlreadyPaused(session.id));
    }

    session.paused_at = Some(at.max(session.opened_at));
    tracing::debug!(session_id = session.id, paused_at = ?session.paused_at, "Session paused");
    Ok(())
}

/// Restart the clock at `at`, banking the suspended seconds
///
/// Returns the seconds added to `accumulated_paused_secs`.
pub fn resume(session: &mut TableSession, at: Timestamp) -> Result<i64, SessionError> {
    require_active(session)?;
    let Some(paused_at) = session.paused_at else {
        tracing::warn!(session_id = session.id, "Resume rejected: not paused");
        return Err(SessionError::NotPaused(session.id));
    };

    let banked = at.saturating_sub(paused_at).max(0) / MILLIS_PER_SECOND;
    session.accumulated_paused_secs = session.accumulated_paused_secs.saturating_add(banked);
    session.paused_at = None;

    tracing::debug!(
        session_id = session.id,
        banked_secs = banked,
        total_paused_secs = session.accumulated_paused_secs,
        "Session resumed"
    );
    Ok(banked)
}

/// Stop the clock for good (release/close); keeps an existing pause point
pub(crate) fn freeze(session: &mut TableSession, at: Timestamp) {
    if session.paused_at.is_none() {
        session.paused_at = Some(at.max(session.opened_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{BillingError, compute_elapsed_minutes, compute_table_fee};
    use shared::models::BillingMode;

    const T0: i64 = 1_735_000_000_000;
    const MINUTE: i64 = 60_000;

    fn new_session() -> NewTableSession {
        NewTableSession {
            table_id: 4,
            table_name: "Pool 4".to_string(),
            hourly_rate: 100.0,
            billing_mode: BillingMode::OpenEnded,
            is_money_game: false,
            bet_amount: None,
            has_prepaid_credit: false,
        }
    }

    #[test]
    fn test_open_session() {
        let session = open_session(new_session(), T0).unwrap();
        assert!(session.id > 0);
        assert_eq!(session.opened_at, T0);
        assert_eq!(session.status, SessionStatus::Active);
        assert!(!session.is_paused());
        assert_eq!(session.accumulated_paused_secs, 0);
    }

    #[test]
    fn test_open_session_rejects_invalid_rate() {
        let mut input = new_session();
        input.hourly_rate = f64::INFINITY;
        assert!(matches!(
            open_session(input, T0),
            Err(SessionError::Invalid(BillingError::NotFinite { .. }))
        ));
    }

    #[test]
    fn test_pause_resume_excludes_paused_time() {
        // Paused for 10 minutes out of a 40-minute wall-clock span
        let mut session = open_session(new_session(), T0).unwrap();
        pause(&mut session, T0 + 15 * MINUTE).unwrap();
        assert_eq!(compute_elapsed_minutes(&session, T0 + 22 * MINUTE), 15);

        let banked = resume(&mut session, T0 + 25 * MINUTE).unwrap();
        assert_eq!(banked, 600);
        assert_eq!(compute_elapsed_minutes(&session, T0 + 40 * MINUTE), 30);
        assert_eq!(compute_table_fee(&session, T0 + 40 * MINUTE), 50.0);
    }

    #[test]
    fn test_repeated_pauses_accumulate() {
        let mut session = open_session(new_session(), T0).unwrap();
        pause(&mut session, T0 + MINUTE).unwrap();
        resume(&mut session, T0 + 3 * MINUTE).unwrap();
        pause(&mut session, T0 + 10 * MINUTE).unwrap();
        resume(&mut session, T0 + 15 * MINUTE + 500).unwrap();

        assert_eq!(session.accumulated_paused_secs, 120 + 300);
        assert_eq!(compute_elapsed_minutes(&session, T0 + 60 * MINUTE), 53);
    }

    #[test]
    fn test_accumulated_pause_never_decreases() {
        let mut session = open_session(new_session(), T0).unwrap();
        pause(&mut session, T0 + 10 * MINUTE).unwrap();
        // Clock skew: resume stamped before the pause
        let banked = resume(&mut session, T0 + 9 * MINUTE).unwrap();
        assert_eq!(banked, 0);
        assert_eq!(session.accumulated_paused_secs, 0);
    }

    #[test]
    fn test_double_pause_rejected() {
        let mut session = open_session(new_session(), T0).unwrap();
        pause(&mut session, T0 + MINUTE).unwrap();
        assert_eq!(
            pause(&mut session, T0 + 2 * MINUTE),
            Err(SessionError::AlreadyPaused(session.id))
        );
        assert_eq!(session.paused_at, Some(T0 + MINUTE));
    }

    #[test]
    fn test_resume_without_pause_rejected() {
        let mut session = open_session(new_session(), T0).unwrap();
        assert_eq!(
            resume(&mut session, T0 + MINUTE),
            Err(SessionError::NotPaused(session.id))
        );
    }

    #[test]
    fn test_pause_requires_active_session() {
        let mut session = open_session(new_session(), T0).unwrap();
        session.status = SessionStatus::Released;
        assert!(matches!(
            pause(&mut session, T0 + MINUTE),
            Err(SessionError::NotActive {
                status: SessionStatus::Released,
                ..
            })
        ));
    }

    #[test]
    fn test_pause_before_open_clamps() {
        let mut session = open_session(new_session(), T0).unwrap();
        pause(&mut session, T0 - MINUTE).unwrap();
        assert_eq!(session.paused_at, Some(T0));
    }

    #[test]
    fn test_freeze_keeps_existing_pause_point() {
        let mut session = open_session(new_session(), T0).unwrap();
        pause(&mut session, T0 + 20 * MINUTE).unwrap();
        freeze(&mut session, T0 + 50 * MINUTE);
        assert_eq!(session.paused_at, Some(T0 + 20 * MINUTE));

        let mut running = open_session(new_session(), T0).unwrap();
        freeze(&mut running, T0 + 50 * MINUTE);
        assert_eq!(running.paused_at, Some(T0 + 50 * MINUTE));
    }
}
