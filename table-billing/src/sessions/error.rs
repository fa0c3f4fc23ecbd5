use shared::models::SessionStatus;
use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::billing::BillingError;

/// Session lifecycle and checkout errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Invalid session: {0}")]
    Invalid(#[from] BillingError),

    #[error("Session {session_id} is not active (status {status:?})")]
    NotActive {
        session_id: i64,
        status: SessionStatus,
    },

    #[error("Session already paused: {0}")]
    AlreadyPaused(i64),

    #[error("Session is not paused: {0}")]
    NotPaused(i64),

    #[error("Session already closed: {0}")]
    AlreadyClosed(i64),

    #[error("item_totals[{index}] must be a finite non-negative amount, got {value}")]
    InvalidAmount { index: usize, value: f64 },
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Invalid(e) => e.code(),
            SessionError::NotActive { .. } => ErrorCode::SessionNotActive,
            SessionError::AlreadyPaused(_) => ErrorCode::SessionAlreadyPaused,
            SessionError::NotPaused(_) => ErrorCode::SessionNotPaused,
            SessionError::AlreadyClosed(_) => ErrorCode::SessionAlreadyClosed,
            SessionError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
        }
    }

    fn session_id(&self) -> Option<i64> {
        match self {
            SessionError::NotActive { session_id, .. } => Some(*session_id),
            SessionError::AlreadyPaused(id)
            | SessionError::NotPaused(id)
            | SessionError::AlreadyClosed(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let session_id = err.session_id();
        let app = match &err {
            SessionError::Invalid(e) => AppError::from(e.clone()),
            SessionError::InvalidAmount { index, .. } => {
                AppError::with_message(err.code(), err.to_string()).with_detail("index", *index)
            }
            _ => AppError::with_message(err.code(), err.to_string()),
        };
        match session_id {
            Some(id) => app.with_detail("session_id", id),
            None => app,
        }
    }
}
