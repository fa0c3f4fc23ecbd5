//! Table session lifecycle
//!
//! Running ⇄ Paused → Released → Closed. Sessions are owned by the
//! caller; these helpers mutate a snapshot in place.

mod error;
mod lifecycle;

pub use error::SessionError;
pub use lifecycle::{open_session, pause, resume};
pub(crate) use lifecycle::freeze;
