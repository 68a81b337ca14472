//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! performs a provider call.

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the current session/user projection.
    FetchSession { task: TaskId },

    /// Ask the provider to issue a passcode for this email.
    RequestCode { task: TaskId, email: String },

    /// Exchange a submitted passcode for a session.
    VerifyCode {
        task: TaskId,
        email: String,
        code: String,
    },

    /// End the current session provider-side.
    SignOut { task: TaskId },
}
