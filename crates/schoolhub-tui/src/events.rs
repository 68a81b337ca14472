//! UI event types.
//!
//! Everything that can change state flows through here: terminal input, the
//! frame tick, task lifecycle, and provider results posted back by the
//! runtime's spawned handlers. Provider failures arrive already flattened to
//! display strings; the reducer never sees a raw error type.

use schoolhub_core::identity::AuthUser;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Frame cadence; drives the spinner and render batching.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// A spawned task began; the reducer records its id as the active one.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// A spawned task finished. The payload event is only processed when the
    /// id is still the active one for that kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Result of the initial (or forced) session fetch.
    SessionFetched(Result<Option<AuthUser>, String>),
    /// Result of a passcode issuance request.
    CodeRequested(Result<(), String>),
    /// Result of a passcode verification.
    CodeVerified(Result<AuthUser, String>),
    /// Result of the provider sign-out call.
    SignedOut(Result<(), String>),

    /// A transition delivered on the provider's session-change stream.
    SessionChanged(Option<AuthUser>),
    /// The stream receiver fell behind; current state must be refetched.
    SessionStreamLagged,
}
