//! OTP login flow feature slice.
//!
//! Two-step passwordless login: request a code for an email address, then
//! exchange the delivered code for a session. The state machine lives in
//! `state`/`update`; `render` draws the form for the current phase.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{CODE_LEN, LoginFlowState, LoginPhase};
pub use update::{VerifyOutcome, handle_code_requested, handle_code_verified, handle_key};
