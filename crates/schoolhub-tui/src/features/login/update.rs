//! Login flow reducer.
//!
//! Key handling and provider-result handling for the OTP state machine:
//!
//! ```text
//! CollectingEmail --submit--> RequestingCode --ok--> CollectingCode
//!       ^                          |fail                  |
//!       |<-------------------------+                      |submit (6 digits)
//!       |                                                 v
//!       +<---Esc (Back)--- CollectingCode <--fail-- VerifyingCode --ok--> signed in
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use schoolhub_core::identity::AuthUser;

use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::features::login::state::{LoginFlowState, LoginPhase};

/// What the reducer should do after a verification result.
#[derive(Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Result arrived in a phase that cannot consume it; dropped.
    Ignored,
    /// Verification failed; the flow stays on the code form with an error.
    Failed,
    /// Session established. Caller navigates Home and forces a refetch.
    SignedIn,
}

/// Handles a key press while the login route is active.
pub fn handle_key(
    login: &mut LoginFlowState,
    seq: &mut TaskSeq,
    tasks: &Tasks,
    key: KeyEvent,
) -> Vec<UiEffect> {
    match login.phase {
        // In-flight: all input is ignored until the provider responds.
        LoginPhase::RequestingCode | LoginPhase::VerifyingCode => vec![],

        LoginPhase::CollectingEmail => match key.code {
            KeyCode::Char(c) if !c.is_control() => {
                login.email.push(c);
                vec![]
            }
            KeyCode::Backspace => {
                login.email.pop();
                vec![]
            }
            KeyCode::Enter => {
                let email = login.email.trim();
                if email.is_empty() || tasks.request_code.is_running() {
                    return vec![];
                }
                login.email = email.to_string();
                login.error = None;
                login.phase = LoginPhase::RequestingCode;
                vec![UiEffect::RequestCode {
                    task: seq.next_id(),
                    email: login.email.clone(),
                }]
            }
            _ => vec![],
        },

        LoginPhase::CollectingCode => match key.code {
            KeyCode::Char(c) => {
                login.push_code_char(c);
                vec![]
            }
            KeyCode::Backspace => {
                login.code.pop();
                vec![]
            }
            // Back: restart with the email retained, code and error cleared.
            KeyCode::Esc => {
                login.phase = LoginPhase::CollectingEmail;
                login.code.clear();
                login.error = None;
                vec![]
            }
            KeyCode::Enter => {
                if !login.code_complete() || tasks.verify_code.is_running() {
                    return vec![];
                }
                login.error = None;
                login.phase = LoginPhase::VerifyingCode;
                vec![UiEffect::VerifyCode {
                    task: seq.next_id(),
                    email: login.email.clone(),
                    code: login.code.clone(),
                }]
            }
            _ => vec![],
        },
    }
}

/// Applies the result of a `request_code` call.
pub fn handle_code_requested(login: &mut LoginFlowState, result: Result<(), String>) {
    if login.phase != LoginPhase::RequestingCode {
        return;
    }
    match result {
        Ok(()) => {
            login.phase = LoginPhase::CollectingCode;
            login.code.clear();
        }
        Err(message) => {
            login.phase = LoginPhase::CollectingEmail;
            login.error = Some(message);
        }
    }
}

/// Applies the result of a `verify_code` call.
pub fn handle_code_verified(
    login: &mut LoginFlowState,
    result: Result<AuthUser, String>,
) -> VerifyOutcome {
    if login.phase != LoginPhase::VerifyingCode {
        return VerifyOutcome::Ignored;
    }
    match result {
        Ok(_user) => {
            login.reset();
            VerifyOutcome::SignedIn
        }
        Err(message) => {
            login.phase = LoginPhase::CollectingCode;
            login.error = Some(message);
            VerifyOutcome::Failed
        }
    }
}
