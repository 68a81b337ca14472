//! Login flow state.

/// Maximum passcode length the provider issues.
pub const CODE_LEN: usize = 6;

/// Phase of the two-step OTP flow.
///
/// The in-flight phases double as the busy flag: while one is active, every
/// submission is ignored, so a second outstanding provider call cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Typing the email address.
    #[default]
    CollectingEmail,
    /// `request_code` is in flight.
    RequestingCode,
    /// Code was issued; typing the 6-digit passcode.
    CollectingCode,
    /// `verify_code` is in flight.
    VerifyingCode,
}

/// Local, ephemeral state of one login flow.
#[derive(Debug, Default)]
pub struct LoginFlowState {
    pub phase: LoginPhase,
    /// Address in progress. Read-only once the code form is shown.
    pub email: String,
    /// User-entered passcode, digits only, at most [`CODE_LEN`] long.
    pub code: String,
    /// Last failure message, cleared on each new attempt.
    pub error: Option<String>,
}

impl LoginFlowState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True while a provider call is outstanding for this flow.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            LoginPhase::RequestingCode | LoginPhase::VerifyingCode
        )
    }

    /// Appends a typed character to the code. Non-digits are silently
    /// dropped, never rejected with an error; input past six digits is
    /// ignored.
    pub fn push_code_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.code.len() < CODE_LEN {
            self.code.push(c);
        }
    }

    /// The submit control is enabled only for a complete code. The provider
    /// remains the authority on whether the code is correct.
    pub fn code_complete(&self) -> bool {
        self.code.len() == CODE_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_accepts_only_digits() {
        let mut login = LoginFlowState::default();
        for c in "12a3!45".chars() {
            login.push_code_char(c);
        }
        assert_eq!(login.code, "12345");
    }

    #[test]
    fn test_code_is_capped_at_six_digits() {
        let mut login = LoginFlowState::default();
        for c in "123456789".chars() {
            login.push_code_char(c);
        }
        assert_eq!(login.code, "123456");
    }

    #[test]
    fn test_code_complete_requires_exactly_six() {
        let mut login = LoginFlowState::default();
        for c in "12345".chars() {
            login.push_code_char(c);
        }
        assert!(!login.code_complete());

        login.push_code_char('6');
        assert!(login.code_complete());
    }
}
