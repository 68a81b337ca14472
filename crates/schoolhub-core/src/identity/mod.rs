//! Identity provider client capability.
//!
//! The directory backend owns sessions end to end; this module only models
//! the client side: requesting and verifying one-time passcodes, projecting
//! the current session into an [`AuthUser`], and fanning session transitions
//! out to subscribers. Token contents are never inspected here.

pub mod events;
pub mod http;
pub mod store;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use events::{SessionHub, SessionSignal, SessionSubscription};
pub use http::HttpIdentityClient;
pub use store::{SessionStore, StoredSession};

/// Projection of a present session: the signed-in account.
///
/// The email address doubles as login key and display key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

impl AuthUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Compact display form: the mailbox part before `@`.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Options for [`IdentityClient::request_code`].
#[derive(Debug, Clone, Copy)]
pub struct RequestCodeOptions {
    /// Provision an account for unrecognized emails, so first-time and
    /// returning login share one code path.
    pub auto_provision: bool,
}

impl Default for RequestCodeOptions {
    fn default() -> Self {
        Self {
            auto_provision: true,
        }
    }
}

/// The second factor being verified. Only email OTP is deployed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OtpFactor {
    #[default]
    Email,
}

impl OtpFactor {
    /// Wire name the provider expects in the verify payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            OtpFactor::Email => "email",
        }
    }
}

/// Client capability over the external identity provider.
///
/// Object-safe so the UI can hold `Arc<dyn IdentityClient>` and tests can
/// substitute a scripted implementation.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Resolves the current session to its user projection, or `None` when
    /// no session is present. Idempotent and side-effect-free.
    async fn current_user(&self) -> Result<Option<AuthUser>>;

    /// Asks the provider to issue and deliver a passcode out of band.
    async fn request_code(&self, email: &str, options: RequestCodeOptions) -> Result<()>;

    /// Exchanges a delivered passcode for a session. On success the provider
    /// session becomes present and every subscriber is notified.
    async fn verify_code(&self, email: &str, code: &str, factor: OtpFactor) -> Result<AuthUser>;

    /// Ends the current session. On success the provider session becomes
    /// absent and every subscriber is notified.
    async fn sign_out(&self) -> Result<()>;

    /// Registers a listener on the session-change stream. Dropping the
    /// returned handle cancels delivery.
    fn subscribe(&self) -> SessionSubscription;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_strips_domain() {
        let user = AuthUser::new("admin@school.com");
        assert_eq!(user.display_name(), "admin");
    }

    #[test]
    fn test_display_name_without_domain() {
        let user = AuthUser::new("admin");
        assert_eq!(user.display_name(), "admin");
    }

    #[test]
    fn test_request_options_default_to_auto_provision() {
        assert!(RequestCodeOptions::default().auto_provision);
    }
}
