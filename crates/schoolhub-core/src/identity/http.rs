//! HTTP implementation of the identity client capability.
//!
//! Talks to the directory backend's GoTrue-style passwordless endpoints
//! under `{base}/auth/v1`. Session tokens are cached in memory, mirrored to
//! the [`SessionStore`], and every provider-confirmed transition is fanned
//! out through the [`SessionHub`].

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ProviderConfig;
use crate::identity::events::{SessionHub, SessionSubscription};
use crate::identity::store::{SessionStore, StoredSession};
use crate::identity::{AuthUser, IdentityClient, OtpFactor, RequestCodeOptions};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity client backed by the backend's REST auth surface.
pub struct HttpIdentityClient {
    http: reqwest::Client,
    base_url: String,
    publishable_key: String,
    store: SessionStore,
    session: Mutex<Option<StoredSession>>,
    hub: SessionHub,
}

impl HttpIdentityClient {
    /// Creates a client using the app-home session store.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        Self::with_store(config, SessionStore::at_default_path())
    }

    /// Creates a client with an explicit session store.
    pub fn with_store(config: &ProviderConfig, store: SessionStore) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid provider base URL: {}", config.base_url))?;

        // A corrupt session file reads as signed out; the next sign-in
        // overwrites it.
        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("ignoring unreadable stored session: {e:#}");
                None
            }
        };

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            publishable_key: config.publishable_key.clone(),
            store,
            session: Mutex::new(session),
            hub: SessionHub::new(),
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/auth/v1/{name}", self.base_url)
    }

    fn cached_session(&self) -> Option<StoredSession> {
        self.session.lock().map(|s| s.clone()).unwrap_or(None)
    }

    fn set_session(&self, session: Option<StoredSession>) {
        if let Ok(mut guard) = self.session.lock() {
            *guard = session;
        }
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn current_user(&self) -> Result<Option<AuthUser>> {
        let Some(session) = self.cached_session() else {
            return Ok(None);
        };
        if session.is_expired() {
            tracing::debug!("stored session expired");
            return Ok(None);
        }

        let response = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.publishable_key)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .context("Failed to fetch current user")?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            // Provider no longer honors the token; that is "signed out",
            // not a failure.
            return Ok(None);
        }
        let response = check_status(response, "Session lookup").await?;

        let user: WireUser = response
            .json()
            .await
            .context("Failed to parse user response")?;
        Ok(Some(AuthUser::new(user.email)))
    }

    async fn request_code(&self, email: &str, options: RequestCodeOptions) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("otp"))
            .header("apikey", &self.publishable_key)
            .json(&OtpRequest {
                email,
                create_user: options.auto_provision,
            })
            .send()
            .await
            .context("Failed to send code request")?;

        check_status(response, "Code request").await?;
        tracing::info!(email, "passcode requested");
        Ok(())
    }

    async fn verify_code(&self, email: &str, code: &str, factor: OtpFactor) -> Result<AuthUser> {
        let response = self
            .http
            .post(self.endpoint("verify"))
            .header("apikey", &self.publishable_key)
            .json(&VerifyRequest {
                factor: factor.wire_name(),
                email,
                token: code,
            })
            .send()
            .await
            .context("Failed to send verification request")?;

        let response = check_status(response, "Verification").await?;
        let grant: GrantResponse = response
            .json()
            .await
            .context("Failed to parse verification response")?;

        let user = AuthUser::new(grant.user.email.clone());
        let session = StoredSession {
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
            expires_at: Utc::now() + chrono::Duration::seconds(grant.expires_in),
            email: grant.user.email,
        };
        self.store.save(&session).context("Failed to persist session")?;
        self.set_session(Some(session));

        tracing::info!(email = %user.email, "signed in");
        self.hub.notify(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        let Some(session) = self.cached_session() else {
            // Nothing to end provider-side; still tell subscribers the
            // session is absent so stale UI converges.
            self.hub.notify(None);
            return Ok(());
        };

        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.publishable_key)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .context("Failed to send sign-out request")?;

        check_status(response, "Sign-out").await?;

        self.store.clear().context("Failed to clear stored session")?;
        self.set_session(None);

        tracing::info!("signed out");
        self.hub.notify(None);
        Ok(())
    }

    fn subscribe(&self) -> SessionSubscription {
        self.hub.subscribe()
    }
}

/// Maps a non-2xx response to an error carrying the provider's message.
async fn check_status(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let reason = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|e| e.message())
        .unwrap_or(body);
    if reason.is_empty() {
        bail!("{what} failed (HTTP {status})");
    }
    bail!("{what} failed: {reason}");
}

#[derive(Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    create_user: bool,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    #[serde(rename = "type")]
    factor: &'static str,
    email: &'a str,
    token: &'a str,
}

#[derive(Deserialize)]
struct GrantResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    user: WireUser,
}

#[derive(Deserialize)]
struct WireUser {
    email: String,
}

/// Provider error payloads vary by endpoint; accept the common fields.
#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn message(self) -> Option<String> {
        self.msg.or(self.error_description).or(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpIdentityClient {
        let config = ProviderConfig {
            base_url: "https://directory.example.com/".to_string(),
            publishable_key: "pk_test".to_string(),
        };
        let dir = std::env::temp_dir().join("schoolhub-endpoint-test");
        HttpIdentityClient::with_store(&config, SessionStore::new(dir.join("session.json")))
            .unwrap()
    }

    #[test]
    fn test_endpoints_strip_trailing_slash() {
        let client = client();
        assert_eq!(
            client.endpoint("otp"),
            "https://directory.example.com/auth/v1/otp"
        );
        assert_eq!(
            client.endpoint("verify"),
            "https://directory.example.com/auth/v1/verify"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ProviderConfig {
            base_url: "not a url".to_string(),
            publishable_key: String::new(),
        };
        assert!(HttpIdentityClient::new(&config).is_err());
    }

    #[test]
    fn test_error_body_field_priority() {
        let body: ErrorBody = serde_json::from_str(r#"{"msg":"otp expired"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("otp expired"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"error_description":"invalid code"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("invalid code"));
    }
}
