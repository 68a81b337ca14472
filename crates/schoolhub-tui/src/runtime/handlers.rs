//! Effect handlers for the TUI runtime.
//!
//! Pure async functions over the identity client that return the `UiEvent`
//! carrying the outcome. Provider failures are flattened to display strings
//! here; the reducer never sees a raw error. The runtime spawns these and
//! posts the result to the inbox.

use std::sync::Arc;

use schoolhub_core::identity::{IdentityClient, OtpFactor, RequestCodeOptions};

use crate::events::UiEvent;

pub async fn fetch_session(client: Arc<dyn IdentityClient>) -> UiEvent {
    match client.current_user().await {
        Ok(user) => UiEvent::SessionFetched(Ok(user)),
        Err(e) => {
            // Fails open to signed-out; the log line is the only place a
            // transient failure is distinguishable from "not logged in".
            tracing::warn!("session fetch failed: {e:#}");
            UiEvent::SessionFetched(Err(format!("{e:#}")))
        }
    }
}

pub async fn request_code(client: Arc<dyn IdentityClient>, email: String) -> UiEvent {
    let result = client
        .request_code(&email, RequestCodeOptions::default())
        .await
        .map_err(|e| format!("{e:#}"));
    UiEvent::CodeRequested(result)
}

pub async fn verify_code(client: Arc<dyn IdentityClient>, email: String, code: String) -> UiEvent {
    let result = client
        .verify_code(&email, &code, OtpFactor::Email)
        .await
        .map_err(|e| format!("{e:#}"));
    UiEvent::CodeVerified(result)
}

pub async fn sign_out(client: Arc<dyn IdentityClient>) -> UiEvent {
    let result = client.sign_out().await.map_err(|e| format!("{e:#}"));
    if let Err(e) = &result {
        tracing::warn!("sign-out failed: {e}");
    }
    UiEvent::SignedOut(result)
}
