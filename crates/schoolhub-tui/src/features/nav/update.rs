//! Session presence reducer.
//!
//! Applies fetch results and change notifications to [`NavState`]. The
//! surrounding reducer owns the route/overlay consequences (redirects, menu
//! closure); this module only keeps the projection accurate.

use schoolhub_core::identity::AuthUser;

use crate::features::nav::state::NavState;

/// Applies the result of a session fetch.
///
/// A failed fetch fails open: it reads as signed out rather than blocking
/// the page. The runtime handler already logged the failure.
pub fn handle_session_fetched(nav: &mut NavState, result: Result<Option<AuthUser>, String>) {
    nav.user = result.unwrap_or(None);
    nav.loading = false;
}

/// Applies one notification from the session-change stream.
///
/// Every notification replaces the held projection with its payload, in
/// delivery order; nothing is reordered or deduplicated.
pub fn handle_session_changed(nav: &mut NavState, user: Option<AuthUser>) {
    nav.user = user;
    nav.loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_resolving_to_no_user_clears_loading() {
        let mut nav = NavState::default();

        handle_session_fetched(&mut nav, Ok(None));

        assert!(!nav.loading);
        assert!(nav.user.is_none());
    }

    #[test]
    fn test_fetch_failure_fails_open_to_signed_out() {
        let mut nav = NavState::default();

        handle_session_fetched(&mut nav, Err("connection refused".to_string()));

        assert!(!nav.loading);
        assert!(nav.user.is_none());
    }

    #[test]
    fn test_notification_replaces_user() {
        let mut nav = NavState::default();

        handle_session_changed(&mut nav, Some(AuthUser::new("a@b.com")));
        assert_eq!(nav.user, Some(AuthUser::new("a@b.com")));
        assert!(!nav.loading);

        handle_session_changed(&mut nav, None);
        assert!(nav.user.is_none());
    }
}
