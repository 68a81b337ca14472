//! Route model and navigation.
//!
//! Routing is a plain state transition inside the reducer. The one rule with
//! teeth: a signed-in user never lands on the login form — navigating there
//! short-circuits to Home.

use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Schools,
    AddSchool,
    Login,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Schools => "View Schools",
            Route::AddSchool => "Add School",
            Route::Login => "Login",
        }
    }
}

/// Moves to `route`, applying the signed-in short-circuit for Login.
pub fn navigate(tui: &mut TuiState, route: Route) {
    if route == Route::Login && tui.nav.user.is_some() {
        tui.route = Route::Home;
        return;
    }
    if route == Route::Login {
        // A fresh visit starts the flow over; a previous attempt's email or
        // error must not leak into it.
        tui.login.reset();
    }
    tui.route = route;
}

#[cfg(test)]
mod tests {
    use schoolhub_core::identity::AuthUser;

    use super::*;
    use crate::state::TuiState;

    #[test]
    fn test_navigate_to_login_while_signed_in_lands_on_home() {
        let mut tui = TuiState::new();
        tui.route = Route::Schools;
        tui.nav.user = Some(AuthUser::new("admin@school.com"));

        navigate(&mut tui, Route::Login);

        assert_eq!(tui.route, Route::Home);
    }

    #[test]
    fn test_navigate_to_login_while_signed_out_shows_the_form() {
        let mut tui = TuiState::new();

        navigate(&mut tui, Route::Login);

        assert_eq!(tui.route, Route::Login);
    }

    #[test]
    fn test_navigate_to_login_resets_a_stale_flow() {
        let mut tui = TuiState::new();
        navigate(&mut tui, Route::Login);
        tui.login.email = "old@school.com".to_string();
        tui.login.error = Some("Code request failed".to_string());
        navigate(&mut tui, Route::Home);

        navigate(&mut tui, Route::Login);

        assert!(tui.login.email.is_empty());
        assert!(tui.login.error.is_none());
    }
}
