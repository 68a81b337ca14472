//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Provider calls never happen here; the
//! reducer only records intent as effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::login::{self, VerifyOutcome};
use crate::features::nav;
use crate::overlays::{MenuState, Overlay, OverlayAction, OverlayTransition};
use crate::routes::{self, Route};
use crate::state::AppState;

/// Effects to execute when the UI activates: the one initial session fetch.
///
/// `nav.loading` starts true and stays set until this fetch resolves, so
/// dependent UI never renders "signed out" as a default.
pub fn activation_effects(app: &mut AppState) -> Vec<UiEffect> {
    vec![UiEffect::FetchSession {
        task: app.tui.task_seq.next_id(),
    }]
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => match term_event {
            Event::Key(key) => handle_key(app, key),
            _ => vec![],
        },

        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                // A completion that lost the race (feature reset, newer call
                // for the same kind) must not mutate state.
                vec![]
            }
        }

        UiEvent::SessionFetched(result) => {
            nav::handle_session_fetched(&mut app.tui.nav, result);
            redirect_if_signed_in_on_login(app);
            vec![]
        }
        UiEvent::SessionChanged(user) => {
            nav::handle_session_changed(&mut app.tui.nav, user);
            redirect_if_signed_in_on_login(app);
            vec![]
        }
        UiEvent::SessionStreamLagged => {
            // Transitions were dropped; the next payload cannot be trusted.
            if app.tui.tasks.session_fetch.is_running() {
                return vec![];
            }
            vec![UiEffect::FetchSession {
                task: app.tui.task_seq.next_id(),
            }]
        }

        UiEvent::CodeRequested(result) => {
            login::handle_code_requested(&mut app.tui.login, result);
            vec![]
        }
        UiEvent::CodeVerified(result) => {
            match login::handle_code_verified(&mut app.tui.login, result) {
                VerifyOutcome::SignedIn => {
                    // Session established: hand off to routing and force the
                    // ambient auth-dependent UI to re-evaluate.
                    routes::navigate(&mut app.tui, Route::Home);
                    vec![UiEffect::FetchSession {
                        task: app.tui.task_seq.next_id(),
                    }]
                }
                VerifyOutcome::Failed | VerifyOutcome::Ignored => vec![],
            }
        }
        UiEvent::SignedOut(_result) => {
            // Provider responded (failure already logged by the handler).
            // Navigate home first, then close the transient menu.
            routes::navigate(&mut app.tui, Route::Home);
            app.overlay = None;
            vec![]
        }
    }
}

/// A sign-in observed while the login route is current redirects Home; the
/// form is never shown to a signed-in user.
fn redirect_if_signed_in_on_login(app: &mut AppState) {
    if app.tui.route == Route::Login && app.tui.nav.user.is_some() {
        app.tui.route = Route::Home;
        app.tui.login.reset();
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // The overlay owns the keyboard while open.
    if let Some(overlay) = &mut app.overlay {
        let overlay_update = overlay.handle_key(&app.tui, key);
        if matches!(overlay_update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        return match overlay_update.action {
            Some(OverlayAction::Navigate(route)) => {
                routes::navigate(&mut app.tui, route);
                vec![]
            }
            Some(OverlayAction::SignOut) => {
                if app.tui.tasks.sign_out.is_running() {
                    return vec![];
                }
                vec![UiEffect::SignOut {
                    task: app.tui.task_seq.next_id(),
                }]
            }
            None => vec![],
        };
    }

    if app.tui.route == Route::Login {
        // Esc on the email form leaves the page; everything else belongs to
        // the flow (including Esc-as-Back on the code form).
        if key.code == KeyCode::Esc
            && matches!(app.tui.login.phase, login::LoginPhase::CollectingEmail)
        {
            routes::navigate(&mut app.tui, Route::Home);
            return vec![];
        }
        return login::handle_key(
            &mut app.tui.login,
            &mut app.tui.task_seq,
            &app.tui.tasks,
            key,
        );
    }

    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('h') => {
            routes::navigate(&mut app.tui, Route::Home);
            vec![]
        }
        KeyCode::Char('s') => {
            routes::navigate(&mut app.tui, Route::Schools);
            vec![]
        }
        KeyCode::Char('a') => {
            routes::navigate(&mut app.tui, Route::AddSchool);
            vec![]
        }
        KeyCode::Char('l') => {
            routes::navigate(&mut app.tui, Route::Login);
            vec![]
        }
        KeyCode::Char('m') => {
            app.overlay = Some(Overlay::Menu(MenuState::open()));
            vec![]
        }
        _ => vec![],
    }
}
