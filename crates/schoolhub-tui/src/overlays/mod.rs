//! Overlay modules for the TUI.
//!
//! Overlays are modal components that temporarily take over keyboard input.
//! Each overlay owns its state, key handler, and render function; the
//! reducer applies the returned transition and action.

pub mod menu;

use crossterm::event::KeyEvent;
pub use menu::MenuState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::routes::Route;
use crate::state::TuiState;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// A reducer-level consequence requested by an overlay.
#[derive(Debug)]
pub enum OverlayAction {
    Navigate(Route),
    SignOut,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub action: Option<OverlayAction>,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
            action: None,
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
            action: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: OverlayAction) -> Self {
        self.action = Some(action);
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Menu(MenuState),
}

impl Overlay {
    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Menu(menu) => menu.handle_key(tui, key),
        }
    }

    pub fn render(&self, tui: &TuiState, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Menu(menu) => menu.render(tui, frame, area),
        }
    }
}
