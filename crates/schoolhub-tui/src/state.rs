//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── route: Route                (current page)
//! │   ├── login: LoginFlowState      (OTP flow state machine)
//! │   ├── nav: NavState              (session presence projection)
//! │   ├── task_seq: TaskSeq          (async task id generator)
//! │   └── tasks: Tasks               (task lifecycle state)
//! └── overlay: Option<Overlay>       (transient menu)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can borrow both sides at once.

use crate::common::{TaskSeq, Tasks};
use crate::features::login::LoginFlowState;
use crate::features::nav::NavState;
use crate::overlays::Overlay;
use crate::routes::Route;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tui: TuiState::new(),
            overlay: None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Current route.
    pub route: Route,
    /// OTP login flow state.
    pub login: LoginFlowState,
    /// Session presence projection.
    pub nav: NavState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::Home,
            login: LoginFlowState::default(),
            nav: NavState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }
}
