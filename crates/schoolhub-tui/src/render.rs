//! Top-level frame composition.
//!
//! Header (session presence + navigation), page body for the current route,
//! a footer hint line, and the overlay on top if one is open.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{login, nav};
use crate::pages;
use crate::routes::Route;
use crate::state::AppState;

const SPINNER_FRAMES: &[char] = &['\u{280b}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283c}', '\u{2834}', '\u{2826}', '\u{2827}', '\u{2807}', '\u{280f}'];

/// Spinner character for the given animation frame.
pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn render(state: &AppState, frame: &mut Frame) {
    let tui = &state.tui;
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    nav::render_header(&tui.nav, tui.route, tui.spinner_frame, frame, header);

    match tui.route {
        Route::Home => pages::render_home(frame, body),
        Route::Schools => pages::render_schools(frame, body),
        Route::AddSchool => pages::render_add_school(tui.nav.user.as_ref(), frame, body),
        Route::Login => login::render_login(&tui.login, tui.spinner_frame, frame, body),
    }

    render_footer(tui.route, frame, footer);

    if let Some(overlay) = &state.overlay {
        overlay.render(tui, frame, body);
    }
}

fn render_footer(route: Route, frame: &mut Frame, area: Rect) {
    let hint = match route {
        Route::Login => " Esc back \u{b7} Ctrl+C quit",
        _ => " h home \u{b7} s schools \u{b7} a add \u{b7} m menu \u{b7} q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
