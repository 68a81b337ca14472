//! Transient menu overlay.
//!
//! Lists the visible navigation entries plus the login/logout control, like
//! the slide-over panel of the web app. Items are derived from current
//! session presence on every key press and every frame, so a sign-in or
//! sign-out observed while the menu is open is reflected immediately.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use super::{OverlayAction, OverlayUpdate};
use crate::features::nav::visible_entries;
use crate::routes::Route;
use crate::state::TuiState;

const PANEL_WIDTH: u16 = 30;

#[derive(Debug)]
pub enum MenuItem {
    Entry { label: &'static str, route: Route },
    Login,
    Logout,
}

#[derive(Debug, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn open() -> Self {
        Self::default()
    }

    /// Items for the current session presence. Never cached.
    fn items(tui: &TuiState) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = visible_entries(tui.nav.user.as_ref())
            .into_iter()
            .map(|e| MenuItem::Entry {
                label: e.label,
                route: e.route,
            })
            .collect();
        if tui.nav.user.is_some() {
            items.push(MenuItem::Logout);
        } else {
            items.push(MenuItem::Login);
        }
        items
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let items = Self::items(tui);
        self.selected = self.selected.min(items.len().saturating_sub(1));

        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => OverlayUpdate::close(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < items.len() {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match items[self.selected] {
                MenuItem::Entry { route, .. } => {
                    OverlayUpdate::close().with_action(OverlayAction::Navigate(route))
                }
                MenuItem::Login => {
                    OverlayUpdate::close().with_action(OverlayAction::Navigate(Route::Login))
                }
                // The menu stays open until the provider confirms; the
                // reducer closes it after navigating Home.
                MenuItem::Logout => OverlayUpdate::stay().with_action(OverlayAction::SignOut),
            },
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, tui: &TuiState, frame: &mut Frame, area: Rect) {
        let width = PANEL_WIDTH.min(area.width);
        let panel = Rect::new(area.right().saturating_sub(width), area.y, width, area.height);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let items = Self::items(tui);
        let selected = self.selected.min(items.len().saturating_sub(1));
        let signing_out = tui.tasks.sign_out.is_running();

        let mut lines = Vec::new();
        if let Some(user) = &tui.nav.user {
            lines.push(Line::from(Span::styled(
                format!(" \u{25cf} {}", user.email),
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(""));
        }

        for (idx, item) in items.iter().enumerate() {
            let pointer = if idx == selected { ">" } else { " " };
            let label = match item {
                MenuItem::Entry { label, .. } => (*label).to_string(),
                MenuItem::Login => "Login".to_string(),
                MenuItem::Logout if signing_out => "Logout (signing out...)".to_string(),
                MenuItem::Logout => "Logout".to_string(),
            };
            let style = if idx == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(format!("{pointer} {label}"), style)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Enter select \u{b7} Esc close",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
