//! Static page bodies for the directory routes.
//!
//! These are navigation targets, not features: placeholder content for Home
//! and Schools, and a sign-in hint on Add School when nobody is signed in.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use schoolhub_core::identity::AuthUser;

pub fn render_home(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to SchoolHub",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  A small directory of schools. Browse the directory from",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "  View Schools, or sign in to add a school.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_schools(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Schools",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  The school directory lives here.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_add_school(user: Option<&AuthUser>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Add School",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match user {
        Some(user) => {
            lines.push(Line::from(Span::styled(
                format!("  Signed in as {}.", user.email),
                Style::default().fg(Color::Green),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  Sign in to add schools.",
                Style::default().fg(Color::Yellow),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}
