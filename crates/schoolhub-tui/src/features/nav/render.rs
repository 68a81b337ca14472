//! Header bar: brand, visible entries, session affordance.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::nav::state::{NavState, visible_entries};
use crate::render::spinner_char;
use crate::routes::Route;

pub fn render_header(
    nav: &NavState,
    route: Route,
    spinner_frame: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let mut spans = vec![
        Span::styled(
            " SchoolHub ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("\u{2502}", Style::default().fg(Color::DarkGray)),
    ];

    for entry in visible_entries(nav.user.as_ref()) {
        let style = if entry.route == route {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", entry.label), style));
    }

    spans.push(Span::raw("  "));
    spans.extend(session_spans(nav, spinner_frame));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The right-hand session affordance: loading pulse, user chip, or login
/// hint. Loading never renders as signed out.
fn session_spans(nav: &NavState, spinner_frame: usize) -> Vec<Span<'static>> {
    if nav.loading {
        return vec![Span::styled(
            format!("{} ", spinner_char(spinner_frame)),
            Style::default().fg(Color::DarkGray),
        )];
    }
    match &nav.user {
        Some(user) => vec![
            Span::styled(
                format!("\u{25cf} {}", user.display_name()),
                Style::default().fg(Color::Green),
            ),
            Span::styled("  m menu", Style::default().fg(Color::DarkGray)),
        ],
        None => vec![
            Span::styled("l login", Style::default().fg(Color::Yellow)),
            Span::styled("  m menu", Style::default().fg(Color::DarkGray)),
        ],
    }
}
