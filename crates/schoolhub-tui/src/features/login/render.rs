//! Login flow view: a centered card, one form per phase.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::features::login::state::{CODE_LEN, LoginFlowState, LoginPhase};
use crate::render::spinner_char;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 10;

pub fn render_login(login: &LoginFlowState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);

    let block = Block::default()
        .title(" Login with OTP ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let body = Rect::new(
        inner.x + 2,
        inner.y + 1,
        inner.width.saturating_sub(4),
        inner.height.saturating_sub(1),
    );
    let para = Paragraph::new(login_lines(login, spinner_frame));
    frame.render_widget(para, body);
}

fn login_lines(login: &LoginFlowState, spinner_frame: usize) -> Vec<Line<'static>> {
    match login.phase {
        LoginPhase::CollectingEmail => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Enter your email to receive a 6-digit code",
                    Style::default().fg(Color::White),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Email: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{}\u{2588}", login.email),
                        Style::default().fg(Color::White),
                    ),
                ]),
            ];
            push_error(&mut lines, login.error.as_deref());
            lines.push(Line::from(""));
            lines.push(hint("Enter to send code"));
            lines
        }
        LoginPhase::RequestingCode => busy_lines("Sending code", spinner_frame),
        LoginPhase::CollectingCode => {
            let typed = login.code.clone();
            let blanks = "\u{2581}".repeat(CODE_LEN - login.code.len());
            let mut lines = vec![
                Line::from(Span::styled(
                    "Enter the 6-digit code sent to your email",
                    Style::default().fg(Color::White),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Email: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(login.email.clone(), Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(vec![
                    Span::styled("Code:  ", Style::default().fg(Color::DarkGray)),
                    Span::styled(typed, Style::default().fg(Color::White)),
                    Span::styled(blanks, Style::default().fg(Color::DarkGray)),
                ]),
            ];
            push_error(&mut lines, login.error.as_deref());
            lines.push(Line::from(""));
            if login.code_complete() {
                lines.push(hint("Enter to verify \u{b7} Esc to go back"));
            } else {
                lines.push(hint("Esc to go back"));
            }
            lines
        }
        LoginPhase::VerifyingCode => busy_lines("Verifying code", spinner_frame),
    }
}

fn busy_lines(what: &str, spinner_frame: usize) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {what}...", spinner_char(spinner_frame)),
            Style::default().fg(Color::Yellow),
        )),
    ]
}

fn push_error(lines: &mut Vec<Line<'static>>, error: Option<&str>) {
    if let Some(error) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
}

fn hint(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
