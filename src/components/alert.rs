//! Blocking error alert
//!
//! Rendered over the panel whenever a fetch fails. While open it owns the
//! keyboard: the only action it produces is its own dismissal, so nothing
//! else can be typed or submitted until the user acknowledges it.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::event::EventKind;
use crate::state::ALERT_TEXT;

/// Props for [`AlertModal`].
pub struct AlertModalProps {
    pub is_open: bool,
}

/// Centered modal carrying the one generic failure message.
#[derive(Default)]
pub struct AlertModal;

impl AlertModal {
    pub fn new() -> Self {
        Self
    }
}

impl Component for AlertModal {
    type Props<'a> = AlertModalProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_open {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::AlertDismiss),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if !props.is_open || area.width < 24 || area.height < 7 {
            return;
        }

        let modal_area = centered_rect(30, 7, area);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Alert ")
            .title_style(Style::default().fg(Color::Red).bold())
            .title_alignment(Alignment::Center);
        frame.render_widget(block.clone(), modal_area);

        let inner = block.inner(modal_area);
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(ALERT_TEXT).centered().bold()),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(vec![
                    Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
                    Span::styled(" dismiss", Style::default().fg(Color::DarkGray)),
                ])
                .centered(),
            ),
            chunks[3],
        );
    }
}

/// Calculate a centered rectangle within an area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
