//! City search field
//!
//! Binds the text field to the query: every keystroke emits `QueryChange`,
//! Enter submits the current value as a fetch. The cursor position is
//! internal UI state; the text itself lives in `AppState`.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::event::EventKind;

const PLACEHOLDER: &str = "Enter city name...";

/// Props for [`SearchBar`].
pub struct SearchBarProps<'a> {
    /// Current query value.
    pub value: &'a str,
    /// Whether the field receives key input.
    pub is_focused: bool,
}

/// Single-line city input with cursor.
#[derive(Default)]
pub struct SearchBar {
    /// Cursor position (byte index into the value).
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut new_pos = self.cursor - 1;
            while new_pos > 0 && !value.is_char_boundary(new_pos) {
                new_pos -= 1;
            }
            self.cursor = new_pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut new_pos = self.cursor + 1;
            while new_pos < value.len() && !value.is_char_boundary(new_pos) {
                new_pos += 1;
            }
            self.cursor = new_pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }

        let char_start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        if let Some((_, c)) = value[self.cursor..].char_indices().next() {
            new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(new_value)
    }
}

impl Component for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(Action::QueryChange(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some(Action::QueryChange(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(Action::QueryChange),
            KeyCode::Delete => self.delete_char_at(props.value).map(Action::QueryChange),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            // Submitting fetches with the query as it currently stands.
            KeyCode::Enter => Some(Action::WeatherFetch),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let display_text = if props.value.is_empty() {
            PLACEHOLDER
        } else {
            props.value
        };

        let style = if props.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let paragraph = Paragraph::new(display_text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if props.is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );

        frame.render_widget(paragraph, area);

        if props.is_focused {
            let cursor_x = area.x + 1 + self.cursor as u16;
            let cursor_y = area.y + 1;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{key, RenderHarness};

    fn props(value: &str) -> SearchBarProps<'_> {
        SearchBarProps {
            value,
            is_focused: true,
        }
    }

    fn actions(bar: &mut SearchBar, event: &EventKind, value: &str) -> Vec<Action> {
        bar.handle_event(event, props(value)).into_iter().collect()
    }

    #[test]
    fn typing_emits_query_change() {
        let mut bar = SearchBar::new();

        let got = actions(&mut bar, &EventKind::Key(key("l")), "");

        assert_eq!(got, vec![Action::QueryChange("l".into())]);
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut bar = SearchBar::new();
        bar.cursor = 6;

        let got = actions(&mut bar, &EventKind::Key(key("!")), "London");

        assert_eq!(got, vec![Action::QueryChange("London!".into())]);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut bar = SearchBar::new();
        bar.cursor = 6;

        let got = actions(&mut bar, &EventKind::Key(key("backspace")), "London");

        assert_eq!(got, vec![Action::QueryChange("Londo".into())]);
        assert_eq!(bar.cursor, 5);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut bar = SearchBar::new();
        bar.cursor = 0;

        let got = actions(&mut bar, &EventKind::Key(key("backspace")), "London");

        assert!(got.is_empty());
    }

    #[test]
    fn enter_submits_a_fetch() {
        let mut bar = SearchBar::new();

        let got = actions(&mut bar, &EventKind::Key(key("enter")), "London");

        assert_eq!(got, vec![Action::WeatherFetch]);
    }

    #[test]
    fn ctrl_u_clears_the_field() {
        let mut bar = SearchBar::new();
        bar.cursor = 6;

        let got = actions(&mut bar, &EventKind::Key(key("ctrl+u")), "London");

        assert_eq!(got, vec![Action::QueryChange(String::new())]);
        assert_eq!(bar.cursor, 0);
    }

    #[test]
    fn unfocused_ignores_input() {
        let mut bar = SearchBar::new();
        let unfocused = SearchBarProps {
            value: "London",
            is_focused: false,
        };

        let got: Vec<Action> = bar
            .handle_event(&EventKind::Key(key("a")), unfocused)
            .into_iter()
            .collect();

        assert!(got.is_empty());
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut render = RenderHarness::new(30, 3);
        let mut bar = SearchBar::new();

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(""));
        });

        assert!(output.contains("Enter city name..."));
    }

    #[test]
    fn renders_current_value() {
        let mut render = RenderHarness::new(30, 3);
        let mut bar = SearchBar::new();

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props("Kerala"));
        });

        assert!(output.contains("Kerala"));
    }
}
