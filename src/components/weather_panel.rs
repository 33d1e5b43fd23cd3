//! Main weather panel
//!
//! Renders the search field, the reading (or the loading indicator), and the
//! help bar inside one bordered block. Pure function of `AppState`.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, HelpBar, HelpBarProps, SearchBar, SearchBarProps};
use crate::action::Action;
use crate::event::EventKind;
use crate::state::{AppState, WeatherReading};

pub const WIND_ICON: &str = "🌬";
pub const HUMIDITY_ICON: &str = "💧";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for [`WeatherPanel`].
pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
    /// False while the alert modal owns the keyboard.
    pub is_focused: bool,
}

/// The main display component.
#[derive(Default)]
pub struct WeatherPanel {
    search: SearchBar,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Esc {
                return vec![Action::Quit];
            }
        }

        self.search
            .handle_event(
                event,
                SearchBarProps {
                    value: &props.state.query,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let loading_indicator = if state.is_busy {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {spinner} ")
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ skycast{loading_indicator}"))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Search field
            Constraint::Min(1),    // Reading / loading indicator
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        self.search.render(
            frame,
            chunks[0],
            SearchBarProps {
                value: &state.query,
                is_focused: props.is_focused,
            },
        );

        render_body(frame, chunks[1], state);

        let mut help = HelpBar;
        help.render(frame, chunks[2], HelpBarProps);
    }
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = body_lines(state);
    if lines.is_empty() {
        return;
    }

    let constraints = lines.iter().map(|_| Constraint::Length(1));
    let chunks = Layout::vertical(constraints).flex(Flex::Center).split(area);

    for (line, line_area) in lines.into_iter().zip(chunks.iter().copied()) {
        frame.render_widget(Paragraph::new(line), line_area);
    }
}

/// The body is a small list of centered lines derived from the state.
fn body_lines(state: &AppState) -> Vec<Line<'static>> {
    // Busy replaces the numeric output entirely.
    if state.is_busy {
        let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
        let dots = ".".repeat((state.tick_count as usize / 3) % 4);

        return vec![Line::from(vec![
            Span::styled(spinner.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" Loading{dots:<3}"),
                Style::default().fg(Color::Gray),
            ),
        ])
        .centered()];
    }

    match &state.reading {
        Some(reading) => {
            let mut lines = Vec::with_capacity(5);
            lines.push(temperature_line(reading));
            lines.push(Line::from("").centered());
            lines.push(wind_line(reading));
            lines.push(humidity_line(reading));
            lines
        }
        // Nothing fetched yet: no numeric blocks, just a dim hint.
        None => vec![Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to look up a city", Style::default().fg(Color::DarkGray)),
        ])
        .centered()],
    }
}

fn temperature_line(reading: &WeatherReading) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}°C", reading.temperature_c),
            Style::default()
                .fg(temp_to_color(reading.temperature_c))
                .bold(),
        ),
        Span::styled(
            format!(" ({})", reading.city_label),
            Style::default().fg(Color::Gray),
        ),
    ])
    .centered()
}

fn wind_line(reading: &WeatherReading) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} km/h ", reading.wind_speed),
            Style::default().fg(Color::White),
        ),
        Span::styled(WIND_ICON, Style::default().fg(Color::Blue)),
    ])
    .centered()
}

fn humidity_line(reading: &WeatherReading) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}% ", reading.humidity_pct),
            Style::default().fg(Color::White),
        ),
        Span::styled(HUMIDITY_ICON, Style::default().fg(Color::Blue)),
    ])
    .centered()
}

/// Temperature-based color for the headline number.
fn temp_to_color(celsius: i32) -> Color {
    match celsius {
        ..=-10 => Color::Rgb(150, 200, 255),
        -9..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        31..=40 => Color::Rgb(255, 150, 80),
        _ => Color::Rgb(255, 100, 100),
    }
}
