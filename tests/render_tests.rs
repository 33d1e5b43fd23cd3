//! Render tests over the test-backend harness
//!
//! Create a harness with terminal dimensions, render the panel into the test
//! buffer, assert on its plain-text contents.

use skycast::components::{
    AlertModal, AlertModalProps, Component, WeatherPanel, WeatherPanelProps,
};
use skycast::state::{AppState, WeatherReading};
use skycast::testing::RenderHarness;

fn london_reading() -> WeatherReading {
    WeatherReading {
        temperature_c: 20,
        wind_speed: 3,
        humidity_pct: 55,
        city_label: "London".into(),
    }
}

fn render_panel(state: &AppState) -> String {
    let mut render = RenderHarness::new(60, 24);
    let mut panel = WeatherPanel::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherPanelProps {
            state,
            is_focused: !state.alert_open,
        };
        panel.render(frame, frame.area(), props);
    })
}

#[test]
fn initial_load_shows_spinner_and_no_numbers() {
    // Startup: the automatic fetch is in flight, nothing has resolved yet.
    let mut state = AppState::default();
    state.is_busy = true;

    let output = render_panel(&state);

    assert!(output.contains("Loading"), "should show loading text");
    assert!(!output.contains("°C"), "no temperature before settlement");
    assert!(!output.contains("km/h"), "no wind before settlement");
}

#[test]
fn reading_renders_all_three_blocks() {
    let mut state = AppState::default();
    state.reading = Some(london_reading());

    let output = render_panel(&state);

    assert!(output.contains("20°C (London)"), "temperature with city label");
    assert!(output.contains("3 km/h"), "wind with unit suffix");
    assert!(output.contains("55%"), "humidity with percent suffix");
}

#[test]
fn busy_replaces_numbers_even_with_a_reading() {
    let mut state = AppState::default();
    state.reading = Some(london_reading());
    state.is_busy = true;

    let output = render_panel(&state);

    assert!(output.contains("Loading"));
    assert!(!output.contains("20°C"));
}

#[test]
fn idle_before_first_fetch_renders_no_numeric_blocks() {
    let state = AppState::default();

    let output = render_panel(&state);

    assert!(!output.contains("°C"));
    assert!(!output.contains("km/h"));
    // The search field shows the default query.
    assert!(output.contains("Kerala"));
}

#[test]
fn search_field_tracks_the_query() {
    let mut state = AppState::default();
    state.query = "Tokyo".into();

    let output = render_panel(&state);

    assert!(output.contains("Tokyo"));
}

#[test]
fn help_bar_shows_key_hints() {
    let state = AppState::default();

    let output = render_panel(&state);

    assert!(output.contains("search"), "should show search hint");
    assert!(output.contains("quit"), "should show quit hint");
}

#[test]
fn alert_draws_over_the_panel() {
    // A failed fetch after a success: alert on top, reading retained below.
    let mut state = AppState::default();
    state.reading = Some(london_reading());
    state.alert_open = true;

    let mut render = RenderHarness::new(60, 24);
    let mut panel = WeatherPanel::new();
    let mut alert = AlertModal::new();

    let output = render.render_to_string_plain(|frame| {
        panel.render(
            frame,
            frame.area(),
            WeatherPanelProps {
                state: &state,
                is_focused: false,
            },
        );
        alert.render(frame, frame.area(), AlertModalProps { is_open: true });
    });

    assert!(output.contains("City not found!"));
    assert!(output.contains("dismiss"));
}
