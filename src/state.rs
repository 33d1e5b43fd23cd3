//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

/// Default city queried on startup before any user input.
pub const DEFAULT_CITY: &str = "Kerala";

/// The literal alert text shown for any failed fetch.
pub const ALERT_TEXT: &str = "City not found!";

/// The result of one successful fetch.
///
/// Replaced wholesale on every successful fetch - all four fields come from
/// the same response, there is no partial update. A failed fetch leaves the
/// previous reading in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherReading {
    /// Temperature in °C, floored (so -3.7 becomes -4).
    pub temperature_c: i32,
    /// Wind speed, floored; rendered with a km/h suffix.
    pub wind_speed: i32,
    /// Relative humidity in percent, as provided by the API.
    pub humidity_pct: u8,
    /// The city name this reading was fetched for.
    pub city_label: String,
}

/// Application state - everything the UI needs to render.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Current contents of the search field; updated on every keystroke.
    pub query: String,

    /// Last successful reading (None = never fetched successfully).
    pub reading: Option<WeatherReading>,

    /// True strictly between dispatching a fetch and its settlement.
    pub is_busy: bool,

    /// Whether the blocking error alert is showing.
    pub alert_open: bool,

    /// Animation frame counter for the loading spinner.
    pub tick_count: u32,
}

impl AppState {
    /// Create state with the given initial query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            reading: None,
            is_busy: false,
            alert_open: false,
            tick_count: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
