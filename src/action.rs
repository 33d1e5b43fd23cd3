//! Actions - every state transition is an action
//!
//! Naming convention: intent actions trigger work (`WeatherFetch`), `Did*`
//! actions carry async results back (`WeatherDidLoad`, `WeatherDidError`).

use crate::state::WeatherReading;

/// Application actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The search field changed; applied to `state.query` immediately.
    QueryChange(String),

    /// Intent: fetch weather for the current query (startup or submit).
    WeatherFetch,

    /// Result: a fetch succeeded; replaces any previous reading wholesale.
    WeatherDidLoad(WeatherReading),

    /// Result: a fetch failed. Carries the underlying error text for
    /// diagnostics; the user only ever sees the generic alert.
    WeatherDidError(String),

    /// Dismiss the blocking error alert.
    AlertDismiss,

    /// Periodic tick for the loading spinner animation.
    Tick,

    /// Exit the application.
    Quit,
}

impl Action {
    /// Action name for logging and filtering.
    pub fn name(&self) -> &'static str {
        match self {
            Action::QueryChange(_) => "QueryChange",
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::AlertDismiss => "AlertDismiss",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise form for action logging; avoids dumping full readings.
    pub fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad(reading) => format!(
                "WeatherDidLoad {{ {}°C, {} km/h, {}% ({}) }}",
                reading.temperature_c,
                reading.wind_speed,
                reading.humidity_pct,
                reading.city_label
            ),
            Action::WeatherDidError(e) => {
                let msg = if e.len() > 60 {
                    format!("{}...", &e.chars().take(57).collect::<String>())
                } else {
                    e.clone()
                };
                format!("WeatherDidError({msg:?})")
            }
            _ => format!("{self:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_truncates_long_errors() {
        let long = "x".repeat(200);
        let summary = Action::WeatherDidError(long).summary();
        assert!(summary.len() < 80);
        assert!(summary.ends_with("...\")"));
    }

    #[test]
    fn summary_compacts_readings() {
        let action = Action::WeatherDidLoad(WeatherReading {
            temperature_c: 20,
            wind_speed: 3,
            humidity_pct: 55,
            city_label: "London".into(),
        });
        assert_eq!(
            action.summary(),
            "WeatherDidLoad { 20°C, 3 km/h, 55% (London) }"
        );
    }
}
