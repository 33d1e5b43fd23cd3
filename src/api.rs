//! OpenWeatherMap current-weather client
//!
//! One endpoint, one request per trigger. Intent actions spawn the fetch as a
//! detached task; the task sends `WeatherDidLoad` or `WeatherDidError` back
//! over the action channel. No retry, no app-level timeout, no cancellation
//! of superseded requests.

use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::state::WeatherReading;

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Why a fetch failed. All variants collapse to the same user-visible alert;
/// the distinction only matters for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection, transport timeout, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status (unknown city, bad
    /// credential, rate limiting).
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not match the expected shape.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: OwMain,
    wind: OwWind,
}

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a client from configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: OPENWEATHER_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the current weather for a city.
    ///
    /// The city value is interpolated into the query string literally, the
    /// way the upstream contract expects it.
    pub async fn current_by_city(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let url = format!(
            "{}?q={}&units=metric&appid={}",
            self.base_url, city, self.api_key
        );

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        let parsed: CurrentResponse = serde_json::from_str(&body)?;

        Ok(reading_from_response(city, &parsed))
    }
}

/// Build a reading from a decoded response. Temperature and wind speed are
/// floored; humidity is used as provided. The city label is the query that
/// produced this reading, not anything the upstream echoes back.
fn reading_from_response(city: &str, response: &CurrentResponse) -> WeatherReading {
    WeatherReading {
        temperature_c: response.main.temp.floor() as i32,
        wind_speed: response.wind.speed.floor() as i32,
        humidity_pct: response.main.humidity,
        city_label: city.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(temp: f64, speed: f64, humidity: u8) -> CurrentResponse {
        CurrentResponse {
            main: OwMain { temp, humidity },
            wind: OwWind { speed },
        }
    }

    #[test]
    fn floors_temperature_and_wind() {
        let reading = reading_from_response("London", &response(20.9, 3.2, 55));

        assert_eq!(reading.temperature_c, 20);
        assert_eq!(reading.wind_speed, 3);
        assert_eq!(reading.humidity_pct, 55);
        assert_eq!(reading.city_label, "London");
    }

    #[test]
    fn floor_rounds_negative_temperatures_down() {
        let reading = reading_from_response("Oslo", &response(-3.7, 0.4, 81));

        assert_eq!(reading.temperature_c, -4);
        assert_eq!(reading.wind_speed, 0);
    }

    #[test]
    fn decodes_expected_payload_shape() {
        let body = r#"{
            "coord": {"lon": -0.13, "lat": 51.51},
            "main": {"temp": 20.9, "feels_like": 20.4, "humidity": 55},
            "wind": {"speed": 3.2, "deg": 240},
            "name": "London"
        }"#;

        let parsed: CurrentResponse = serde_json::from_str(body).expect("valid payload");
        let reading = reading_from_response("London", &parsed);

        assert_eq!(reading.temperature_c, 20);
        assert_eq!(reading.wind_speed, 3);
        assert_eq!(reading.humidity_pct, 55);
    }

    #[test]
    fn missing_fields_are_a_payload_error() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;
        assert!(serde_json::from_str::<CurrentResponse>(body).is_err());
    }
}
