//! Application configuration, parsed from environment variables.

/// Process configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// OpenWeatherMap API credential. Absence is not validated here; it
    /// manifests as authentication failures from the upstream service.
    pub api_key: String,

    /// Optional log file path. The terminal is owned by the TUI, so tracing
    /// output only goes somewhere when this is set.
    pub log_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENWEATHER_API_KEY").unwrap_or_default(),
            log_file: std::env::var("SKYCAST_LOG").ok(),
        }
    }
}
