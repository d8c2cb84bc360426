use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Weather service returned status {0}")]
    Upstream(u16),

    #[error("Weather service unavailable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl WeatherError {
    /// Message shown inside the result view.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::CityNotFound(_) => "City NOT FOUND 404".to_string(),
            WeatherError::Upstream(status) => format!("Weather service error {}", status),
            WeatherError::Transport(_) => "Weather service unavailable".to_string(),
        }
    }
}
