use std::collections::HashMap;
use std::sync::Arc;
use reqwest::StatusCode;
use serde::Deserialize;
use crate::config::WeatherConfig;
use crate::errors::WeatherError;
use crate::models::WeatherReport;

/// Capitalizes the first letter of every word and lowercases the rest, so "new YORK" becomes
/// "New York". A word starts at any letter that does not follow another letter.
pub fn title_case(city: &str) -> String {
    let mut out = String::with_capacity(city.len());
    let mut previous_was_letter = false;
    for c in city.chars() {
        if c.is_alphabetic() {
            if previous_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_was_letter = true;
        } else {
            out.push(c);
            previous_was_letter = false;
        }
    }
    out
}

/// Fixed table of reports keyed by title-cased city name.
pub struct MockWeather {
    table: HashMap<String, WeatherReport>,
}

impl MockWeather {
    pub fn builtin() -> Self {
        let entries = [
            ("New York", 22.0, 60, "Sunny", 3.5),
            ("London", 15.0, 80, "Cloudy", 5.0),
            ("Tokyo", 18.0, 65, "Rainy", 2.1),
            ("Paris", 17.0, 70, "Partly cloudy", 3.0),
            ("Sydney", 25.0, 55, "Clear", 6.2),
        ];
        let table = entries
            .into_iter()
            .map(|(city, temperature, humidity, description, wind_speed)| {
                (
                    city.to_string(),
                    WeatherReport {
                        temperature,
                        humidity,
                        description: description.to_string(),
                        wind_speed,
                    },
                )
            })
            .collect();
        Self { table }
    }

    pub fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let key = title_case(city.trim());
        self.table
            .get(&key)
            .cloned()
            .ok_or(WeatherError::CityNotFound(key))
    }
}

#[derive(Deserialize)]
struct OpenWeatherPayload {
    main: OpenWeatherMain,
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
    #[serde(default)]
    wind: OpenWeatherWind,
}

#[derive(Deserialize)]
struct OpenWeatherMain {
    temp: f64,
    humidity: u8,
}

#[derive(Deserialize)]
struct OpenWeatherCondition {
    description: String,
}

#[derive(Deserialize, Default)]
struct OpenWeatherWind {
    #[serde(default)]
    speed: f64,
}

impl From<OpenWeatherPayload> for WeatherReport {
    fn from(payload: OpenWeatherPayload) -> Self {
        WeatherReport {
            temperature: payload.main.temp,
            humidity: payload.main.humidity,
            description: payload
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_default(),
            wind_speed: payload.wind.speed,
        }
    }
}

/// Client for an OpenWeatherMap-compatible `/data/2.5/weather` endpoint.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        tracing::debug!("Requesting current weather for {} from {}", city, url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        check_status(response.status(), city)?;
        let payload: OpenWeatherPayload = response.json().await?;
        Ok(payload.into())
    }
}

fn check_status(status: StatusCode, city: &str) -> Result<(), WeatherError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(city.to_string())),
        other => Err(WeatherError::Upstream(other.as_u16())),
    }
}

/// Where `/` lookups are answered from.
#[derive(Clone)]
pub enum WeatherSource {
    Mock(Arc<MockWeather>),
    Live(OpenWeatherClient),
}

impl WeatherSource {
    pub fn from_config(config: &WeatherConfig, mock: Arc<MockWeather>) -> Self {
        match config.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => {
                tracing::info!("Using live weather service at {}", config.base_url);
                WeatherSource::Live(OpenWeatherClient::new(&config.base_url, key))
            }
            None => {
                tracing::info!("No weather API key configured, using the mock table");
                WeatherSource::Mock(mock)
            }
        }
    }

    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        match self {
            WeatherSource::Mock(mock) => mock.lookup(city),
            WeatherSource::Live(client) => client.fetch(city).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_matches_word_capitalization() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("LONDON"), "London");
        assert_eq!(title_case("rio de janeiro"), "Rio De Janeiro");
        assert_eq!(title_case("saint-étienne"), "Saint-Étienne");
    }

    #[test]
    fn mock_lookup_is_case_insensitive() {
        let mock = MockWeather::builtin();
        let report = mock.lookup("  tokyo ").unwrap();
        assert_eq!(report.description, "Rainy");
        assert_eq!(report.humidity, 65);
    }

    #[test]
    fn mock_lookup_unknown_city() {
        let mock = MockWeather::builtin();
        assert!(matches!(
            mock.lookup("atlantis"),
            Err(WeatherError::CityNotFound(city)) if city == "Atlantis"
        ));
    }

    #[test]
    fn upstream_status_mapping() {
        assert!(check_status(StatusCode::OK, "Oslo").is_ok());
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND, "Oslo"),
            Err(WeatherError::CityNotFound(_))
        ));
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED, "Oslo"),
            Err(WeatherError::Upstream(401))
        ));
    }

    #[test]
    fn payload_converts_to_report() {
        let payload: OpenWeatherPayload = serde_json::from_str(
            r#"{"name":"Oslo","main":{"temp":3.5,"humidity":81},
                "weather":[{"description":"light snow"}],"wind":{"speed":2.4}}"#,
        )
        .unwrap();
        let report = WeatherReport::from(payload);
        assert_eq!(report.temperature, 3.5);
        assert_eq!(report.humidity, 81);
        assert_eq!(report.description, "light snow");
        assert_eq!(report.wind_speed, 2.4);
    }

    #[tokio::test]
    async fn unconfigured_source_uses_mock() {
        let config = WeatherConfig { api_key: None, base_url: "http://localhost".into() };
        let source = WeatherSource::from_config(&config, Arc::new(MockWeather::builtin()));
        assert_eq!(source.lookup("paris").await.unwrap().temperature, 17.0);
    }
}
