use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature: f64,   // degrees Celsius
    pub humidity: u8,       // percent
    pub description: String,
    pub wind_speed: f64,    // metres per second
}
