mod credentials;
mod weather;

pub use credentials::{Authenticator, verifier_for};
pub use weather::{MockWeather, WeatherSource};
