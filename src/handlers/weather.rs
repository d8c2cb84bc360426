use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response, Json},
};
use crate::errors::{AppResult, WeatherError};
use crate::models::{CityForm, WeatherReport};
use crate::state::WeatherState;
use crate::views::{escape, Templates};
use super::extract::FormData;

pub async fn serve_index(
    State(state): State<WeatherState>,
) -> AppResult<Response> {
    Ok(state.templates.render("index.html", &[])?.into_response())
}

/// Form on `/`: answered by the configured source, which may be the live service.
pub async fn lookup(
    State(state): State<WeatherState>,
    FormData(form): FormData<CityForm>,
) -> AppResult<Response> {
    let city = form.city.trim();
    if city.is_empty() {
        return Ok(state.templates.render("index.html", &[])?.into_response());
    }

    tracing::info!("Weather lookup for {}", city);
    let result = state.source.lookup(city).await.map_err(|e| {
        match &e {
            WeatherError::CityNotFound(_) => tracing::warn!("{}", e),
            _ => tracing::error!("Weather lookup for {} failed: {}", city, e),
        }
        e.user_message()
    });
    render_result(&state.templates, city, result)
}

/// Form on `/weather`: answered from the mock table.
pub async fn mock_lookup(
    State(state): State<WeatherState>,
    FormData(form): FormData<CityForm>,
) -> AppResult<Response> {
    let city = form.city.trim();
    tracing::info!("Mock weather lookup for {}", city);
    let result = state.mock.lookup(city).map_err(|e| {
        tracing::warn!("{}", e);
        "City not found".to_string()
    });
    render_result(&state.templates, city, result)
}

pub async fn api_weather(
    State(state): State<WeatherState>,
    Path(city): Path<String>,
) -> AppResult<Json<WeatherReport>> {
    tracing::debug!("Mock API request for {}", city);
    Ok(Json(state.mock.lookup(&city)?))
}

fn render_result(
    templates: &Templates,
    city: &str,
    result: Result<WeatherReport, String>,
) -> AppResult<Response> {
    let details = match result {
        Ok(report) => format!(
            r#"<ul class="weather-details">
                <li>Temperature: {:.1} &deg;C</li>
                <li>Conditions: {}</li>
                <li>Humidity: {}%</li>
                <li>Wind speed: {:.1} m/s</li>
            </ul>"#,
            report.temperature,
            escape(&report.description),
            report.humidity,
            report.wind_speed,
        ),
        Err(message) => format!(r#"<p class="error">{}</p>"#, escape(&message)),
    };

    let html = templates.render(
        "result.html",
        &[("city", &escape(city)), ("details", &details)],
    )?;
    Ok(html.into_response())
}
