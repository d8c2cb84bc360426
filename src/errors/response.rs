use axum::{
    response::{IntoResponse, Response, Redirect, Json},
    http::StatusCode,
};
use serde_json::json;
use urlencoding;
use crate::errors::{AppError, StoreError, WeatherError};

// The IntoResponse trait implementation converts AppError into a well-formed HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication errors redirect to login
            AppError::Auth(msg) => {
                Redirect::to(&format!("/login?error={}", urlencoding::encode(&msg)))
                    .into_response()
            }

            AppError::EmployeeNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Employee not found"}))
            ).into_response(),

            AppError::TaskNotFound(index) => (
                StatusCode::NOT_FOUND,
                format!("Task {} not found", index)
            ).into_response(),

            AppError::StaleTask(index) => (
                StatusCode::CONFLICT,
                format!("Task {} was changed by someone else, reload and try again", index)
            ).into_response(),

            AppError::BadPath(rejection) => {
                tracing::debug!("Rejected path: {}", rejection);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }

            // Missing fields and unexpected content types alike
            AppError::BadForm(rejection) => (
                StatusCode::BAD_REQUEST,
                rejection.body_text()
            ).into_response(),

            AppError::Weather(err) => convert_weather_error(err),

            AppError::Store(err) => convert_store_error(err),

            // Templates and static pages failing to load are server faults
            AppError::File(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("File error: {}", e)
            ).into_response(),
        }
    }
}

fn convert_store_error(err: StoreError) -> Response {
    match err {
        StoreError::InvalidField { .. } => (
            StatusCode::BAD_REQUEST,
            err.to_string()
        ).into_response(),

        _ => {
            tracing::error!("Storage failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", err)
            ).into_response()
        }
    }
}

fn convert_weather_error(err: WeatherError) -> Response {
    match err {
        WeatherError::CityNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "City not found"}))
        ).into_response(),

        _ => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": err.to_string()}))
        ).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn auth_errors_redirect_to_login_with_message() {
        let response = AppError::Auth("Session expired".into()).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login?error=Session%20expired"
        );
    }

    #[test]
    fn invalid_fields_are_client_errors() {
        let err = StoreError::InvalidField { field: "name", reason: "contains ','".into() };
        let response = AppError::Store(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn stale_tasks_conflict() {
        assert_eq!(AppError::StaleTask(2).into_response().status(), StatusCode::CONFLICT);
    }
}
