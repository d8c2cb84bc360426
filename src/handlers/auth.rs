use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{LoginForm, LoginQuery};
use crate::state::EmployeeState;
use crate::views::escape;
use super::extract::FormData;

/// Session key holding the logged-in username.
pub const USER_SESSION: &str = "user_session";

pub async fn serve_login_page(
    State(state): State<EmployeeState>,
    Query(query): Query<LoginQuery>,
) -> AppResult<Response> {
    let error = query.error.as_deref().map(escape).unwrap_or_default();
    Ok(state.templates.render("login.html", &[("error", &error)])?.into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<EmployeeState>,
    session: Session,
    FormData(login_form): FormData<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", login_form.username);

    if !state.auth.authenticate(&login_form.username, &login_form.password) {
        tracing::warn!("Invalid credentials for user: {}", login_form.username);
        let page = state
            .templates
            .render("login.html", &[("error", "Invalid credentials")])?;
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    }

    // Ids issued before login are never authenticated
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?;
    session
        .insert(USER_SESSION, &login_form.username)
        .await
        .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?;

    tracing::info!("User {} logged in", login_form.username);
    Ok(Redirect::to("/").into_response())
}

pub async fn handle_logout(
    session: Session,
) -> Response {
    match session.remove::<String>(USER_SESSION).await {
        Ok(Some(username)) => tracing::info!("User {} logged out", username),
        Ok(None) => {}
        Err(e) => tracing::warn!("Session removal error: {}", e),
    }
    Redirect::to("/login").into_response()
}

/// Username of the logged-in user, for handlers behind `require_auth`.
pub(crate) async fn current_user(session: &Session) -> AppResult<String> {
    session
        .get::<String>(USER_SESSION)
        .await
        .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?
        .ok_or_else(|| AppError::Auth("Not authenticated".into()))
}
