use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::{Request, State},
    body::Body,
};
use tower_sessions::Session;
use crate::handlers::USER_SESSION;
use crate::state::EmployeeState;

pub async fn require_auth(
    State(state): State<EmployeeState>,
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    if req.uri().path() == "/login" {
        return next.run(req).await;
    }

    match session.get::<String>(USER_SESSION).await {
        Ok(Some(username)) if state.auth.is_known(&username) => next.run(req).await,
        Ok(Some(username)) => {
            tracing::warn!("Session user {} is no longer in the users file", username);
            Redirect::to("/login").into_response()
        }
        Ok(None) => Redirect::to("/login").into_response(),
        Err(e) => {
            tracing::error!("Session error: {}", e);
            Redirect::to("/login").into_response()
        }
    }
}
