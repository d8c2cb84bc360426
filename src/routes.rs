use axum::{
    routing::{get, post},
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
};
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use crate::config::{AppKind, Config};
use crate::errors::StoreResult;
use crate::handlers::{self, employees, todo, weather};
use crate::middleware;
use crate::state::{EmployeeState, TodoState, WeatherState};

/// Builds the router for the app selected by `server.app`.
pub fn build(config: &Config) -> StoreResult<Router> {
    let app = match config.server.app {
        AppKind::Employees => employee_router(EmployeeState::load(config)?),
        AppKind::Todo => todo_router(TodoState::new(config)),
        AppKind::Weather => weather_router(WeatherState::new(config)),
    };

    Ok(app
        // Static files
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        // Request size limit from config
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size)))
}

pub fn employee_router(state: EmployeeState) -> Router {
    // Session store setup
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_name("session");

    Router::new()
        .route("/", get(employees::index))
        // Auth routes
        .route("/login", get(handlers::serve_login_page).post(handlers::handle_login))
        .route("/logout", post(handlers::handle_logout))
        // Employee routes
        .route("/employees/add", post(employees::create_employee))
        .route("/employees", get(employees::list_employees))
        .route("/employees/:employee_id", get(employees::get_employee))
        .route("/employees/:employee_id/edit", get(employees::edit_employee))
        .route("/employees/:employee_id/update", post(employees::update_employee))
        .route("/employees/:employee_id/delete", post(employees::delete_employee))
        // Every route above except /login needs a logged-in user
        .layer(from_fn_with_state(state.clone(), middleware::require_auth))
        .layer(session_layer)
        .with_state(state)
}

pub fn todo_router(state: TodoState) -> Router {
    Router::new()
        .route("/", get(todo::index))
        .route("/add", get(todo::serve_add_page).post(todo::add_task))
        .route("/edit/:task_id", get(todo::serve_edit_page).post(todo::edit_task))
        .route("/delete/:task_id", post(todo::delete_task))
        .with_state(state)
}

pub fn weather_router(state: WeatherState) -> Router {
    Router::new()
        .route("/", get(weather::serve_index).post(weather::lookup))
        .route("/weather", post(weather::mock_lookup))
        .route("/api/weather/:city", get(weather::api_weather))
        .with_state(state)
}
