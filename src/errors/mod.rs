// Request-level error type plus the storage and weather errors it wraps.
use axum::extract::rejection::{FormRejection, PathRejection};
use thiserror::Error;

pub mod response;
pub mod store;
pub mod weather;

pub use store::{StoreError, StoreResult};
pub use weather::WeatherError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Employee {0} not found")]
    EmployeeNotFound(u64),

    #[error("Task {0} not found")]
    TaskNotFound(usize),

    // The expected text sent by the form no longer matches the task at that index
    #[error("Task {0} changed since the page was loaded")]
    StaleTask(usize),

    // A path parameter that does not parse means no such resource
    #[error("Bad path parameter: {0}")]
    BadPath(#[from] PathRejection),

    #[error("Bad form data: {0}")]
    BadForm(#[from] FormRejection),

    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
