use axum::extract::{FromRequest, FromRequestParts};
use crate::errors::AppError;

/// `Path` whose rejections become [`AppError::BadPath`], answered with 404 as for an unmatched
/// route: `/delete/-1` names no task rather than being a malformed request.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct RoutePath<T>(pub T);

/// `Form` whose rejections become [`AppError::BadForm`], answered with 400.
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct FormData<T>(pub T);
