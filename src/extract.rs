use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections rendered through [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
