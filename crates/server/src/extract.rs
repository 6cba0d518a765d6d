//! Extractors whose rejections answer with the same JSON error body as the handlers.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::JsonApiError;

/// `axum::Json` with malformed or mistyped bodies reported as 400 `JsonApiError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with unparsable segments reported as 400 `JsonApiError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ApiPath<T>(pub T);
