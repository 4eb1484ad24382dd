//! Extractors whose rejections render as [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies. These
//! wrappers keep every error response in the same JSON shape.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON body extractor; malformed bodies become `InvalidInput`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; unparsable segments become `InvalidInput`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
