//! API helper functions

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::errors::RedlinkError;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// Build a JSON envelope response
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 200 OK with payload
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// Build an error response from a RedlinkError
///
/// Maps the error to its HTTP status and numeric code. Credential failures
/// additionally carry a `reason` header for non-JSON consumers.
pub fn error_from_redlink(err: &RedlinkError) -> HttpResponse {
    let status = err.http_status();
    let code = ErrorCode::from(err);

    let mut builder = HttpResponse::build(status);
    builder.append_header(("Content-Type", "application/json; charset=utf-8"));

    match err {
        RedlinkError::MissingCredential(_) => {
            builder.append_header(("reason", "password required"));
        }
        RedlinkError::WrongCredential(_) => {
            builder.append_header(("reason", "wrong password"));
        }
        _ => {}
    }

    builder.json(ApiResponse::<()> {
        code: code as i32,
        message: err.message().to_string(),
        data: None,
    })
}
