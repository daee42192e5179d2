use crate::interface_adapters::protocol::ErrorResponse;
use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;

const ENCODE_FAILURE: &str = "Failed to encode data";

fn json_response(status: StatusCode, body: Body) -> Response {
    let mut response = (status, body).into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn encode<T: Serialize>(status: StatusCode, data: &T) -> Result<Response, serde_json::Error> {
    let body = serde_json::to_vec(data)?;
    Ok(json_response(status, Body::from(body)))
}

// Last resort when even the error envelope cannot be encoded.
pub fn bare_internal_error() -> Response {
    json_response(StatusCode::INTERNAL_SERVER_ERROR, Body::empty())
}

// Write a 200 JSON body, falling back to a 500 error body on encode failure.
pub fn send<T: Serialize>(data: &T) -> Response {
    encode(StatusCode::OK, data).unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to encode response body.");
        error(&ErrorResponse {
            message: ENCODE_FAILURE.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        })
    })
}

// Write an error envelope with the status it carries.
pub fn error(err: &ErrorResponse) -> Response {
    let status = StatusCode::from_u16(err.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    encode(status, err).unwrap_or_else(|encode_err| {
        tracing::error!(error = %encode_err, "failed to encode error body.");
        bare_internal_error()
    })
}
