use hyper::Response;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use tracing::error;

use super::types::{ErrorBody, StatusCode};

/// Serializes `body` into a JSON response. Serialization failures become a 500.
pub fn render_json<T: Serialize>(status: StatusCode, body: &T) -> Response<String> {
    match serde_json::to_string(body) {
        Ok(payload) => build(status, payload),
        Err(e) => {
            error!(target: "story_dash::response", "Failed to serialize response: {}", e);
            build(
                StatusCode::InternalError,
                r#"{"status":500,"message":"serialization failure"}"#.to_string(),
            )
        }
    }
}

pub fn render_error(status: StatusCode, message: impl ToString) -> Response<String> {
    render_json(status, &ErrorBody::new(status, message))
}

fn build(status: StatusCode, payload: String) -> Response<String> {
    let mut response = Response::new(payload);
    *response.status_mut() = status.into();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
