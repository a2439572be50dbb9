//! Request serialization, execution and content negotiation.
//!
//! # Design
//! Split the way a host-does-IO client is split: `build_request` turns a
//! locator, headers and payload into an `HttpRequest`, `parse_response`
//! turns whatever the transport produced into an `Outcome`. `dispatch` glues
//! them around a single `Transport::perform` call.
//!
//! Transport failures and non-2xx statuses become `Outcome::Absent`. The only
//! response that raises is a 2xx `application/json` body that does not parse.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::locator::Locator;
use crate::transport::Transport;
use crate::types::{Absence, Content, Outcome};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Build the wire request for `method` against `locator`.
///
/// A non-empty payload forces `Content-Type: application/json`, replacing
/// any header of that name regardless of case, and becomes the JSON body.
/// An empty payload (`null`, `{}` or `[]`) sends no body and leaves the
/// headers untouched.
pub fn build_request(
    method: HttpMethod,
    locator: &Locator,
    headers: &BTreeMap<String, String>,
    payload: Option<&Value>,
) -> Result<HttpRequest, ApiError> {
    let mut headers: Vec<(String, String)> = headers
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let body = match payload.filter(|value| !is_empty(value)) {
        Some(value) => {
            let body =
                serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))?;
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case(CONTENT_TYPE));
            headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
            Some(body)
        }
        None => None,
    };

    Ok(HttpRequest {
        method,
        url: locator.build(),
        headers,
        body,
    })
}

/// Decode what the transport returned.
pub fn parse_response(
    result: Result<HttpResponse, TransportError>,
) -> Result<Outcome, ApiError> {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "request failed in transport, returning no content");
            return Ok(Outcome::Absent(Absence::Transport(err)));
        }
    };

    if !response.is_success() {
        warn!(status = response.status, "non-success status, returning no content");
        return Ok(Outcome::Absent(Absence::Status(response.status)));
    }

    let content_type = response.content_type();
    debug!(
        status = response.status,
        content_type = content_type.as_deref().unwrap_or("-"),
        "decoding response"
    );

    let content = match (content_type.as_deref(), response.body) {
        (Some(APPLICATION_JSON), Some(body)) => {
            let value: Value = serde_json::from_str(&body)
                .map_err(|e| ApiError::Deserialization(e.to_string()))?;
            Content::Json(value)
        }
        (_, body) => Content::Text(body.unwrap_or_default()),
    };
    Ok(Outcome::Content(content))
}

/// Build, perform and decode one request.
pub fn dispatch(
    transport: &dyn Transport,
    method: HttpMethod,
    locator: &Locator,
    headers: &BTreeMap<String, String>,
    payload: Option<&Value>,
) -> Result<Outcome, ApiError> {
    let request = build_request(method, locator, headers, payload)?;
    debug!(method = %request.method, url = %request.url, "dispatching request");
    parse_response(transport.perform(&request))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
