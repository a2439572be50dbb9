//! Fixture HTTP service exercising every branch of the chain client:
//! plain text, JSON, echoed payloads, header checks, failures and a broken
//! JSON body.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    extract::Path,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;

pub const AUTH_HEADER: &str = "x-authtoken";
pub const AUTH_TOKEN: &str = "test_token";

/// What `/echo/...` saw, returned as JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/bar", get(bar))
        .route("/bar/84", get(cheers))
        .route("/bar/99", get(projects))
        .route("/secure", get(secure))
        .route("/broken", get(broken))
        .route("/fail", get(fail))
        .route("/api/v1/foo/create", post(create_foo))
        .route(
            "/api/v1/foo/{id}",
            get(get_foo).put(update_foo).delete(delete_foo),
        )
        .route("/echo", any(echo))
        .route("/echo/{*rest}", any(echo))
        .route("/gone/{id}", delete(gone))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn root() -> &'static str {
    "I am root!!"
}

async fn bar() -> &'static str {
    "A bear walked into a bar..."
}

async fn cheers() -> &'static str {
    "Where Everybody Knows Your Name"
}

async fn projects() -> Json<Vec<Project>> {
    Json(vec![Project {
        name: "GradesFirst".to_string(),
    }])
}

async fn secure(headers: HeaderMap) -> Result<&'static str, StatusCode> {
    match headers.get(AUTH_HEADER).and_then(|v| v.to_str().ok()) {
        Some(AUTH_TOKEN) => Ok("Where Everybody Knows Your Name"),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn broken() -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

async fn fail() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "something went wrong")
}

async fn create_foo(Json(input): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(input))
}

async fn get_foo(Path(id): Path<u64>) -> Json<Value> {
    Json(serde_json::json!({ "id": id, "name": "Foo" }))
}

async fn update_foo(Path(id): Path<u64>, Json(input): Json<Value>) -> Json<Value> {
    let mut updated = input;
    if let Value::Object(map) = &mut updated {
        map.insert("id".to_string(), Value::from(id));
    }
    Json(updated)
}

async fn delete_foo(Path(_id): Path<u64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn gone(Path(_id): Path<u64>) -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_serializes_to_json() {
        let project = Project {
            name: "GradesFirst".to_string(),
        };
        let json = serde_json::to_value(vec![project]).unwrap();
        assert_eq!(json[0]["name"], "GradesFirst");
    }

    #[test]
    fn echo_roundtrips_through_json() {
        let echo = Echo {
            method: "PUT".to_string(),
            path: "/echo/a".to_string(),
            headers: BTreeMap::from([("x-one".to_string(), "1".to_string())]),
            body: "{}".to_string(),
        };
        let json = serde_json::to_string(&echo).unwrap();
        let back: Echo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, echo);
    }
}
