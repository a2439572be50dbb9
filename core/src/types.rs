//! Decoded results of a terminal chain call.
//!
//! # Design
//! A request either yields `Content` or is `Absent`. Absence is an explicit
//! variant carrying the reason, so callers that care can tell a dropped
//! connection from a 404; callers that do not can collapse it with
//! `Outcome::into_content`.

use serde_json::Value;

use crate::error::TransportError;

/// Body of a successful response, decoded according to its content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// `application/json` body parsed into a value.
    Json(Value),
    /// Any other content type, verbatim. Empty when the response had no body.
    Text(String),
}

impl Content {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(value) => Some(value),
            Content::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Json(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Content::Json(value) => Some(value),
            Content::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Content::Text(text) => Some(text),
            Content::Json(_) => None,
        }
    }
}

/// Why a request produced no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    /// The transport never produced a response.
    Transport(TransportError),
    /// The server answered with a non-2xx status.
    Status(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Content(Content),
    Absent(Absence),
}

impl Outcome {
    pub fn into_content(self) -> Option<Content> {
        match self {
            Outcome::Content(content) => Some(content),
            Outcome::Absent(_) => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Outcome::Absent(_))
    }
}
