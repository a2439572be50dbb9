//! Chained path building terminated by an HTTP verb.
//!
//! # Design
//! `Client` holds the frozen `ClientConfig` and a transport. Every request
//! starts a fresh `Chain`, which owns its own `Locator` and header copy, so
//! concurrent chains share nothing mutable. Path segments are appended with
//! `segment` or the `/` operator; `get`, `post`, `put` and `delete` take the
//! chain by value, so a chain cannot be used again after it has been sent.
//!
//! ```no_run
//! use chainrest::{Client, ClientConfig};
//! use serde_json::json;
//!
//! let api = Client::new(ClientConfig::new("www.example.com").namespace("api/v1"));
//! let foo = (&api / "foo" / 99).get()?;
//! let created = api.segment("foo").segment("create").post(json!({"name": "New Foo"}))?;
//! # Ok::<(), chainrest::ApiError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Div;
use std::sync::Arc;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::dispatch::dispatch;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::locator::Locator;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Content, Outcome};

/// Entry point bound to one domain. Cheap to clone; clones share the config.
#[derive(Debug, Clone)]
pub struct Client<T = UreqTransport> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl Client<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Start an empty chain rooted at the configured namespace.
    pub fn chain(&self) -> Chain<'_> {
        let locator = Locator::new(self.config.domain.clone())
            .with_scheme(self.config.scheme)
            .with_namespace(self.config.namespace.clone());
        Chain {
            transport: &self.transport,
            locator,
            headers: self.config.headers.clone(),
        }
    }

    pub fn segment(&self, segment: impl fmt::Display) -> Chain<'_> {
        self.chain().segment(segment)
    }

    pub fn get(&self) -> Result<Option<Content>, ApiError> {
        self.chain().get()
    }

    pub fn post(&self, data: impl Serialize) -> Result<Option<Content>, ApiError> {
        self.chain().post(data)
    }

    pub fn put(&self, data: impl Serialize) -> Result<Option<Content>, ApiError> {
        self.chain().put(data)
    }

    pub fn delete(&self) -> Result<Option<Content>, ApiError> {
        self.chain().delete()
    }
}

impl<'a, T: Transport, S: fmt::Display> Div<S> for &'a Client<T> {
    type Output = Chain<'a>;

    fn div(self, segment: S) -> Chain<'a> {
        self.segment(segment)
    }
}

/// One request in the making: a locator plus headers, bound to a transport.
pub struct Chain<'a> {
    transport: &'a dyn Transport,
    locator: Locator,
    headers: BTreeMap<String, String>,
}

impl<'a> Chain<'a> {
    /// Append the string form of `segment` to the path. Verb names such as
    /// `"get"` are ordinary segments here.
    pub fn segment(mut self, segment: impl fmt::Display) -> Self {
        self.locator.push(segment);
        self
    }

    pub fn segments<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for segment in segments {
            self.locator.push(segment);
        }
        self
    }

    /// Add a header for this request only.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn get(self) -> Result<Option<Content>, ApiError> {
        self.send(HttpMethod::Get, ()).map(Outcome::into_content)
    }

    /// POST `data` as JSON. `()` or an empty object sends no body.
    pub fn post(self, data: impl Serialize) -> Result<Option<Content>, ApiError> {
        self.send(HttpMethod::Post, data).map(Outcome::into_content)
    }

    /// PUT `data` as JSON. `()` or an empty object sends no body.
    pub fn put(self, data: impl Serialize) -> Result<Option<Content>, ApiError> {
        self.send(HttpMethod::Put, data).map(Outcome::into_content)
    }

    pub fn delete(self) -> Result<Option<Content>, ApiError> {
        self.send(HttpMethod::Delete, ()).map(Outcome::into_content)
    }

    /// Send the request and return the full outcome, including why it is
    /// absent when it is.
    pub fn send(self, method: HttpMethod, data: impl Serialize) -> Result<Outcome, ApiError> {
        let payload =
            serde_json::to_value(data).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let payload = match method {
            HttpMethod::Post | HttpMethod::Put => Some(&payload),
            HttpMethod::Get | HttpMethod::Delete => None,
        };
        dispatch(self.transport, method, &self.locator, &self.headers, payload)
    }
}

impl<S: fmt::Display> Div<S> for Chain<'_> {
    type Output = Self;

    fn div(self, segment: S) -> Self {
        self.segment(segment)
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("locator", &self.locator)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
