//! Minimal-configuration REST client built from chained path segments.
//!
//! # Overview
//! A `Client` is configured once with a domain, an optional namespace and
//! default headers. Each request is described by chaining path segments and
//! finished with a verb, which sends it and decodes the response by content
//! type:
//!
//! ```no_run
//! use chainrest::{Client, ClientConfig};
//!
//! let api = Client::new(
//!     ClientConfig::new("www.example.com")
//!         .namespace("api/v1")
//!         .header("X-AuthToken", "token"),
//! );
//! if let Some(foo) = (&api / "foo" / 99).get()? {
//!     println!("{:?}", foo.as_json().map(|v| &v["name"]));
//! }
//! # Ok::<(), chainrest::ApiError>(())
//! ```
//!
//! # Design
//! - `Locator` turns domain, namespace and segments into a URL.
//! - `dispatch` builds an `HttpRequest`, hands it to a `Transport`, and
//!   decodes the `HttpResponse` (host-does-IO split).
//! - `Chain` is the builder; verbs consume it.
//! - Transport failures and non-2xx statuses are absorbed into
//!   `Outcome::Absent`; only a malformed JSON success body is an error.

pub mod chain;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod locator;
pub mod transport;
pub mod types;

pub use chain::{Chain, Client};
pub use config::{ClientConfig, Scheme};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use locator::Locator;
pub use transport::{Transport, UreqTransport};
pub use types::{Absence, Content, Outcome};
