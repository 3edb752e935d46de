//! # rest-client
//!
//! rest-client is a minimal programmatic HTTP client. A [`RestClient`] is a
//! reusable template describing one endpoint/method pairing, its headers, and
//! an optional body; every call to [`send`](RestClient::send) builds a fresh
//! request from the template plus a parameter suffix and dispatches it over
//! a connection pool shared by the whole process.
//!
//! ## Usage
//!
//! Blocking, from ordinary synchronous code:
//!
//! ```no_run
//! use rest_client::{read_body_blocking, Method, RestClient};
//!
//! fn main() -> rest_client::Result<()> {
//!     let items = RestClient::new("http://localhost:8080/api", Method::GET, None, None);
//!     let response = items.send_blocking("/items")?;
//!     println!("{}", read_body_blocking(response)?);
//!     Ok(())
//! }
//! ```
//!
//! Suspending, from an async context:
//!
//! ```no_run
//! use rest_client::{read_body, Method, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> rest_client::Result<()> {
//!     let create = RestClient::with_payload(
//!         "http://localhost:8080/api/items",
//!         Method::POST,
//!         &serde_json::json!({"name": "bolt"}),
//!         None,
//!         None,
//!     )?;
//!     let response = create.send("").await?;
//!     println!("{}", read_body(response).await?);
//!     Ok(())
//! }
//! ```
//!
//! The target URL is always `endpoint` followed by the `send` parameter
//! string, concatenated verbatim: the caller supplies any `/` or `?` it
//! needs, and nothing is escaped or normalized.
//!
//! Responses are returned whatever their status code; 4xx/5xx are not
//! errors. Only transport faults (DNS, refused connections, TLS) fail a
//! send.

#[macro_use]
extern crate anyhow;

pub mod client;
pub mod http_client;

pub type Result<T> = anyhow::Result<T>;

/// A fully-built outgoing request: method, target, headers, and an optional
/// text body. Built per call and consumed by the transport.
pub type Request = http::Request<Option<String>>;

pub use crate::client::RestClient;
pub use crate::http_client::{read_body, read_body_blocking};
pub use http::Method;
pub use reqwest::Response;
