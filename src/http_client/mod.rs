//! The shared HTTP transport.
//!
//! Every [`RestClient`](crate::RestClient) in the process dispatches through
//! one lazily-created `reqwest` client whose connection pool is safe for any
//! number of concurrent in-flight requests; no locking is applied around it
//! and it lives for the lifetime of the process. Timeouts, redirects, and
//! TLS behavior are whatever `reqwest` defaults to.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;


pub mod reqwest;

pub use self::reqwest::{execute, read_body, read_body_blocking};

static CLIENT: Lazy<::reqwest::Client> = Lazy::new(::reqwest::Client::new);

// Backs the blocking call forms only; the suspending forms run on whatever
// runtime the caller awaits them from.
static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("transport runtime")
});

pub(crate) fn shared() -> &'static ::reqwest::Client {
    &CLIENT
}

pub(crate) fn runtime() -> &'static Runtime {
    &RUNTIME
}
