use std::collections::HashMap;

use http::header::CONTENT_TYPE;
use serde::Serialize;

use crate::{http_client, Method, Request, Response, Result};

#[cfg(test)]
mod tests;

/// A reusable endpoint/method/header/body template.
///
/// One instance describes one logical endpoint and method pairing and is
/// reused across many sends. All fields are public and mutable; each send
/// reads whatever the fields hold at the time the request is built, so
/// mutating a shared instance while another thread sends through it is a
/// caller hazard, not something handled here.
#[derive(Debug, Clone)]
pub struct RestClient {
    pub endpoint: String,
    pub method: Method,
    /// Content type attached to the body when one is present.
    pub content_type: String,
    /// Request body text; empty means no body is sent.
    pub body: String,
    /// Headers added to every request.
    pub request_headers: Option<HashMap<String, String>>,
    /// Headers describing the body. Only valid together with a non-empty
    /// body; supplying them without one fails the send.
    pub content_headers: Option<HashMap<String, String>>,
}

impl RestClient {
    pub fn new(
        endpoint: &str,
        method: Method,
        request_headers: Option<HashMap<String, String>>,
        content_headers: Option<HashMap<String, String>>,
    ) -> RestClient {
        RestClient {
            endpoint: endpoint.to_string(),
            method,
            content_type: "application/json".to_string(),
            body: String::new(),
            request_headers,
            content_headers,
        }
    }

    /// Serializes `payload` to JSON and stores it as the request body,
    /// leaving the content type at its `application/json` default.
    pub fn with_payload<T: Serialize>(
        endpoint: &str,
        method: Method,
        payload: &T,
        request_headers: Option<HashMap<String, String>>,
        content_headers: Option<HashMap<String, String>>,
    ) -> Result<RestClient> {
        let mut client = RestClient::new(endpoint, method, request_headers, content_headers);
        client.body = serde_json::to_string(payload)?;
        Ok(client)
    }

    /// Like [`with_payload`](RestClient::with_payload), but tags the body
    /// with `content_type` instead of the default.
    pub fn with_payload_as<T: Serialize>(
        endpoint: &str,
        method: Method,
        payload: &T,
        content_type: &str,
        request_headers: Option<HashMap<String, String>>,
        content_headers: Option<HashMap<String, String>>,
    ) -> Result<RestClient> {
        let mut client =
            RestClient::with_payload(endpoint, method, payload, request_headers, content_headers)?;
        client.content_type = content_type.to_string();
        Ok(client)
    }

    /// Send the configured request, suspending until the response arrives.
    ///
    /// The target URL is `endpoint` followed by `parameters`, concatenated
    /// verbatim: no separator is inserted and nothing is escaped, so the
    /// caller supplies any `/` or `?` it needs. The calling thread is not
    /// blocked while the exchange is outstanding.
    pub async fn send(&self, parameters: &str) -> Result<Response> {
        let request = self.build_request(&self.target(parameters))?;
        http_client::execute(request).await
    }

    /// Blocking form of [`send`](RestClient::send): awaits the same
    /// operation on the shared transport runtime, occupying the calling
    /// thread until it completes. Must not be called from within an async
    /// context.
    pub fn send_blocking(&self, parameters: &str) -> Result<Response> {
        http_client::runtime().block_on(self.send(parameters))
    }

    fn target(&self, parameters: &str) -> String {
        format!("{}{}", self.endpoint, parameters)
    }

    fn build_request(&self, url: &str) -> Result<Request> {
        let mut builder = http::Request::builder().method(self.method.clone()).uri(url);

        if let Some(headers) = &self.request_headers {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        if self.body.is_empty() {
            // Content headers describe a body; with no body there is
            // nothing for them to attach to.
            if self.content_headers.as_ref().map_or(false, |h| !h.is_empty()) {
                bail!("content headers supplied without a request body");
            }
            return builder
                .body(None)
                .map_err(|e| anyhow!("Http Request Error: {}", e));
        }

        builder = builder.header(CONTENT_TYPE, self.content_type.as_str());
        if let Some(headers) = &self.content_headers {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        builder
            .body(Some(self.body.clone()))
            .map_err(|e| anyhow!("Http Request Error: {}", e))
    }
}
