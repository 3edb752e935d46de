use std::convert::TryInto;

use log::debug;

use crate::http_client::{runtime, shared};
use crate::{Request, Response, Result};

/// Dispatch a built request over the shared transport, suspending until the
/// response arrives.
///
/// Only transport faults fail the exchange; the response is returned
/// whatever its HTTP status.
pub async fn execute(request: Request) -> Result<Response> {
    // reqwest doesn't deal with the non-existence of a body in their TryFrom
    // method so take it out and deal with it separately
    let (parts, body) = request.into_parts();
    let mut request: reqwest::Request = http::Request::from_parts(parts, "").try_into()?;
    // override our filler body
    *request.body_mut() = body.map(Into::into);

    debug!("{} {}", request.method(), request.url());
    let response = shared().execute(request).await?;

    Ok(response)
}

/// Read the full response body into a string, consuming the response.
pub async fn read_body(response: Response) -> Result<String> {
    Ok(response.text().await?)
}

/// Blocking form of [`read_body`]. Must not be called from within an async
/// context.
pub fn read_body_blocking(response: Response) -> Result<String> {
    runtime().block_on(read_body(response))
}
