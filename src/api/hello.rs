//! Hello Endpoint
//!
//! `GET /api/hello`, the greeting shown in the Backend Connection card.

use gloo_net::http::Request;

use super::FetchError;
use crate::config::HELLO_ENDPOINT;
use crate::models::Greeting;

/// Fetch the greeting once. No retry, no timeout.
pub async fn fetch_greeting() -> Result<Greeting, FetchError> {
    log::debug!("[API] GET {}", HELLO_ENDPOINT);
    let resp = Request::get(HELLO_ENDPOINT).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    interpret_response(status, &body)
}

/// Turn a raw HTTP status and body into a greeting
pub(crate) fn interpret_response(status: u16, body: &str) -> Result<Greeting, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(Greeting::from_json(body)?)
}
