//! Backend API
//!
//! Frontend bindings to the backend HTTP endpoints.

mod hello;

use thiserror::Error;

use crate::models::GreetingError;

pub use hello::*;

/// Any failure of a backend call. The page treats every variant the same.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("backend responded with HTTP {0}")]
    Status(u16),
    #[error(transparent)]
    Invalid(#[from] GreetingError),
}
