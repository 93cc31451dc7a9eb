//! Connection Status
//!
//! Loading -> Loaded | Failed state machine for the greeting fetch.

use std::fmt::Display;

use crate::config::{FAILED_TEXT, LOADING_TEXT};
use crate::models::Greeting;
use crate::mount::MountGuard;
use crate::timestamp::format_local;

/// State of the one-shot greeting fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Fetch has not settled yet
    #[default]
    Loading,
    /// Fetch succeeded with a validated greeting
    Loaded(Greeting),
    /// Fetch or decoding failed
    Failed,
}

/// Text lines of the status region, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusDisplay {
    Loading(&'static str),
    Loaded {
        message: String,
        framework: String,
        timestamp: String,
    },
    Failed(&'static str),
}

impl ConnectionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[cfg(test)]
    pub fn greeting(&self) -> Option<&Greeting> {
        match self {
            Self::Loaded(greeting) => Some(greeting),
            _ => None,
        }
    }

    /// Settle the fetch outcome.
    ///
    /// Only `Loading` transitions; `Loaded` and `Failed` are terminal.
    /// Returns whether the state changed.
    pub fn settle<E>(&mut self, outcome: Result<Greeting, E>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(greeting) => Self::Loaded(greeting),
            Err(_) => Self::Failed,
        };
        true
    }

    /// Apply a fetch outcome on behalf of a spawned task.
    ///
    /// Dropped when the page has unmounted. Failures are logged here, as
    /// this is the only place they surface.
    pub fn deliver<E: Display>(&mut self, guard: &MountGuard, outcome: Result<Greeting, E>) {
        if !guard.is_live() {
            log::debug!("[PAGE] Dropping greeting response, page unmounted");
            return;
        }
        match &outcome {
            Ok(greeting) => log::info!("[PAGE] Connected to {}", greeting.framework()),
            Err(err) => log::error!("[PAGE] Error fetching data: {}", err),
        }
        if !self.settle(outcome) {
            log::debug!("[PAGE] Ignoring greeting response, status already settled");
        }
    }

    pub fn display(&self) -> StatusDisplay {
        match self {
            Self::Loading => StatusDisplay::Loading(LOADING_TEXT),
            Self::Loaded(greeting) => StatusDisplay::Loaded {
                message: greeting.message().to_string(),
                framework: format!("Framework: {}", greeting.framework()),
                timestamp: format!("Timestamp: {}", format_local(&greeting.timestamp())),
            },
            Self::Failed => StatusDisplay::Failed(FAILED_TEXT),
        }
    }
}
