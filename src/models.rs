//! Frontend Models
//!
//! Data structures matching the backend greeting payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::timestamp::parse_timestamp;

/// Wire shape of `/api/hello` (matches backend)
#[derive(Debug, Clone, Deserialize)]
struct GreetingPayload {
    message: String,
    timestamp: String,
    framework: String,
}

/// Validated greeting received from the backend.
///
/// Only constructed through [`Greeting::from_json`], so every instance has
/// all three fields populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    message: String,
    framework: String,
    timestamp: DateTime<Utc>,
}

/// Reasons a response body is not a usable greeting
#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("response body is not a greeting: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("field `{0}` is blank")]
    Blank(&'static str),
    #[error("timestamp `{0}` is not ISO-8601")]
    Timestamp(String),
}

impl Greeting {
    /// Decode and validate a JSON response body
    pub fn from_json(body: &str) -> Result<Self, GreetingError> {
        let payload: GreetingPayload = serde_json::from_str(body)?;
        Self::try_from(payload)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl TryFrom<GreetingPayload> for Greeting {
    type Error = GreetingError;

    fn try_from(payload: GreetingPayload) -> Result<Self, Self::Error> {
        if payload.message.trim().is_empty() {
            return Err(GreetingError::Blank("message"));
        }
        if payload.framework.trim().is_empty() {
            return Err(GreetingError::Blank("framework"));
        }
        let timestamp = parse_timestamp(&payload.timestamp)
            .ok_or_else(|| GreetingError::Timestamp(payload.timestamp.clone()))?;

        Ok(Self {
            message: payload.message,
            framework: payload.framework,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_json_valid() {
        let body = r#"{"message":"Hello","timestamp":"2024-01-01T00:00:00Z","framework":"Spring Boot"}"#;
        let greeting = Greeting::from_json(body).unwrap();
        assert_eq!(greeting.message(), "Hello");
        assert_eq!(greeting.framework(), "Spring Boot");
        assert_eq!(
            greeting.timestamp(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let body = r#"{"message":"Hi","timestamp":"2024-01-01T00:00:00Z","framework":"Axum","mode":"development"}"#;
        assert!(Greeting::from_json(body).is_ok());
    }

    #[test]
    fn test_from_json_not_json() {
        let err = Greeting::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GreetingError::Decode(_)));
    }

    #[test]
    fn test_from_json_missing_field() {
        let body = r#"{"message":"Hello","framework":"Spring Boot"}"#;
        assert!(matches!(Greeting::from_json(body), Err(GreetingError::Decode(_))));
    }

    #[test]
    fn test_from_json_wrong_type() {
        let body = r#"{"message":42,"timestamp":"2024-01-01T00:00:00Z","framework":"Spring Boot"}"#;
        assert!(matches!(Greeting::from_json(body), Err(GreetingError::Decode(_))));
    }

    #[test]
    fn test_from_json_blank_fields() {
        let body = r#"{"message":"  ","timestamp":"2024-01-01T00:00:00Z","framework":"Spring Boot"}"#;
        assert!(matches!(
            Greeting::from_json(body),
            Err(GreetingError::Blank("message"))
        ));

        let body = r#"{"message":"Hello","timestamp":"2024-01-01T00:00:00Z","framework":""}"#;
        assert!(matches!(
            Greeting::from_json(body),
            Err(GreetingError::Blank("framework"))
        ));
    }

    #[test]
    fn test_from_json_accepts_wall_clock_timestamps() {
        for timestamp in ["2024-03-10T02:30:00", "2024-01-01T12:30", "2024-01-01"] {
            let body = format!(
                r#"{{"message":"Hello","timestamp":"{}","framework":"Spring Boot"}}"#,
                timestamp
            );
            let greeting = Greeting::from_json(&body).unwrap();
            assert_eq!(greeting.message(), "Hello");
        }
    }

    #[test]
    fn test_from_json_bad_timestamp() {
        let body = r#"{"message":"Hello","timestamp":"noon","framework":"Spring Boot"}"#;
        match Greeting::from_json(body) {
            Err(GreetingError::Timestamp(raw)) => assert_eq!(raw, "noon"),
            other => panic!("expected timestamp error, got {:?}", other),
        }
    }
}
