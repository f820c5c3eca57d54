use thiserror::Error;

/// Failures at the persistence service boundary, normalized before
/// any view code sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Normalize a non-2xx service payload. The shape is not
    /// guaranteed, so fall back through the keys PostgREST has been
    /// seen to use before echoing the raw text.
    pub fn from_service_payload(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error", "details", "hint"]
                    .iter()
                    .find_map(|key| value.get(key)?.as_str().map(str::to_string))
            })
            .unwrap_or_else(|| body.trim().to_string());
        StoreError::Service { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_message_field() {
        let err = StoreError::from_service_payload(
            409,
            r#"{"code":"23505","message":"duplicate key value","details":"Key exists"}"#,
        );
        assert_eq!(
            err,
            StoreError::Service {
                status: 409,
                message: "duplicate key value".to_string()
            }
        );
    }

    #[test]
    fn falls_back_through_known_keys() {
        let err = StoreError::from_service_payload(400, r#"{"error":"invalid api key"}"#);
        assert!(matches!(err, StoreError::Service { message, .. } if message == "invalid api key"));

        let err = StoreError::from_service_payload(400, r#"{"details":"missing column"}"#);
        assert!(matches!(err, StoreError::Service { message, .. } if message == "missing column"));
    }

    #[test]
    fn echoes_non_json_bodies_verbatim() {
        let err = StoreError::from_service_payload(502, "Bad Gateway\n");
        assert_eq!(
            err,
            StoreError::Service {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }
}
