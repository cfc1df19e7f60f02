use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

const FORBIDDEN_MESSAGE: &str = "Forbidden";

/// A decoded upstream reply before it is trusted as data.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    /// `None` when the body was not valid JSON.
    pub body: Option<Value>,
}

impl UpstreamReply {
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

/// The upstream signals an expired token with `{"message": "Forbidden"}`
/// rather than a status code.
pub fn is_token_expired(body: &Value) -> bool {
    body.get("message").and_then(Value::as_str) == Some(FORBIDDEN_MESSAGE)
}

/// Token expiry wins over the HTTP status, then the status must be a success.
pub fn classify(reply: UpstreamReply, context: &str) -> Result<Value> {
    if reply.body.as_ref().is_some_and(is_token_expired) {
        tracing::warn!(context, status = %reply.status, "upstream reports expired token");
        return Err(Error::TokenExpired);
    }
    if !reply.status.is_success() {
        tracing::warn!(context, status = %reply.status, "upstream returned non-success status");
        return Err(Error::transport(context, reply.status_text()));
    }
    reply
        .body
        .ok_or_else(|| Error::unexpected_payload(context, "response body is not JSON"))
}

/// Decodes a classified body as an array of records.
pub fn decode_records<T: DeserializeOwned>(body: Value, context: &str) -> Result<Vec<T>> {
    if !body.is_array() {
        return Err(Error::unexpected_payload(context, "expected a JSON array"));
    }
    serde_json::from_value(body).map_err(|e| Error::unexpected_payload(context, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: StatusCode, body: Value) -> UpstreamReply {
        UpstreamReply {
            status,
            body: Some(body),
        }
    }

    #[test]
    fn forbidden_body_is_token_expiry_on_any_status() {
        for status in [StatusCode::OK, StatusCode::FORBIDDEN, StatusCode::BAD_GATEWAY] {
            let result = classify(reply(status, json!({ "message": "Forbidden" })), "job detail");
            assert!(matches!(result, Err(Error::TokenExpired)));
        }
    }

    #[test]
    fn other_messages_are_not_expiry() {
        assert!(!is_token_expired(&json!({ "message": "Internal server error" })));
        assert!(!is_token_expired(&json!([{ "message": "Forbidden" }])));
        assert!(!is_token_expired(&json!({ "message": 403 })));
    }

    #[test]
    fn failing_status_is_transport_error() {
        let result = classify(reply(StatusCode::INTERNAL_SERVER_ERROR, json!([])), "job detail for X1");
        match result {
            Err(Error::Transport { context, status }) => {
                assert_eq!(context, "job detail for X1");
                assert_eq!(status, "500 Internal Server Error");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_json_success_is_unexpected_payload() {
        let result = classify(
            UpstreamReply {
                status: StatusCode::OK,
                body: None,
            },
            "applicants",
        );
        assert!(matches!(result, Err(Error::UnexpectedPayload { .. })));
    }

    #[test]
    fn decode_requires_array() {
        let result = decode_records::<Value>(json!({ "items": [] }), "applicants");
        assert!(matches!(result, Err(Error::UnexpectedPayload { .. })));

        let records = decode_records::<Value>(json!([1, 2]), "applicants").unwrap();
        assert_eq!(records.len(), 2);
    }
}
