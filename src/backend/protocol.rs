//! Wire protocol for the backend bridge
//!
//! The supervisor speaks one JSON object per line on its stdio:
//! requests `{"id":N,"command":"...","args":{...}}`, responses
//! `{"id":N,"result":...}` or `{"id":N,"error":"..."}`, and
//! unsolicited events `{"event":"...","payload":...}`.

use serde::{Deserialize, Serialize};

/// A raw bridge message (before parsing into typed events)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMessage {
    /// A response to a request we sent
    Response {
        id: serde_json::Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<serde_json::Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<serde_json::Value>,
    },
    /// An event from the backend (unsolicited)
    Event {
        event: String,
        payload: serde_json::Value,
    },
}

impl RawMessage {
    /// Parse one stdout line into a RawMessage
    pub fn parse(line: &str) -> Option<Self> {
        serde_json::from_str(line.trim()).ok()
    }

    /// Check if this is an event
    pub fn is_event(&self) -> bool {
        matches!(self, RawMessage::Event { .. })
    }

    /// Get the event name if this is an event
    pub fn event_name(&self) -> Option<&str> {
        match self {
            RawMessage::Event { event, .. } => Some(event),
            _ => None,
        }
    }

    /// Get a human-readable summary of this message
    pub fn summary(&self) -> String {
        match self {
            RawMessage::Response { id, error, .. } => {
                if error.is_some() {
                    format!("Response #{}: error", id)
                } else {
                    format!("Response #{}: ok", id)
                }
            }
            RawMessage::Event { event, .. } => {
                format!("Event: {}", event)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event() {
        let line = r#"{"event":"xmrig-stdout","payload":"speed 10s/60s/15m"}"#;
        let msg = RawMessage::parse(line).unwrap();
        assert!(msg.is_event());
        assert_eq!(msg.event_name(), Some("xmrig-stdout"));
    }

    #[test]
    fn test_parse_response() {
        let line = r#"{"id":1,"result":{"pool":null}}"#;
        let msg = RawMessage::parse(line).unwrap();
        assert!(!msg.is_event());
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let msg = RawMessage::parse("  {\"event\":\"xmrig-status\",\"payload\":\"{}\"}  ").unwrap();
        assert_eq!(msg.event_name(), Some("xmrig-status"));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(RawMessage::parse("not json").is_none());
        assert!(RawMessage::parse("").is_none());
    }

    #[test]
    fn test_message_summary() {
        let event = RawMessage::parse(r#"{"event":"xmrig-stdout","payload":""}"#).unwrap();
        assert_eq!(event.summary(), "Event: xmrig-stdout");

        let response = RawMessage::parse(r#"{"id":1,"result":"ok"}"#).unwrap();
        assert_eq!(response.summary(), "Response #1: ok");

        let error_resp = RawMessage::parse(r#"{"id":2,"error":"failed"}"#).unwrap();
        assert_eq!(error_resp.summary(), "Response #2: error");
    }
}
