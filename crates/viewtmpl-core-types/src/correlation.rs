//! Correlation types for request tracking
//!
//! A comparison run carries a [`RequestContext`] so that every log event it
//! emits, and any error surfaced by the host layer around it, can be tied
//! back to the same request.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh time-ordered id (UUIDv7)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Wrap an id received from elsewhere
            pub fn from_string(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifies one comparison request
    RequestId
);

correlation_id!(
    /// Trace identifier supplied by an embedding host
    TraceId
);

/// Context carried through a comparison for correlation
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse a request id issued by the caller
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            trace_id: None,
        }
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::from_string("req-1".to_string());
        assert_eq!(id.to_string(), "req-1");
    }

    #[test]
    fn test_context_keeps_caller_ids() {
        let trace_id = TraceId::from_string("trace-9".to_string());
        let ctx = RequestContext::with_request_id(RequestId::from_string("req-7".to_string()))
            .with_trace_id(trace_id.clone());

        assert_eq!(ctx.request_id.as_str(), "req-7");
        assert_eq!(ctx.trace_id, Some(trace_id));
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = RequestId::from_string("req-2".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"req-2\"");
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
