//! Inbound event as delivered by the function runtime.

use serde::Deserialize;
use serde_json::Value;

use super::errors::ExtractionError;
use super::truthiness::truthy;

/// Event received by the extractor.
///
/// Every field is optional and kept as raw JSON so that presence is decided
/// by truthiness rather than by type. Fields not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default)]
    pub filename: Option<Value>,
    #[serde(default)]
    pub document: Option<Value>,
    /// Gateway request body, a JSON-encoded string.
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub request_context: Option<Value>,
    #[serde(default)]
    pub http_method: Option<Value>,
}

impl InboundEvent {
    /// Builds an event from a raw payload.
    ///
    /// Objects are read field by field. Strings, numbers, booleans and
    /// arrays carry no event fields and behave like an empty object.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidEvent` if the payload is `null`.
    pub fn from_value(payload: Value) -> Result<Self, ExtractionError> {
        match payload {
            Value::Null => Err(ExtractionError::invalid_event(
                "expected an event, got null",
            )),
            Value::Object(_) => serde_json::from_value(payload)
                .map_err(|e| ExtractionError::invalid_event(e.to_string())),
            _ => Ok(Self::default()),
        }
    }

    /// Returns a lazily decoded view of the body.
    pub fn body(&self) -> LazyBody<'_> {
        LazyBody {
            raw: truthy(self.body.as_ref()),
            decoded: None,
        }
    }
}

/// Body decoder that parses at most once, and only when asked.
///
/// A malformed body only fails the invocation if a field actually has to be
/// read from it.
#[derive(Debug)]
pub struct LazyBody<'a> {
    raw: Option<&'a Value>,
    decoded: Option<Value>,
}

impl<'a> LazyBody<'a> {
    /// True when the event carries a truthy body.
    pub fn is_present(&self) -> bool {
        self.raw.is_some()
    }

    /// Reads a top-level field from the decoded body.
    ///
    /// Returns `Ok(None)` when there is no body, when the body decodes to a
    /// non-object, or when the field is missing.
    ///
    /// # Errors
    ///
    /// - `BodyNotText` if the body is an object or an array
    /// - `MalformedBody` if a string body is not valid JSON
    /// - `NullBody` if it decodes to `null`
    pub fn field(&mut self, name: &str) -> Result<Option<&Value>, ExtractionError> {
        let Some(raw) = self.raw else {
            return Ok(None);
        };

        if self.decoded.is_none() {
            let value = match raw {
                Value::String(text) => {
                    serde_json::from_str(text).map_err(ExtractionError::malformed_body)?
                }
                // Scalars decode to themselves.
                Value::Number(_) | Value::Bool(_) => raw.clone(),
                _ => return Err(ExtractionError::BodyNotText),
            };
            self.decoded = Some(value);
        }

        match self.decoded.as_ref() {
            Some(Value::Null) => Err(ExtractionError::NullBody),
            Some(Value::Object(map)) => Ok(map.get(name)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_known_fields() {
        let event = InboundEvent::from_value(json!({
            "filename": "a.pdf",
            "httpMethod": "POST",
            "requestContext": {},
            "unrelated": 1
        }))
        .unwrap();

        assert_eq!(event.filename, Some(json!("a.pdf")));
        assert_eq!(event.http_method, Some(json!("POST")));
        assert_eq!(event.request_context, Some(json!({})));
        assert!(event.document.is_none());
        assert!(event.body.is_none());
    }

    #[test]
    fn from_value_rejects_null() {
        let result = InboundEvent::from_value(Value::Null);
        assert!(matches!(result, Err(ExtractionError::InvalidEvent { .. })));
    }

    #[test]
    fn non_object_payloads_behave_like_empty_events() {
        for payload in [json!("abc"), json!(7), json!(true), json!([1])] {
            let event = InboundEvent::from_value(payload).unwrap();
            assert_eq!(event, InboundEvent::default());
        }
    }

    #[test]
    fn empty_object_is_a_valid_event() {
        let event = InboundEvent::from_value(json!({})).unwrap();
        assert_eq!(event, InboundEvent::default());
    }

    #[test]
    fn body_field_reads_from_decoded_json() {
        let event = InboundEvent {
            body: Some(json!(r#"{"filename":"a.pdf"}"#)),
            ..Default::default()
        };
        let mut body = event.body();
        assert!(body.is_present());
        assert_eq!(body.field("filename").unwrap(), Some(&json!("a.pdf")));
        assert_eq!(body.field("document").unwrap(), None);
    }

    #[test]
    fn empty_body_is_absent_and_never_parsed() {
        let event = InboundEvent {
            body: Some(json!("")),
            ..Default::default()
        };
        let mut body = event.body();
        assert!(!body.is_present());
        assert_eq!(body.field("filename").unwrap(), None);
    }

    #[test]
    fn malformed_body_fails_on_first_read() {
        let event = InboundEvent {
            body: Some(json!("not valid json")),
            ..Default::default()
        };
        let mut body = event.body();
        assert!(matches!(
            body.field("filename"),
            Err(ExtractionError::MalformedBody { .. })
        ));
    }

    #[test]
    fn object_and_array_bodies_are_rejected() {
        for body in [json!({"filename": "a.pdf"}), json!([1, 2])] {
            let event = InboundEvent {
                body: Some(body),
                ..Default::default()
            };
            assert!(matches!(
                event.body().field("filename"),
                Err(ExtractionError::BodyNotText)
            ));
        }
    }

    #[test]
    fn scalar_body_values_have_no_fields() {
        for body in [json!(5), json!(true)] {
            let event = InboundEvent {
                body: Some(body),
                ..Default::default()
            };
            let mut body = event.body();
            assert!(body.is_present());
            assert_eq!(body.field("filename").unwrap(), None);
        }
    }

    #[test]
    fn null_body_is_rejected() {
        let event = InboundEvent {
            body: Some(json!("null")),
            ..Default::default()
        };
        assert!(matches!(
            event.body().field("filename"),
            Err(ExtractionError::NullBody)
        ));
    }

    #[test]
    fn scalar_body_has_no_fields() {
        let event = InboundEvent {
            body: Some(json!("123")),
            ..Default::default()
        };
        assert_eq!(event.body().field("filename").unwrap(), None);
    }
}
