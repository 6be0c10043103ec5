//! Payload: the JSON object a client sends with `POST` and `PUT` requests.
//!
//! Handlers never reject a body up front. They hand an `Option<Payload>` to
//! the service, which decides *when* a missing or malformed body becomes a
//! [`ValidationError::NotJson`]. Some endpoints check that the parent exists
//! before they look at the body.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A JSON object received from a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Parse raw bytes, keeping the result only when it is a JSON object.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Value>(bytes)
            .ok()
            .and_then(Self::from_value)
    }

    /// Wrap a JSON value, keeping it only when it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Demand a non-empty object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotJson`] when `payload` is `None` or empty.
    pub fn require(payload: Option<Self>) -> Result<Self, ValidationError> {
        payload
            .filter(|p| !p.0.is_empty())
            .ok_or(ValidationError::NotJson)
    }

    /// Raw access to a field, with `null` treated as absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// A string field that must be present.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] when absent or `null`,
    /// [`ValidationError::InvalidField`] when not a string.
    pub fn required_str(&self, field: &'static str) -> Result<String, ValidationError> {
        self.optional_str(field)?
            .ok_or(ValidationError::MissingField(field))
    }

    /// A string field that may be absent.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidField`] when present but not a string.
    pub fn optional_str(&self, field: &'static str) -> Result<Option<String>, ValidationError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ValidationError::InvalidField(field)),
        }
    }

    /// A non-negative integer field that may be absent.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidField`] when present but not an integer
    /// fitting in `u32`.
    pub fn optional_u32(&self, field: &'static str) -> Result<Option<u32>, ValidationError> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or(ValidationError::InvalidField(field)),
        }
    }

    /// A number field that may be absent.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidField`] when present but not a number.
    pub fn optional_f64(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or(ValidationError::InvalidField(field)),
        }
    }

    /// A list of identifiers, one slot per array entry. Entries that are
    /// not strings or do not parse come back as `None`, so callers still see
    /// how many entries the client sent.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidField`] when present but not an array.
    pub fn id_list<T: FromStr>(
        &self,
        field: &'static str,
    ) -> Result<Vec<Option<T>>, ValidationError> {
        match self.get(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items
                .iter()
                .map(|item| item.as_str().and_then(|s| s.parse().ok()))
                .collect()),
            Some(_) => Err(ValidationError::InvalidField(field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::StateId;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        Payload::from_value(value).unwrap()
    }

    #[test]
    fn should_parse_object_body() {
        let p = Payload::from_slice(br#"{"name":"California"}"#).unwrap();
        assert_eq!(p.required_str("name").unwrap(), "California");
    }

    #[test]
    fn should_ignore_non_object_bodies() {
        assert!(Payload::from_slice(b"not json").is_none());
        assert!(Payload::from_slice(b"[1, 2]").is_none());
        assert!(Payload::from_slice(b"42").is_none());
        assert!(Payload::from_slice(b"").is_none());
    }

    #[test]
    fn should_reject_missing_or_empty_payload_as_not_json() {
        assert_eq!(Payload::require(None), Err(ValidationError::NotJson));
        assert_eq!(
            Payload::require(Some(Payload::default())),
            Err(ValidationError::NotJson)
        );
        assert!(Payload::require(Some(payload(json!({"a": 1})))).is_ok());
    }

    #[test]
    fn should_report_missing_field_when_absent_or_null() {
        let p = payload(json!({"name": null}));
        assert_eq!(
            p.required_str("name"),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            p.required_str("email"),
            Err(ValidationError::MissingField("email"))
        );
    }

    #[test]
    fn should_report_invalid_field_when_wrong_type() {
        let p = payload(json!({"name": 12, "max_guest": -1, "latitude": "north"}));
        assert_eq!(
            p.required_str("name"),
            Err(ValidationError::InvalidField("name"))
        );
        assert_eq!(
            p.optional_u32("max_guest"),
            Err(ValidationError::InvalidField("max_guest"))
        );
        assert_eq!(
            p.optional_f64("latitude"),
            Err(ValidationError::InvalidField("latitude"))
        );
    }

    #[test]
    fn should_read_numbers() {
        let p = payload(json!({"number_rooms": 3, "longitude": -122}));
        assert_eq!(p.optional_u32("number_rooms").unwrap(), Some(3));
        assert_eq!(p.optional_f64("longitude").unwrap(), Some(-122.0));
        assert_eq!(p.optional_u32("max_guest").unwrap(), None);
    }

    #[test]
    fn should_keep_a_slot_for_every_id_list_entry() {
        let id = StateId::new();
        let p = payload(json!({"states": [id.to_string(), "nope", 7]}));
        let ids: Vec<Option<StateId>> = p.id_list("states").unwrap();
        assert_eq!(ids, vec![Some(id), None, None]);
    }

    #[test]
    fn should_return_empty_id_list_when_absent_or_null() {
        let p = payload(json!({"cities": null}));
        assert!(p.id_list::<StateId>("states").unwrap().is_empty());
        assert!(p.id_list::<StateId>("cities").unwrap().is_empty());
    }

    #[test]
    fn should_reject_id_list_that_is_not_an_array() {
        let p = payload(json!({"states": "all"}));
        assert_eq!(
            p.id_list::<StateId>("states"),
            Err(ValidationError::InvalidField("states"))
        );
    }
}
