//! Typed field extraction from listing API response bodies.
//!
//! The listing API serves numeric fields as JSON strings about as often as
//! JSON numbers. Every read here either yields the declared type or an
//! explicit error; an absent field reads as `None` and only becomes an error
//! once a caller requires it.

use serde_json::Value;
use thiserror::Error;

/// Errors produced while reading fields out of a response body.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The response body is not a JSON object.
    #[error("Response body is not a JSON object")]
    NotAnObject,

    /// A field required by the selected encoding is absent from the response.
    #[error("Required field missing from response: {0}")]
    MissingField(String),

    /// A field is present but does not hold a string value.
    #[error("Field {field} is not a string (got {value})")]
    NotAString {
        /// Name of the offending field.
        field: String,
        /// The raw JSON value encountered.
        value: Value,
    },

    /// A field is present but cannot be read as a non-negative integer.
    #[error("Field {field} is not an unsigned integer (got {value})")]
    NotAnInteger {
        /// Name of the offending field.
        field: String,
        /// The raw JSON value encountered.
        value: Value,
    },
}

/// Reads named, typed fields from a parsed JSON response body.
#[derive(Debug)]
pub struct FieldReader<'a> {
    body: &'a serde_json::Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    /// Wraps a response body. Fails if the body is not a JSON object.
    pub fn new(body: &'a Value) -> Result<Self, ExtractError> {
        body.as_object().map(|body| Self { body }).ok_or(ExtractError::NotAnObject)
    }

    /// Reads an optional string field.
    pub fn string(&self, field: &str) -> Result<Option<String>, ExtractError> {
        match self.body.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ExtractError::NotAString {
                field: field.to_string(),
                value: other.clone(),
            }),
        }
    }

    /// Reads an optional unsigned integer field.
    ///
    /// Accepts a JSON number or a decimal string. Anything else present
    /// under the field name is an error, never a sentinel.
    pub fn uint(&self, field: &str) -> Result<Option<u64>, ExtractError> {
        let value = match self.body.get(field) {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => value,
        };

        let parsed = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };

        parsed.map(Some).ok_or_else(|| ExtractError::NotAnInteger {
            field: field.to_string(),
            value: value.clone(),
        })
    }
}
