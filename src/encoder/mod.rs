//! Encoders that turn extracted listing fields into request payloads.
//!
//! Two variants exist, selected per request by
//! [`EncodingKind`](crate::models::EncodingKind): token metadata behind a
//! content-addressed URI, and an ABI tuple over a declared type list.

pub mod metadata;
pub mod tuple;

use thiserror::Error;

pub use metadata::{EncodedMetadata, TokenMetadata, content_identifier, encode_metadata};
pub use tuple::TupleEncoder;

/// Errors produced while encoding a payload.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The metadata document could not be serialized.
    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A declared tuple type could not be parsed (e.g. a misspelled width
    /// such as `uint25`).
    #[error("Invalid declared type `{declared}`: {source}")]
    InvalidType {
        /// The declared type string as configured.
        declared: String,
        /// The underlying parse failure.
        source: alloy::dyn_abi::Error,
    },

    /// The number of supplied values does not match the declared type list.
    #[error("Declared {expected} tuple fields but got {actual} values")]
    ArityMismatch {
        /// Number of declared types.
        expected: usize,
        /// Number of supplied values.
        actual: usize,
    },

    /// A supplied value does not match its declared type.
    #[error("Value at position {index} does not match declared type {declared}")]
    TypeMismatch {
        /// Zero-based position of the offending value.
        index: usize,
        /// The declared type at that position.
        declared: String,
    },

    /// Failure in the underlying ABI coder.
    #[error("ABI coding failed: {0}")]
    Abi(#[from] alloy::dyn_abi::Error),
}

/// A payload produced by one of the encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedResult {
    /// UTF-8 text payload (the metadata URI).
    Text(String),
    /// ABI-encoded binary payload.
    Bytes(Vec<u8>),
}

impl EncodedResult {
    /// The raw bytes handed back to the execution harness.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Bytes(b) => b,
        }
    }

    /// Hex rendering used for stdout reporting.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_result_hex_rendering() {
        let bytes = EncodedResult::Bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(bytes.to_hex(), "0xdeadbeef");

        let text = EncodedResult::Text("ab".to_string());
        assert_eq!(text.as_bytes(), b"ab");
        assert_eq!(text.to_hex(), "0x6162");
    }
}
