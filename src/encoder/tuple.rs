//! ABI tuple encoding over a declared type list.
//!
//! Standard contract-ABI parameter encoding: values laid out in declared
//! order, each padded to its 32-byte slot, dynamic values behind offsets.
//! The declared list is the contract: a value that does not match its
//! declared type in order and kind fails the encode call.

use alloy::dyn_abi::{DynSolType, DynSolValue};

use super::EncodeError;

/// Encodes and decodes fixed-order tuples against a declared type list.
#[derive(Debug, Clone)]
pub struct TupleEncoder {
    types: Vec<DynSolType>,
}

impl TupleEncoder {
    /// Creates an encoder from already-parsed types.
    pub fn new(types: Vec<DynSolType>) -> Self {
        Self { types }
    }

    /// Parses a declared type list such as `["string", "uint256"]`.
    ///
    /// A malformed name (`uint25` and friends) is rejected here, before any
    /// value is touched.
    pub fn parse<S: AsRef<str>>(declared: &[S]) -> Result<Self, EncodeError> {
        let types = declared
            .iter()
            .map(|ty| {
                ty.as_ref().parse::<DynSolType>().map_err(|source| EncodeError::InvalidType {
                    declared: ty.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(types))
    }

    /// The declared types, in order.
    pub fn types(&self) -> &[DynSolType] {
        &self.types
    }

    /// Encodes `values` in declared order as ABI parameter bytes.
    ///
    /// Every value is checked against its declared type first; arity, order
    /// and kind must match exactly.
    pub fn encode(&self, values: &[DynSolValue]) -> Result<Vec<u8>, EncodeError> {
        if values.len() != self.types.len() {
            return Err(EncodeError::ArityMismatch {
                expected: self.types.len(),
                actual: values.len(),
            });
        }

        for (index, (ty, value)) in self.types.iter().zip(values).enumerate() {
            if !ty.matches(value) {
                return Err(EncodeError::TypeMismatch { index, declared: ty.to_string() });
            }
        }

        Ok(DynSolValue::Tuple(values.to_vec()).abi_encode_params())
    }

    /// Decodes ABI parameter bytes back into the declared tuple of values.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<DynSolValue>, EncodeError> {
        let tuple_type = DynSolType::Tuple(self.types.clone());
        let decoded = tuple_type.abi_decode_sequence(data)?;

        match decoded {
            DynSolValue::Tuple(values) => Ok(values),
            other => Err(EncodeError::Abi(alloy::dyn_abi::Error::TypeMismatch {
                expected: tuple_type.to_string(),
                actual: format!("{other:?}"),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    #[test]
    fn test_round_trip_string_and_uints() {
        let encoder = TupleEncoder::parse(&["string", "uint256", "uint256"]).unwrap();
        let values = [
            DynSolValue::String("1 Main St".to_string()),
            DynSolValue::Uint(U256::from(1990u64), 256),
            DynSolValue::Uint(U256::from(5000u64), 256),
        ];

        let encoded = encoder.encode(&values).unwrap();
        let decoded = encoder.decode(&encoded).unwrap();

        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0], values[0]);
        assert_eq!(decoded[1].as_uint().unwrap().0, U256::from(1990u64));
        assert_eq!(decoded[2].as_uint().unwrap().0, U256::from(5000u64));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encoder = TupleEncoder::parse(&["uint256", "uint256"]).unwrap();
        let values = [
            DynSolValue::Uint(U256::from(7u64), 256),
            DynSolValue::Uint(U256::from(500_000u64), 256),
        ];

        assert_eq!(encoder.encode(&values).unwrap(), encoder.encode(&values).unwrap());
    }

    #[test]
    fn test_static_tuple_layout() {
        // Two static uint256 values occupy exactly two 32-byte slots.
        let encoder = TupleEncoder::parse(&["uint256", "uint256"]).unwrap();
        let encoded = encoder
            .encode(&[
                DynSolValue::Uint(U256::from(1u64), 256),
                DynSolValue::Uint(U256::from(2u64), 256),
            ])
            .unwrap();

        assert_eq!(encoded.len(), 64);
        assert_eq!(encoded[31], 1);
        assert_eq!(encoded[63], 2);
    }

    #[test]
    fn test_malformed_declared_type_is_rejected() {
        let err = TupleEncoder::parse(&["uint25"]).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidType { declared, .. } if declared == "uint25"));
    }

    #[test]
    fn test_arity_mismatch() {
        let encoder = TupleEncoder::parse(&["uint256", "uint256"]).unwrap();
        let err = encoder.encode(&[DynSolValue::Uint(U256::from(1u64), 256)]).unwrap_err();
        assert!(matches!(err, EncodeError::ArityMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_value_kind_mismatch() {
        let encoder = TupleEncoder::parse(&["uint256"]).unwrap();
        let err = encoder.encode(&[DynSolValue::String("not a number".to_string())]).unwrap_err();
        assert!(matches!(err, EncodeError::TypeMismatch { index: 0, .. }));
    }

    #[test]
    fn test_decode_truncated_data_fails() {
        let encoder = TupleEncoder::parse(&["uint256", "uint256"]).unwrap();
        let err = encoder.decode(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, EncodeError::Abi(_)));
    }
}
