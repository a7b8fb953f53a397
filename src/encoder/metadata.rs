//! Token metadata encoding behind a content-addressed URI.
//!
//! The metadata document is the usual NFT shape (a display name plus an
//! ordered `attributes` array of `trait_type`/`value` pairs), serialized
//! once, content-addressed, and referenced by an `ipfs://` URI.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::EncodeError;
use crate::models::MetadataFields;

/// Multihash code for sha2-256.
const MULTIHASH_SHA2_256: u8 = 0x12;
/// Digest length of sha2-256 in bytes.
const MULTIHASH_DIGEST_LEN: u8 = 0x20;

/// A single `trait_type`/`value` pair in the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name as metadata consumers expect it.
    pub trait_type: String,
    /// Attribute value.
    pub value: AttributeValue,
}

/// Value shapes that occur in the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Free-text value.
    Text(String),
    /// Integer value.
    Number(u64),
}

/// The token metadata document serialized for content addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Display name of the token.
    pub name: String,
    /// Ordered attribute list.
    pub attributes: Vec<Attribute>,
}

impl TokenMetadata {
    /// Display name carried by every real-estate token.
    pub const TOKEN_NAME: &'static str = "Real Estate Token";

    /// Builds the metadata document for a listing.
    ///
    /// Attribute order is fixed; consumers and the content identifier both
    /// depend on it.
    pub fn from_fields(fields: &MetadataFields) -> Self {
        let attribute = |trait_type: &str, value: AttributeValue| Attribute {
            trait_type: trait_type.to_string(),
            value,
        };

        Self {
            name: Self::TOKEN_NAME.to_string(),
            attributes: vec![
                attribute("realEstateAddress", AttributeValue::Text(fields.address.clone())),
                attribute("yearBuilt", AttributeValue::Number(fields.year_built)),
                attribute(
                    "lotSizeSquareFeet",
                    AttributeValue::Number(fields.lot_size_square_feet),
                ),
                attribute("livingArea", AttributeValue::Number(fields.living_area)),
                attribute("bedroomsTotal", AttributeValue::Number(fields.bedrooms_total)),
            ],
        }
    }
}

/// Everything the metadata encoder produces for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMetadata {
    /// The serialized metadata document.
    pub json: String,
    /// Content identifier derived from `json`.
    pub cid: String,
    /// URI embedding the content identifier.
    pub uri: String,
}

/// Serializes the metadata document and derives its content-addressed URI.
pub fn encode_metadata(fields: &MetadataFields) -> Result<EncodedMetadata, EncodeError> {
    let metadata = TokenMetadata::from_fields(fields);
    let json = serde_json::to_string(&metadata)?;
    let cid = content_identifier(json.as_bytes());
    let uri = format!("ipfs://{cid}");

    Ok(EncodedMetadata { json, cid, uri })
}

/// Derives a base58btc-encoded sha2-256 multihash over `content`.
///
/// Deterministic for identical input; this string is the content-addressed
/// reference downstream consumers embed in URIs.
pub fn content_identifier(content: &[u8]) -> String {
    let digest = Sha256::digest(content);

    let mut multihash = Vec::with_capacity(2 + digest.len());
    multihash.push(MULTIHASH_SHA2_256);
    multihash.push(MULTIHASH_DIGEST_LEN);
    multihash.extend_from_slice(&digest);

    bs58::encode(multihash).into_string()
}
