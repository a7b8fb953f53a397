//! Shared builders for unit and integration tests.

use serde_json::{Value, json};

use crate::models::{EncodingKind, RequestConfig, ReturnType};

/// A full Property response body with every extracted field populated,
/// numeric fields as strings the way the listing API serves them.
pub fn listing_response() -> Value {
    json!({
        "UnparsedAddress": "1 Main St",
        "YearBuilt": "1990",
        "LotSizeSquareFeet": "5000",
        "LivingArea": "2000",
        "BedroomsTotal": "3",
        "ListPrice": "500000",
        "OriginalListPrice": "550000",
        "TaxAssessedValue": "480000",
    })
}

/// A Property response body with the named fields removed.
pub fn listing_response_without(fields: &[&str]) -> Value {
    let mut body = listing_response();
    let object = body.as_object_mut().expect("listing response is an object");
    for field in fields {
        object.remove(*field);
    }
    body
}

/// A minimal metadata request configuration.
pub fn metadata_request() -> RequestConfig {
    request("nft-metadata", EncodingKind::Metadata, &[])
}

/// A minimal tuple request configuration with the given arguments.
pub fn tuple_request(args: &[&str]) -> RequestConfig {
    request("valuation", EncodingKind::Tuple, args)
}

fn request(name: &str, encoding: EncodingKind, args: &[&str]) -> RequestConfig {
    RequestConfig {
        name: name.to_string(),
        encoding,
        args: args.iter().map(|arg| arg.to_string()).collect(),
        secrets: Default::default(),
        per_node_secrets: Default::default(),
        secrets_urls: Default::default(),
        expected_return_type: ReturnType::Bytes,
        code_location: Default::default(),
        source_path: None,
        source: None,
        wallet_private_key: None,
    }
}
