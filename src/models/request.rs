//! Request configuration records passed through to the execution harness.

use std::{collections::HashMap, path::PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::encoder::EncodedResult;

/// Where a request's source text lives from the harness's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLocation {
    /// Source text is carried inline in the request.
    #[default]
    Inline,
    /// Source text is fetched by the harness from a remote location.
    Remote,
}

/// The return type the consuming contract expects from a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    /// A single unsigned 256-bit integer.
    Uint256,
    /// A single signed 256-bit integer.
    Int256,
    /// A UTF-8 string.
    String,
    /// Raw bytes.
    #[default]
    Bytes,
}

impl ReturnType {
    /// Whether an encoded payload is compatible with this declared type.
    ///
    /// Advisory only; the declared type is pass-through for the harness and
    /// a mismatch is reported as a warning, never an abort.
    pub fn accepts(&self, result: &EncodedResult) -> bool {
        match (self, result) {
            (Self::String, EncodedResult::Text(_)) => true,
            (Self::Bytes, _) => true,
            (Self::Uint256 | Self::Int256, EncodedResult::Bytes(_)) => true,
            _ => false,
        }
    }
}

/// Which encoder a request runs its extracted fields through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingKind {
    /// Token metadata JSON behind a content-addressed URI.
    Metadata,
    /// ABI tuple over the valuation fields.
    Tuple,
}

/// A single oracle request configuration.
///
/// Loaded once from `configs/requests.yaml` and never mutated afterwards.
/// Most of the surface (secrets placeholders, wallet key, source text) is
/// pass-through for the external execution harness; only `encoding` and
/// `args` drive behavior in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Name used to select the request on the command line.
    pub name: String,

    /// Encoder variant for this request.
    pub encoding: EncodingKind,

    /// Positional string arguments. `args[0]` is the token id for tuple
    /// requests.
    #[serde(default)]
    pub args: Vec<String>,

    /// Secret placeholders available to the request source (string values
    /// only).
    #[serde(default)]
    pub secrets: HashMap<String, String>,

    /// Per-node secret assignments, one map per oracle node.
    #[serde(default)]
    pub per_node_secrets: Vec<HashMap<String, String>>,

    /// Redundant URLs pointing at encrypted off-chain secrets.
    #[serde(default)]
    pub secrets_urls: Vec<Url>,

    /// Expected type of the returned value.
    #[serde(default)]
    pub expected_return_type: ReturnType,

    /// Where the source text lives.
    #[serde(default)]
    pub code_location: CodeLocation,

    /// Path to the request source file, relative to the request
    /// configuration file.
    #[serde(default)]
    pub source_path: Option<PathBuf>,

    /// Inline source text, resolved from `source_path` at load time.
    #[serde(default)]
    pub source: Option<String>,

    /// Wallet private key used to sign request secrets. Injected from the
    /// environment at load time; stays `None` when unset, with no local
    /// validation.
    #[serde(skip)]
    pub wallet_private_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_config_deserializes_with_defaults() {
        let yaml = r#"
        name: nft-metadata
        encoding: metadata
        "#;
        let request: RequestConfig = serde_yaml_from_str(yaml);

        assert_eq!(request.name, "nft-metadata");
        assert_eq!(request.encoding, EncodingKind::Metadata);
        assert!(request.args.is_empty());
        assert!(request.secrets.is_empty());
        assert_eq!(request.expected_return_type, ReturnType::Bytes);
        assert_eq!(request.code_location, CodeLocation::Inline);
        assert_eq!(request.wallet_private_key, None);
    }

    #[test]
    fn test_request_config_deserializes_full_surface() {
        let yaml = r#"
        name: valuation
        encoding: tuple
        args: ["7"]
        expected_return_type: bytes
        code_location: inline
        secrets:
          token: placeholder
        secrets_urls:
          - "https://example.com/secrets.json"
        "#;
        let request: RequestConfig = serde_yaml_from_str(yaml);

        assert_eq!(request.encoding, EncodingKind::Tuple);
        assert_eq!(request.args, vec!["7".to_string()]);
        assert_eq!(request.secrets.get("token").map(String::as_str), Some("placeholder"));
        assert_eq!(request.secrets_urls.len(), 1);
    }

    #[test]
    fn test_return_type_compatibility() {
        let text = EncodedResult::Text("ipfs://Qm".to_string());
        let bytes = EncodedResult::Bytes(vec![0u8; 32]);

        assert!(ReturnType::String.accepts(&text));
        assert!(ReturnType::Bytes.accepts(&text));
        assert!(ReturnType::Bytes.accepts(&bytes));
        assert!(ReturnType::Uint256.accepts(&bytes));
        assert!(!ReturnType::Uint256.accepts(&text));
        assert!(!ReturnType::String.accepts(&bytes));
    }

    /// Deserializes request YAML through the same `config` crate path the
    /// loader uses.
    fn serde_yaml_from_str(yaml: &str) -> RequestConfig {
        let parsed = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap();
        parsed.try_deserialize().unwrap()
    }
}
