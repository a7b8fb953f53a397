//! Loads oracle request configurations from a YAML file.

use std::{fs, path::PathBuf};

use config::{Config, File, FileFormat};
use thiserror::Error;

use crate::models::RequestConfig;

/// Errors that can occur while loading request configurations.
#[derive(Debug, Error)]
pub enum RequestLoaderError {
    /// The configuration file could not be read.
    #[error("Failed to read request configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("Failed to parse request configuration: {0}")]
    Parse(#[from] config::ConfigError),

    /// The configuration file is not a YAML file.
    #[error("Request configuration must be a YAML file")]
    UnsupportedFormat,

    /// Two requests share a name, so selection by name would be ambiguous.
    #[error("Duplicate request name: {0}")]
    DuplicateName(String),

    /// A referenced source file could not be read.
    #[error("Failed to read request source at {path}: {reason}")]
    SourceFile {
        /// The resolved path of the source file.
        path: PathBuf,
        /// Why reading it failed.
        reason: String,
    },
}

/// Loads request configurations from a file.
///
/// The file holds a `requests` list; each entry may reference its source
/// text through `source_path`, which is resolved relative to the file and
/// read into the entry's `source` field here, once, at load time.
pub struct RequestLoader {
    path: PathBuf,
}

impl RequestLoader {
    /// Creates a new `RequestLoader` instance.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the request configurations from the specified file.
    pub fn load(&self) -> Result<Vec<RequestConfig>, RequestLoaderError> {
        if !self.is_yaml_file() {
            return Err(RequestLoaderError::UnsupportedFormat);
        }

        let config_str = fs::read_to_string(&self.path)?;
        let parsed = Config::builder()
            .add_source(File::from_str(&config_str, FileFormat::Yaml))
            .build()?;
        let mut requests: Vec<RequestConfig> = parsed.get("requests")?;

        let mut seen = std::collections::HashSet::new();
        for request in &requests {
            if !seen.insert(request.name.clone()) {
                return Err(RequestLoaderError::DuplicateName(request.name.clone()));
            }
        }

        let base_dir = self.path.parent().unwrap_or_else(|| std::path::Path::new(""));
        for request in &mut requests {
            if let Some(source_path) = &request.source_path {
                let resolved = base_dir.join(source_path);
                let source = fs::read_to_string(&resolved).map_err(|e| {
                    RequestLoaderError::SourceFile { path: resolved.clone(), reason: e.to_string() }
                })?;
                request.source = Some(source);
            }
        }

        Ok(requests)
    }

    fn is_yaml_file(&self) -> bool {
        matches!(self.path.extension().and_then(|ext| ext.to_str()), Some("yaml") | Some("yml"))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::models::{EncodingKind, ReturnType};

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    #[test]
    fn test_load_requests() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            temp_dir.path(),
            "requests.yaml",
            r#"
            requests:
              - name: nft-metadata
                encoding: metadata
                expected_return_type: string
              - name: valuation
                encoding: tuple
                args: ["0"]
            "#,
        );

        let requests = RequestLoader::new(path).load().unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].name, "nft-metadata");
        assert_eq!(requests[0].encoding, EncodingKind::Metadata);
        assert_eq!(requests[0].expected_return_type, ReturnType::String);
        assert_eq!(requests[1].encoding, EncodingKind::Tuple);
        assert_eq!(requests[1].args, vec!["0".to_string()]);
    }

    #[test]
    fn test_load_resolves_source_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("source.js"), "return Functions.encodeString('ok')")
            .unwrap();
        let path = write_config(
            temp_dir.path(),
            "requests.yaml",
            r#"
            requests:
              - name: nft-metadata
                encoding: metadata
                source_path: source.js
            "#,
        );

        let requests = RequestLoader::new(path).load().unwrap();

        assert_eq!(
            requests[0].source.as_deref(),
            Some("return Functions.encodeString('ok')")
        );
    }

    #[test]
    fn test_load_missing_source_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            temp_dir.path(),
            "requests.yaml",
            r#"
            requests:
              - name: nft-metadata
                encoding: metadata
                source_path: no-such-file.js
            "#,
        );

        let err = RequestLoader::new(path).load().unwrap_err();
        assert!(matches!(err, RequestLoaderError::SourceFile { .. }));
    }

    #[test]
    fn test_load_rejects_duplicate_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            temp_dir.path(),
            "requests.yaml",
            r#"
            requests:
              - name: valuation
                encoding: tuple
              - name: valuation
                encoding: metadata
            "#,
        );

        let err = RequestLoader::new(path).load().unwrap_err();
        assert!(matches!(err, RequestLoaderError::DuplicateName(name) if name == "valuation"));
    }

    #[test]
    fn test_load_rejects_non_yaml_file() {
        let err = RequestLoader::new(PathBuf::from("requests.json")).load().unwrap_err();
        assert!(matches!(err, RequestLoaderError::UnsupportedFormat));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = RequestLoader::new(PathBuf::from("no-such-dir/requests.yaml")).load().unwrap_err();
        assert!(matches!(err, RequestLoaderError::Io(_)));
    }
}
