//! OpenAPI/Swagger specification loading.
//!
//! The spec is kept as an untyped JSON tree: the template decides which parts
//! of `paths` and `definitions` it reads, so nothing beyond "a JSON object" is
//! enforced at load time.
//!
//! # Examples
//!
//! ```no_run
//! use goapitestgen_core::openapi::OpenApiContext;
//! use goapitestgen_core::error::Result;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let spec = OpenApiContext::from_file("swagger.json").await?;
//!
//! if let Some(title) = spec.title() {
//!     println!("API Title: {}", title);
//! }
//! println!("{} paths", spec.paths().map(|p| p.len()).unwrap_or(0));
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::error::{Error, Result};

// External imports (alphabetized)
use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use tokio::fs;

/// A decoded OpenAPI/Swagger document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OpenApiContext {
    /// The top-level JSON object of the spec
    pub json: JsonMap<String, JsonValue>,
}

impl OpenApiContext {
    /// Read and decode a JSON spec file.
    ///
    /// Fails with [`Error::Read`] if the file cannot be read and with
    /// [`Error::Decode`] if it is not a JSON object.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading OpenAPI spec: {}", path.display());

        let content = fs::read_to_string(path).await.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a spec from JSON text
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let json = serde_json::from_str(content)?;
        Ok(Self { json })
    }

    /// Get a reference to the raw JSON object
    pub fn as_json(&self) -> &JsonMap<String, JsonValue> {
        &self.json
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.json.get("info")?.get("title")?.as_str()
    }

    /// Get the version of the API
    pub fn version(&self) -> Option<&str> {
        self.json.get("info")?.get("version")?.as_str()
    }

    /// Get the Swagger 2.0 `basePath`
    pub fn base_path(&self) -> Option<&str> {
        self.json.get("basePath")?.as_str()
    }

    /// Get the `paths` object
    pub fn paths(&self) -> Option<&JsonMap<String, JsonValue>> {
        self.json.get("paths")?.as_object()
    }

    /// Get the Swagger 2.0 `definitions` object
    pub fn definitions(&self) -> Option<&JsonMap<String, JsonValue>> {
        self.json.get("definitions")?.as_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    const PETSTORE: &str = r##"{
        "swagger": "2.0",
        "info": { "title": "Petstore", "version": "1.0.0" },
        "basePath": "/v2",
        "paths": {
            "/pet/{petId}": { "get": { "operationId": "getPetById" } },
            "/store/inventory": { "get": { "operationId": "getInventory" } }
        },
        "definitions": {
            "Pet": { "type": "object", "properties": { "name": { "type": "string" } } }
        }
    }"##;

    #[tokio::test]
    async fn test_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("swagger.json");
        std::fs::write(&path, PETSTORE)?;

        let spec = OpenApiContext::from_file(&path).await?;
        assert_eq!(spec.title(), Some("Petstore"));
        assert_eq!(spec.version(), Some("1.0.0"));
        assert_eq!(spec.base_path(), Some("/v2"));
        assert_eq!(spec.paths().map(|p| p.len()), Some(2));
        assert!(spec.definitions().is_some_and(|d| d.contains_key("Pet")));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = OpenApiContext::from_file(&path).await.unwrap_err();
        assert!(matches!(err, Error::Read { path: ref p, .. } if *p == path));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"paths\": ").unwrap();

        let err = OpenApiContext::from_file(&path).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_top_level_must_be_an_object() {
        assert!(OpenApiContext::from_json_str("[1, 2, 3]").is_err());
        assert!(OpenApiContext::from_json_str("\"swagger\"").is_err());
        assert!(OpenApiContext::from_json_str("{}").is_ok());
    }

    #[test]
    fn test_serializes_as_the_raw_tree() {
        let spec = OpenApiContext::from_json_str(r#"{"swagger":"2.0"}"#).unwrap();
        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({"swagger": "2.0"}));
    }

    #[test]
    fn test_accessors_tolerate_missing_sections() {
        let spec = OpenApiContext::from_json_str(r#"{"info": "not an object"}"#).unwrap();
        assert_eq!(spec.title(), None);
        assert_eq!(spec.paths(), None);
        assert_eq!(spec.definitions(), None);
    }
}
