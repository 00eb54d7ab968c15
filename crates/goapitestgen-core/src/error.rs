//! Error handling for the Go API test generator.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every pipeline stage has its own
//! variants so callers can tell which step failed.
//!
//! # Examples
//!
//! ```
//! use goapitestgen_core::error::{Error, Result};
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::invalid_argument("filename cannot be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_name("").is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for generator operations
#[derive(Debug, Error)]
pub enum Error {
    /// The OpenAPI spec file could not be read
    #[error("failed to read spec {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OpenAPI spec is not a JSON object
    #[error("failed to decode spec {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The template file could not be read
    #[error("failed to load template {}", path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template file is not valid template syntax
    #[error("failed to parse template {}: {message}", path.display())]
    TemplateParse { path: PathBuf, message: String },

    /// Rendering the template against the spec failed
    #[error("failed to render template '{name}': {message}")]
    TemplateExecution { name: String, message: String },

    /// The formatter rejected the generated code or could not be run
    #[error("failed to format generated code with '{program}': {message}")]
    Format { program: String, message: String },

    /// A caller-supplied argument is unusable
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The output file could not be created or written
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new template execution error for the named template
    pub fn execution<N: Into<String>, S: Into<String>>(name: N, msg: S) -> Self {
        Self::TemplateExecution {
            name: name.into(),
            message: msg.into(),
        }
    }
}

/// Flatten an error and its `source()` chain into one line.
///
/// Tera keeps the useful part of a failure (the missing variable, the failing
/// filter) in the source chain, so the top-level message alone is not enough.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_names_the_path() {
        let err = Error::Read {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read spec missing.json");
        assert_eq!(
            error_chain(&err),
            "failed to read spec missing.json: no such file"
        );
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = tera::Tera::one_off("{{ missing }}", &tera::Context::new(), false)
            .expect_err("undefined variable must fail");
        let message = error_chain(&err);
        assert!(message.contains("missing"), "got: {message}");
        assert!(message.len() > err.to_string().len());
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            Error::invalid_argument("empty"),
            Error::InvalidArgument(msg) if msg == "empty"
        ));
        assert!(matches!(Error::config("bad"), Error::Config(_)));
        assert!(matches!(
            Error::execution("t", "boom"),
            Error::TemplateExecution { name, .. } if name == "t"
        ));
    }
}
