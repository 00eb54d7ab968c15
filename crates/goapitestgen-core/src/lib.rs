//! Go API test generator core library
//!
//! This library turns an OpenAPI/Swagger JSON document into a Go test file:
//! the spec is loaded as an untyped JSON tree, rendered through a Tera
//! template with a fixed set of naming helpers, formatted with `goimports`
//! and written to `<base_name>_test.go`.

pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod openapi;
pub mod output;
pub mod templates;
pub mod utils;

pub use crate::{
    config::Config,
    error::{Error, Result},
    format::Formatter,
    generate::generate,
    openapi::OpenApiContext,
    templates::{HelperRegistry, TemplateDir, TemplateManager},
};
