//! Naming helpers exposed to templates as Tera filters.
//!
//! The registry is a plain immutable table. Each render installs it into its
//! own `Tera` instance, so renders never share registration state.

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use tera::{Filter, Tera};

use crate::utils;

/// Signature shared by every helper: one string in, one string out
pub type HelperFn = fn(&str) -> String;

/// The standard helper set used by the Go test template
const STANDARD_HELPERS: &[(&str, HelperFn)] = &[
    ("title", utils::title_case),
    ("cut", utils::cut_word),
    ("upper", utils::upper),
    ("extractDtoName", utils::extract_dto_name),
    ("swaggerTypeToGoType", swagger_type_to_go_type),
    ("toPascalCase", utils::to_pascal_case),
    ("makeFnName", utils::make_fn_name),
    ("getAPIPath", utils::get_api_path),
];

fn swagger_type_to_go_type(swagger_type: &str) -> String {
    utils::swagger_type_to_go_type(swagger_type).to_string()
}

/// Immutable table of template helpers keyed by the name templates use
#[derive(Clone, Copy)]
pub struct HelperRegistry {
    helpers: &'static [(&'static str, HelperFn)],
}

impl std::fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HelperRegistry {
    /// The standard helper set used by the Go test template
    pub fn new() -> Self {
        Self {
            helpers: STANDARD_HELPERS,
        }
    }

    /// Names of all registered helpers
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.helpers.iter().map(|(name, _)| *name)
    }

    /// Install every helper as a filter on `tera`.
    ///
    /// Helpers replace Tera's built-in filters of the same name (`title`,
    /// `upper`).
    pub fn register(&self, tera: &mut Tera) {
        for &(name, func) in self.helpers {
            tera.register_filter(name, StringFilter { name, func });
        }
    }
}

/// Adapts a [`HelperFn`] to Tera's filter interface
struct StringFilter {
    name: &'static str,
    func: HelperFn,
}

impl Filter for StringFilter {
    fn filter(
        &self,
        value: &JsonValue,
        _args: &HashMap<String, JsonValue>,
    ) -> tera::Result<JsonValue> {
        match value {
            JsonValue::String(s) => Ok(JsonValue::String((self.func)(s))),
            other => Err(tera::Error::msg(format!(
                "helper '{}' expects a string but got {}",
                self.name,
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
