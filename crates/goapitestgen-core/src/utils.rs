//! String transformation utilities for code generation
//!
//! These are the naming conventions the Go test template relies on: turning
//! API paths into function names, `$ref` strings into DTO names and Swagger
//! types into Go types. All of them are pure and total.

/// Prefix of a Swagger 2.0 schema reference
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Path placeholder that `cut_word` turns into a `ById` suffix
const ID_PLACEHOLDER: &str = "{id}";

/// Fallback Go type for Swagger types without a mapping
pub const FALLBACK_GO_TYPE: &str = "interface{}";

/// Words that are written fully upper-case in Go identifiers
fn acronym(word: &str) -> Option<&'static str> {
    match word {
        "id" => Some("ID"),
        "url" => Some("URL"),
        "api" => Some("API"),
        _ => None,
    }
}

/// Title-case every word after trimming surrounding whitespace.
///
/// The first letter of each word is upper-cased and the rest lower-cased.
/// Underscores, apostrophes, periods and colons do not break a word, so
/// `user_name` becomes `User_name`, `report.pdf` becomes `Report.pdf` and
/// `{id}` becomes `{Id}`.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;

    for ch in s.trim().chars() {
        if ch.is_alphanumeric() {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(ch);
            in_word = in_word && is_mid_word(ch);
        }
    }

    result
}

/// Punctuation that joins letters into a single word
fn is_mid_word(ch: char) -> bool {
    matches!(ch, '_' | '\'' | '.' | ':')
}

/// Upper-case the whole string
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Derive a short resource name from an API path.
///
/// `/users` gives `Users`, `/users/{id}` gives `UsersById` and
/// `/users/orders/...` gives `UsersOrders`. Anything past the third segment
/// is ignored.
pub fn cut_word(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').collect();
    match parts.len() {
        0 | 1 => path.to_string(),
        2 => title_case(parts[1]),
        _ if parts[2] == ID_PLACEHOLDER => format!("{}ById", title_case(parts[1])),
        _ => format!("{}{}", title_case(parts[1]), title_case(parts[2])),
    }
}

/// Extract the DTO name from a reference such as `#/definitions/Widget`.
///
/// Returns an empty string when the reference does not point into
/// `definitions`.
pub fn extract_dto_name(reference: &str) -> String {
    reference
        .strip_prefix(DEFINITIONS_PREFIX)
        .map(|name| name.trim().to_string())
        .unwrap_or_default()
}

/// Map a Swagger type name onto the Go type used in generated tests
pub fn swagger_type_to_go_type(swagger_type: &str) -> &'static str {
    match swagger_type {
        "string" => "string",
        "integer" => "int",
        "number" => "float64",
        "boolean" => "bool",
        "array" => "[]interface{}",
        "object" => "map[string]interface{}",
        _ => FALLBACK_GO_TYPE,
    }
}

/// Convert a string to PascalCase, splitting on spaces and underscores.
///
/// Each word is lower-cased first; `id`, `url` and `api` become acronyms.
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(|c: char| c == ' ' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let word = word.to_lowercase();
            match acronym(&word) {
                Some(acronym) => acronym.to_string(),
                None => capitalize_first_letter(&word),
            }
        })
        .collect()
}

/// Build a Go function name from an API path.
///
/// Every segment is title-cased and concatenated. Path parameters such as
/// `{petId}` become `ByPetid`; a parameter that is a known acronym keeps its
/// acronym spelling, so `/users/{id}` gives `UsersByID`.
pub fn make_fn_name(path: &str) -> String {
    path.split('/')
        .map(|part| match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
            Some(param) => {
                let param = param.trim_matches(|c: char| c == '{' || c == '}');
                let name = acronym(&param.trim().to_lowercase())
                    .map(str::to_string)
                    .unwrap_or_else(|| title_case(param));
                format!("By{}", name)
            }
            None => title_case(part),
        })
        .collect()
}

/// Upper-case only the first character
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Return the API path part of a base path, starting at the first `/`.
///
/// `api.example.com/v2` gives `/v2`; input without a slash is returned as is.
pub fn get_api_path(base_path: &str) -> String {
    match base_path.find('/') {
        Some(index) => base_path[index..].to_string(),
        None => base_path.to_string(),
    }
}
