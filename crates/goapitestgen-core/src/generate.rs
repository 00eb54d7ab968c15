//! Code generation pipeline: load, render, format, write

use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    error::Result,
    openapi::OpenApiContext,
    output::write_test_file,
    templates::{HelperRegistry, TemplateManager},
};

/// Main entry point for code generation.
///
/// Runs each stage in order and stops at the first failure. The base name is
/// only checked by the final write, after everything else has run. Returns
/// the path of the written test file.
pub async fn generate(config: &Config) -> Result<PathBuf> {
    // 1. Load OpenAPI spec
    log::info!("Loading OpenAPI spec from {}", config.spec_path);
    let spec = OpenApiContext::from_file(&config.spec_path).await?;
    log::debug!(
        "Spec '{}' {} (base path {}) has {} paths and {} definitions",
        spec.title().unwrap_or("untitled"),
        spec.version().unwrap_or("unversioned"),
        spec.base_path().unwrap_or("/"),
        spec.paths().map_or(0, |p| p.len()),
        spec.definitions().map_or(0, |d| d.len())
    );

    // 2. Render the template
    let helpers = HelperRegistry::new();
    let template = TemplateManager::load(Path::new(&config.template_path), &helpers).await?;
    log::info!(
        "Rendering template {} from {}",
        template.name(),
        template.template_dir().display()
    );
    let rendered = template.render(&spec)?;

    // 3. Format and fix imports
    log::info!("Formatting generated code with {}", config.formatter.program);
    let formatted = config.formatter.format(&rendered).await?;

    // 4. Write the test file
    let path = write_test_file(
        &formatted,
        Path::new(&config.output_dir),
        &config.base_name,
        &config.extension,
    )
    .await?;
    log::info!("Wrote {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, format::Formatter};
    use tempfile::{tempdir, TempDir};

    const SPEC: &str = r##"{
        "swagger": "2.0",
        "paths": {
            "/users": { "get": {} },
            "/users/{id}": { "get": {} }
        },
        "definitions": {
            "User": { "properties": { "user_id": { "type": "integer" } } }
        }
    }"##;

    const TEMPLATE: &str = "package api\n\
{% for path, item in paths %}\n\
func Test{{ path | makeFnName }}(t *testing.T) {}\n\
{% endfor %}\
{% for name, def in definitions %}\n\
type {{ name }} struct {\n\
{% for field, prop in def.properties %}\t{{ field | toPascalCase }} {{ prop.type | swaggerTypeToGoType }}\n{% endfor %}\
}\n\
{% endfor %}";

    struct Fixture {
        dir: TempDir,
        config: Config,
    }

    fn fixture() -> Fixture {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("swagger.json");
        let template_path = dir.path().join("api_test_template.go.tera");
        std::fs::write(&spec_path, SPEC).unwrap();
        std::fs::write(&template_path, TEMPLATE).unwrap();

        let mut config = Config::new(spec_path.to_string_lossy(), "users");
        config.template_path = template_path.to_string_lossy().into_owned();
        config.output_dir = dir.path().to_string_lossy().into_owned();
        config.formatter = Formatter::new("cat", Vec::new());
        Fixture { dir, config }
    }

    #[tokio::test]
    async fn test_generate_end_to_end() -> Result<()> {
        let Fixture { dir, config } = fixture();

        let path = generate(&config).await?;
        assert_eq!(path, dir.path().join("users_test.go"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "package api\n\
             \nfunc TestUsers(t *testing.T) {}\n\
             \nfunc TestUsersByID(t *testing.T) {}\n\
             \ntype User struct {\n\tUserID int\n}\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_formatter_output_is_written() -> Result<()> {
        let Fixture { dir: _dir, mut config } = fixture();
        config.formatter = Formatter::new("tr", vec!["a-z".to_string(), "A-Z".to_string()]);

        let path = generate(&config).await?;
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("PACKAGE API\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_spec_writes_nothing() {
        let Fixture { dir, mut config } = fixture();
        config.spec_path = dir.path().join("missing.json").to_string_lossy().into_owned();

        let err = generate(&config).await.unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(!dir.path().join("users_test.go").exists());
    }

    #[tokio::test]
    async fn test_format_failure_writes_nothing() {
        let Fixture { dir, mut config } = fixture();
        config.formatter = Formatter::new("false", Vec::new());

        let err = generate(&config).await.unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
        assert!(!dir.path().join("users_test.go").exists());
    }

    #[tokio::test]
    async fn test_empty_base_name_fails_at_write() {
        let Fixture { dir, mut config } = fixture();
        config.base_name = String::new();

        let err = generate(&config).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(!dir.path().join("_test.go").exists());
    }

    #[tokio::test]
    async fn test_earlier_stage_fails_before_base_name_check() {
        let Fixture { dir: _dir, mut config } = fixture();
        config.base_name = String::new();
        config.template_path = "missing_template.tera".to_string();

        let err = generate(&config).await.unwrap_err();
        assert!(matches!(err, Error::TemplateLoad { .. }));
    }
}
