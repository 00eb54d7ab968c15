//! Template loading and rendering

// Internal imports (std, crate)
use std::path::Path;

use crate::{
    error::{error_chain, Error, Result},
    openapi::OpenApiContext,
};

use super::{HelperRegistry, TemplateDir};

// External imports (alphabetized)
use tera::{Context, Tera};

/// A single parsed template with its helpers installed
#[derive(Debug)]
pub struct TemplateManager {
    /// Tera instance owning just this template
    tera: Tera,
    /// Where the template was loaded from
    template_dir: TemplateDir,
    /// Name the template is registered under
    name: String,
}

impl TemplateManager {
    /// Load and parse the template at `template_path`.
    ///
    /// The path is resolved through [`TemplateDir::discover`]. Helpers from
    /// `helpers` are installed before parsing so the template may use them.
    ///
    /// # Errors
    /// [`Error::TemplateLoad`] if the file cannot be read and
    /// [`Error::TemplateParse`] if it is not valid template syntax.
    pub async fn load(template_path: &Path, helpers: &HelperRegistry) -> Result<Self> {
        let template_dir = TemplateDir::discover(template_path);
        let path = template_dir.template_path().to_path_buf();
        log::debug!("Loading template: {}", path.display());
        if !template_dir.exists() {
            log::warn!(
                "Template not found at {} or in any template directory",
                template_path.display()
            );
        }

        let source = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::TemplateLoad {
                path: path.clone(),
                source,
            })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string());

        let tera = Self::build_tera(&name, &source, helpers).map_err(|e| Error::TemplateParse {
            path: path.clone(),
            message: error_chain(&e),
        })?;

        Ok(Self {
            tera,
            template_dir,
            name,
        })
    }

    /// Parse template text that is already in memory
    pub fn from_source(name: &str, source: &str, helpers: &HelperRegistry) -> Result<Self> {
        let tera = Self::build_tera(name, source, helpers).map_err(|e| Error::TemplateParse {
            path: name.into(),
            message: error_chain(&e),
        })?;

        Ok(Self {
            tera,
            template_dir: TemplateDir::new(name.into()),
            name: name.to_string(),
        })
    }

    fn build_tera(name: &str, source: &str, helpers: &HelperRegistry) -> tera::Result<Tera> {
        let mut tera = Tera::default();
        // Generated Go is never HTML.
        tera.autoescape_on(Vec::new());
        helpers.register(&mut tera);
        tera.add_raw_template(name, source)?;
        Ok(tera)
    }

    /// Name the template is registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the template directory
    pub fn template_dir(&self) -> &TemplateDir {
        &self.template_dir
    }

    /// Render the template with the spec's top-level keys as variables.
    ///
    /// # Errors
    /// [`Error::TemplateExecution`] if the template dereferences a missing
    /// field or a helper rejects its input.
    pub fn render(&self, spec: &OpenApiContext) -> Result<String> {
        let context = Context::from_serialize(spec)
            .map_err(|e| Error::execution(&self.name, error_chain(&e)))?;

        log::debug!("Rendering template: {}", self.name);
        match self.tera.render(&self.name, &context) {
            Ok(content) => {
                log::debug!(
                    "Rendered {} ({} bytes)",
                    self.name,
                    content.len()
                );
                Ok(content)
            }
            Err(e) => {
                log::error!("Template rendering failed for '{}': {}", self.name, e);
                log::error!(
                    "Available context keys: {:?}",
                    spec.as_json().keys().collect::<Vec<_>>()
                );
                Err(Error::execution(&self.name, error_chain(&e)))
            }
        }
    }
}
