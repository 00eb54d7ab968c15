//! Resolution of the template file used for rendering

use std::path::{Path, PathBuf};

/// Environment variable naming an extra directory to search for templates
pub const TEMPLATE_DIR_ENV: &str = "GOAPITESTGEN_TEMPLATE_DIR";

/// Name of the bundled template set under `templates/`
pub const TEMPLATE_SET: &str = "go_api_test";

/// A resolved template file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDir {
    /// Directory holding the template file
    root_dir: PathBuf,
    /// Full path to the template file
    template_path: PathBuf,
}

impl TemplateDir {
    /// Create a new TemplateDir from a template file path
    pub fn new(template_path: PathBuf) -> Self {
        let root_dir = template_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            root_dir,
            template_path,
        }
    }

    /// Resolve a configured template path.
    ///
    /// A path that exists is used as is. Otherwise a relative path is looked
    /// up in the standard template locations. If it is not found anywhere the
    /// configured path is kept so that loading reports it unchanged.
    pub fn discover(configured: &Path) -> Self {
        if configured.exists() || configured.is_absolute() {
            return Self::new(configured.to_path_buf());
        }

        for base in Self::search_dirs() {
            let candidate = base.join(configured);
            if candidate.is_file() {
                log::debug!("Found template at {}", candidate.display());
                return Self::new(candidate);
            }
        }

        log::debug!(
            "Template {} not found in any standard location",
            configured.display()
        );
        Self::new(configured.to_path_buf())
    }

    /// Standard template locations, in lookup order
    fn search_dirs() -> Vec<PathBuf> {
        let mut locations = Vec::new();

        // 1. Environment variable
        if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
            locations.push(PathBuf::from(dir));
        }

        // 2. Bundled templates relative to the current directory
        locations.push(PathBuf::from("templates").join(TEMPLATE_SET));

        // 3. Bundled templates in the workspace root (for development)
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let manifest_path = PathBuf::from(manifest_dir);
            if let Some(workspace_root) = manifest_path.parent().and_then(Path::parent) {
                locations.push(workspace_root.join("templates").join(TEMPLATE_SET));
            }
        }

        // 4. The user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            locations.push(home_dir.join(".goapitestgen").join("templates"));
        }

        locations
    }

    /// Get the directory containing the template
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the path to the template file
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Returns a displayable version of the template path
    pub fn display(&self) -> std::path::Display<'_> {
        self.template_path.display()
    }

    /// Check if the template file exists
    pub fn exists(&self) -> bool {
        self.template_path.is_file()
    }
}
