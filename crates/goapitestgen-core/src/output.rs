//! Writing the generated test file

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Name of the test file generated for `base_name`, e.g. `petstore_test.go`
pub fn test_file_name(base_name: &str, extension: &str) -> String {
    format!("{}_test.{}", base_name, extension)
}

/// Write `content` to `<output_dir>/<base_name>_test.<extension>`.
///
/// An existing file is truncated and overwritten. Returns the path written.
///
/// # Errors
/// [`Error::InvalidArgument`] if `base_name` is empty, in which case nothing
/// is created, and [`Error::Write`] if the file cannot be created or written.
/// A failed write may leave a partial file behind.
pub async fn write_test_file(
    content: &str,
    output_dir: &Path,
    base_name: &str,
    extension: &str,
) -> Result<PathBuf> {
    if base_name.is_empty() {
        return Err(Error::invalid_argument("filename cannot be empty"));
    }

    let path = output_dir.join(test_file_name(base_name, extension));
    let write_error = |source| Error::Write {
        path: path.clone(),
        source,
    };

    log::debug!("Writing {} bytes to {}", content.len(), path.display());
    let mut file = tokio::fs::File::create(&path).await.map_err(write_error)?;
    file.write_all(content.as_bytes())
        .await
        .map_err(write_error)?;
    file.flush().await.map_err(write_error)?;

    Ok(path)
}
