//! Formatting of generated Go source.
//!
//! Rendered text is piped through an external formatter, `goimports` by
//! default, which both canonicalises the layout and adds or removes imports.
//! The formatter is also the check that the template produced valid Go: a
//! syntax error makes it exit non-zero and the pipeline stops there.

use std::process::Stdio;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Default formatter program
pub const DEFAULT_FORMATTER: &str = "goimports";

/// Formatter invocation: a program reading source on stdin and writing the
/// formatted source to stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatter {
    /// Program to run
    #[serde(default = "default_program")]
    pub program: String,

    /// Extra arguments passed to the program
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::goimports()
    }
}

fn default_program() -> String {
    DEFAULT_FORMATTER.to_string()
}

impl Formatter {
    /// Create a formatter running `program` with `args`
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The standard `goimports` formatter
    pub fn goimports() -> Self {
        Self::new(DEFAULT_FORMATTER, Vec::new())
    }

    /// Format `source`, returning the formatter's output.
    ///
    /// # Errors
    /// [`Error::Format`] if the program cannot be started, exits non-zero or
    /// prints something that is not UTF-8.
    pub async fn format(&self, source: &str) -> Result<String> {
        log::debug!(
            "Formatting {} bytes with {} {:?}",
            source.len(),
            self.program,
            self.args
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.error(format!("failed to start: {}", e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.error("stdin was not captured"))?;

        // Feed stdin while draining stdout so large outputs cannot stall the pipe.
        let feed = async move {
            let written = stdin.write_all(source.as_bytes()).await;
            drop(stdin);
            written
        };
        let (written, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| self.error(format!("failed to wait: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!("{} failed with status {}", self.program, output.status);
            return Err(self.error(format!(
                "exited with {}\n{}",
                output.status,
                stderr.trim_end()
            )));
        }

        // A broken pipe only matters if the formatter did not report a failure itself.
        written.map_err(|e| self.error(format!("failed to write source: {}", e)))?;

        String::from_utf8(output.stdout)
            .map_err(|e| self.error(format!("produced invalid UTF-8: {}", e)))
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Format {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}
