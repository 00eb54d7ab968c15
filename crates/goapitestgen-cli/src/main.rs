//! goapitestgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use goapitestgen_core::{Config, Formatter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "goapitestgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a Go test file from an OpenAPI/Swagger JSON spec
    Generate {
        /// Path to the OpenAPI/Swagger JSON file
        #[arg(long)]
        spec: Option<String>,
        /// Output base name; the file written is <NAME>_test.<EXTENSION>
        #[arg(long)]
        name: Option<String>,
        /// Template file to render (default: api_test_template.go.tera)
        #[arg(long)]
        template: Option<String>,
        /// Directory to write the test file to (default: current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Extension of the generated file (default: go)
        #[arg(long)]
        extension: Option<String>,
        /// Formatter program reading source on stdin (default: goimports)
        #[arg(long)]
        formatter: Option<String>,
        /// Extra argument for the formatter; may be repeated
        #[arg(long = "formatter-arg", allow_hyphen_values = true)]
        formatter_args: Vec<String>,
        /// Configuration file (YAML, JSON or TOML); flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            spec,
            name,
            template,
            output_dir,
            extension,
            formatter,
            formatter_args,
            config,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => {
                    let spec = spec
                        .clone()
                        .context("--spec is required when no --config is given")?;
                    Config::new(spec, name.clone().unwrap_or_default())
                }
            };

            // Flags take precedence over the config file
            if let Some(spec) = spec {
                config.spec_path = spec;
            }
            if let Some(name) = name {
                config.base_name = name;
            }
            if let Some(template) = template {
                config.template_path = template;
            }
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir.to_string_lossy().into_owned();
            }
            if let Some(extension) = extension {
                config.extension = extension;
            }
            if let Some(program) = formatter {
                config.formatter = Formatter::new(program, formatter_args);
            } else if !formatter_args.is_empty() {
                config.formatter.args = formatter_args;
            }

            log::debug!("Resolved configuration: {:?}", config);

            let path = goapitestgen_core::generate(&config)
                .await
                .context("Failed to generate tests")?;

            println!("Generated {}", path.display());
        }
    }
    Ok(())
}
