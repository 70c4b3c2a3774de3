//! Model Definition to Cirrus SDK Code Generator
//!
//! This tool generates Rust model code for cirrus-sdk from JSON model
//! definitions.
//!
//! Usage:
//!   # Generate from stdin
//!   cat schemas/iam/v3/update_credential_option.json | cirrus-codegen
//!
//!   # Generate from file
//!   cirrus-codegen --file schemas/iam/v3/update_credential_option.json \
//!     --output cirrus-sdk/src/iam/v3/model/update_credential_option.rs

mod config;
mod definition;
mod template;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use config::GeneratorConfig;
use definition::ModelDefinition;
use template::generate_model_code;

#[derive(Parser, Debug)]
#[command(name = "cirrus-codegen")]
#[command(about = "Generate Cirrus SDK model code from JSON model definitions")]
struct Args {
    /// Model definition file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Path of the codec crate used by the generated code
    #[arg(long, default_value = "cirrus_core")]
    core_crate: String,

    /// Do not generate `with_*` builder methods
    #[arg(long)]
    no_builders: bool,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            core_crate: self.core_crate.clone(),
            builders: !self.no_builders,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let code = run(&args)?;
    if args.output.is_none() {
        println!("{}", code);
    }
    Ok(())
}

/// Generate the model code and write it to the output file, if any
fn run(args: &Args) -> Result<String> {
    // Read model definition
    let definition_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let definition = ModelDefinition::parse(&definition_json)?;
    log::debug!(
        "Parsed {}/{}/{} with {} properties",
        definition.service,
        definition.version,
        definition.name,
        definition.properties.len()
    );

    let code = generate_model_code(&definition, &args.config())
        .with_context(|| format!("Failed to generate model {}", definition.name))?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path.display()))?;
        log::info!("Generated: {}", output_path.display());
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITION: &str = r#"{
        "service": "iam",
        "version": "v3",
        "name": "UpdateCredentialOption",
        "properties": [
            { "name": "status", "type": "string", "enum": ["active", "inactive"] },
            { "name": "description", "type": "string" }
        ]
    }"#;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "cirrus-codegen",
            "--file",
            "schemas/iam/v3/update_credential_option.json",
            "-o",
            "out.rs",
            "--no-builders",
        ])
        .unwrap();
        assert_eq!(
            args.file,
            Some(PathBuf::from("schemas/iam/v3/update_credential_option.json"))
        );
        assert_eq!(args.output, Some(PathBuf::from("out.rs")));
        let config = args.config();
        assert_eq!(config.core_crate, "cirrus_core");
        assert!(!config.builders);
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("update_credential_option.json");
        let output = dir.path().join("update_credential_option.rs");
        std::fs::write(&input, DEFINITION).unwrap();

        let args = Args {
            file: Some(input),
            output: Some(output.clone()),
            core_crate: "cirrus_core".to_string(),
            no_builders: false,
        };
        let code = run(&args).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, code);
        assert!(written.contains("pub struct UpdateCredentialOptionStatus {"));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            file: Some(dir.path().join("missing.json")),
            output: None,
            core_crate: "cirrus_core".to_string(),
            no_builders: false,
        };
        let err = run(&args).unwrap_err().to_string();
        assert!(err.starts_with("Failed to read file:"), "{}", err);
    }

    #[test]
    fn test_run_reports_invalid_definition() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        std::fs::write(&input, r#"{ "service": "iam" }"#).unwrap();
        let args = Args {
            file: Some(input),
            output: None,
            core_crate: "cirrus_core".to_string(),
            no_builders: false,
        };
        let err = run(&args).unwrap_err().to_string();
        assert_eq!(err, "Failed to parse model definition");
    }
}
