//! Model definitions - the JSON input of the generator
//!
//! A definition describes one SDK model: its service, API version, kind and
//! an ordered list of properties. Property order is preserved in the
//! generated struct.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use heck::ToSnakeCase;
use serde::Deserialize;

/// Field added to every response model for the HTTP status code
pub const HTTP_STATUS_FIELD: &str = "http_status_code";

/// What the model is used for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Nested object shared by requests and responses
    #[default]
    Object,
    /// Request parameters
    Request,
    /// Response payload
    Response,
}

/// One SDK model
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    /// Service short name (e.g., "iam")
    pub service: String,
    /// API version (e.g., "v3")
    pub version: String,
    /// Model type name in PascalCase (e.g., "UpdateCredentialOption")
    pub name: String,
    #[serde(default)]
    pub kind: ModelKind,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

/// Type information of a property or of array items
#[derive(Debug, Deserialize)]
pub struct TypeDefinition {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Integer width hint ("int32" or "int64")
    pub format: Option<String>,
    /// Name of another model in the same service version
    #[serde(rename = "$ref")]
    pub ref_name: Option<String>,
    pub items: Option<Box<TypeDefinition>>,
}

#[derive(Debug, Deserialize)]
pub struct PropertyDefinition {
    /// Wire name of the property
    pub name: String,
    #[serde(flatten)]
    pub schema: TypeDefinition,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Overrides the Rust field name derived from the wire name
    pub field: Option<String>,
}

impl ModelDefinition {
    /// Parse and validate a definition
    pub fn parse(json: &str) -> Result<Self> {
        let definition: ModelDefinition =
            serde_json::from_str(json).context("Failed to parse model definition")?;
        definition.validate()?;
        Ok(definition)
    }

    fn validate(&self) -> Result<()> {
        if self.service.is_empty() || self.version.is_empty() {
            bail!("Model definition needs both a service and a version");
        }
        if !self.name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            || !self.name.chars().all(|c| c.is_ascii_alphanumeric())
        {
            bail!("Invalid model name '{}', expected PascalCase", self.name);
        }

        let mut seen = HashSet::new();
        if self.kind == ModelKind::Response {
            seen.insert(HTTP_STATUS_FIELD.to_string());
        }
        for prop in &self.properties {
            let field = prop.field_name();
            if !seen.insert(field.clone()) {
                bail!(
                    "Property '{}' of {} maps to duplicate field '{}'",
                    prop.name,
                    self.name,
                    field
                );
            }
        }
        Ok(())
    }

    /// Wire names of all properties
    pub fn property_names(&self) -> HashSet<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether every property is optional
    pub fn all_optional(&self) -> bool {
        self.properties.iter().all(|p| !p.required)
    }
}

impl PropertyDefinition {
    /// Rust field name: the override, or the snake_case wire name.
    /// Keywords get a trailing underscore.
    pub fn field_name(&self) -> String {
        let base = match &self.field {
            Some(field) => field.clone(),
            None => self.name.to_snake_case(),
        };
        if is_keyword(&base) {
            format!("{}_", base)
        } else {
            base
        }
    }

    /// Whether the wire name differs from the field name
    pub fn is_renamed(&self) -> bool {
        self.field_name() != self.name
    }
}

fn is_keyword(s: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
        "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen",
        "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override",
        "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
        "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
        "yield",
    ];
    KEYWORDS.contains(&s)
}
