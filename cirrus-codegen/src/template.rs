//! Model template - renders a model definition as Rust source
//!
//! Every enum-valued string property becomes an `open_enum!` family named
//! after the model and the field, so new server-side values never break
//! decoding of older clients.

use std::collections::{BTreeSet, HashSet};

use anyhow::{Result, bail};
use heck::{ToPascalCase, ToShoutySnakeCase};
use regex::Regex;

use crate::config::GeneratorConfig;
use crate::definition::{
    HTTP_STATUS_FIELD, ModelDefinition, ModelKind, PropertyDefinition, TypeDefinition,
};

/// Information about a detected enum family
#[derive(Debug, Clone, PartialEq)]
struct EnumInfo {
    /// Family type name (e.g., "UpdateCredentialOptionStatus")
    type_name: String,
    description: Option<String>,
    /// `(constant name, wire value)` pairs
    members: Vec<(String, String)>,
}

/// A struct field ready to be rendered
#[derive(Debug)]
struct FieldInfo<'a> {
    prop: &'a PropertyDefinition,
    name: String,
    /// Type without the `Option` wrapper
    rust_type: String,
}

/// Types referenced by the rendered fields
#[derive(Debug, Default)]
struct Imports {
    models: BTreeSet<String>,
    hash_map: bool,
}

pub fn generate_model_code(def: &ModelDefinition, config: &GeneratorConfig) -> Result<String> {
    let property_names = def.property_names();
    let mut imports = Imports::default();
    let mut fields = Vec::new();
    let mut enums = Vec::new();

    for prop in &def.properties {
        let name = prop.field_name();
        let ty = match enum_values_for(prop, &property_names)? {
            Some(values) => {
                let info = EnumInfo {
                    type_name: format!(
                        "{}{}",
                        def.name,
                        name.trim_end_matches('_').to_pascal_case()
                    ),
                    description: prop.description.clone(),
                    members: member_constants(&values),
                };
                let type_name = info.type_name.clone();
                enums.push(info);
                type_name
            }
            None => rust_type(&prop.schema, &prop.name, &mut imports)?,
        };
        fields.push(FieldInfo {
            prop,
            name,
            rust_type: ty,
        });
    }

    let mut code = String::new();
    render_header(&mut code, def, config, &imports, !enums.is_empty());
    render_struct(&mut code, def, &fields);
    render_impl(&mut code, def, config, &fields);
    render_display(&mut code, def, config);
    for info in &enums {
        render_enum(&mut code, info);
    }
    Ok(code)
}

fn render_header(
    code: &mut String,
    def: &ModelDefinition,
    config: &GeneratorConfig,
    imports: &Imports,
    has_enums: bool,
) {
    code.push_str(&format!(
        r#"//! {name} model for the {service} {version} API
//!
//! Auto-generated from model definition: {service_dir}/{version}/{name}
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

"#,
        name = def.name,
        service = def.service.to_uppercase(),
        service_dir = def.service,
        version = def.version,
    ));

    if imports.hash_map {
        code.push_str("use std::collections::HashMap;\n");
    }
    code.push_str("use std::fmt;\n\n");

    let models: Vec<&str> = imports.models.iter().map(String::as_str).collect();
    match models.as_slice() {
        [] => {}
        [single] => code.push_str(&format!("use super::{};\n", single)),
        many => code.push_str(&format!("use super::{{{}}};\n", many.join(", "))),
    }
    if has_enums {
        code.push_str(&format!("use {}::open_enum;\n", config.core_crate));
    }
    code.push_str("use serde::{Deserialize, Serialize};\n\n");
}

fn render_struct(code: &mut String, def: &ModelDefinition, fields: &[FieldInfo<'_>]) {
    match (&def.description, def.kind) {
        (Some(desc), _) => push_doc(code, desc, ""),
        (None, ModelKind::Request) => code.push_str("/// Request object\n"),
        (None, ModelKind::Response) => code.push_str("/// Response object\n"),
        (None, ModelKind::Object) => code.push_str(&format!("/// `{}`\n", def.name)),
    }

    let default = if def.all_optional() { "Default, " } else { "" };
    code.push_str(&format!(
        "#[derive(Debug, Clone, {}PartialEq, Serialize, Deserialize)]\npub struct {} {{\n",
        default, def.name
    ));

    for field in fields {
        if let Some(desc) = &field.prop.description {
            push_doc(code, desc, "    ");
        }
        let mut serde_args = Vec::new();
        if field.prop.is_renamed() {
            serde_args.push(format!("rename = {:?}", field.prop.name));
        }
        if !field.prop.required {
            serde_args.push("skip_serializing_if = \"Option::is_none\"".to_string());
        }
        if !serde_args.is_empty() {
            code.push_str(&format!("    #[serde({})]\n", serde_args.join(", ")));
        }
        code.push_str(&format!(
            "    pub {}: {},\n",
            field.name,
            field_type(field)
        ));
    }

    if def.kind == ModelKind::Response {
        code.push_str(&format!(
            "    /// HTTP status code of the response (not part of the payload)\n    #[serde(skip)]\n    pub {}: u16,\n",
            HTTP_STATUS_FIELD
        ));
    }
    code.push_str("}\n");
}

fn render_impl(
    code: &mut String,
    def: &ModelDefinition,
    config: &GeneratorConfig,
    fields: &[FieldInfo<'_>],
) {
    code.push_str(&format!(
        "\nimpl {} {{\n    /// Creates a new `{}`\n",
        def.name, def.name
    ));

    if def.all_optional() {
        code.push_str("    pub fn new() -> Self {\n        Self::default()\n    }\n");
    } else {
        let params: Vec<String> = fields
            .iter()
            .filter(|f| f.prop.required)
            .map(|f| format!("{}: {}", f.name, f.rust_type))
            .collect();
        code.push_str(&format!(
            "    pub fn new({}) -> Self {{\n        Self {{\n",
            params.join(", ")
        ));
        for field in fields {
            if field.prop.required {
                code.push_str(&format!("            {},\n", field.name));
            } else {
                code.push_str(&format!("            {}: None,\n", field.name));
            }
        }
        if def.kind == ModelKind::Response {
            code.push_str(&format!("            {}: 0,\n", HTTP_STATUS_FIELD));
        }
        code.push_str("        }\n    }\n");
    }

    if config.builders {
        for field in fields.iter().filter(|f| !f.prop.required) {
            code.push_str(&format!(
                r#"
    pub fn with_{method}(mut self, {name}: {ty}) -> Self {{
        self.{name} = Some({name});
        self
    }}
"#,
                method = field.name.trim_end_matches('_'),
                name = field.name,
                ty = field.rust_type,
            ));
        }
    }
    code.push_str("}\n");
}

fn render_display(code: &mut String, def: &ModelDefinition, config: &GeneratorConfig) {
    code.push_str(&format!(
        r#"
impl fmt::Display for {name} {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        {core}::model::describe(f, "{name}", self)
    }}
}}
"#,
        name = def.name,
        core = config.core_crate,
    ));
}

fn render_enum(code: &mut String, info: &EnumInfo) {
    code.push_str("\nopen_enum! {\n");
    if let Some(desc) = &info.description {
        push_doc(code, desc, "    ");
    }
    code.push_str(&format!("    pub struct {} {{\n", info.type_name));
    for (constant, value) in &info.members {
        code.push_str(&format!("        {} = {:?},\n", constant, value));
    }
    code.push_str("    }\n}\n");
}

fn push_doc(code: &mut String, text: &str, indent: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            code.push_str(&format!("{}///\n", indent));
        } else {
            code.push_str(&format!("{}/// {}\n", indent, line));
        }
    }
}

fn field_type(field: &FieldInfo<'_>) -> String {
    if field.prop.required {
        field.rust_type.clone()
    } else {
        format!("Option<{}>", field.rust_type)
    }
}

/// Map a definition type to a Rust type, recording needed imports
fn rust_type(schema: &TypeDefinition, prop_name: &str, imports: &mut Imports) -> Result<String> {
    if let Some(ref_name) = &schema.ref_name {
        if !is_type_name(ref_name) {
            bail!("Invalid $ref '{}' on property '{}'", ref_name, prop_name);
        }
        imports.models.insert(ref_name.clone());
        return Ok(ref_name.clone());
    }

    let ty = match schema.type_name.as_deref() {
        Some("string") => "String".to_string(),
        Some("integer") => match schema.format.as_deref() {
            Some("int64") => "i64".to_string(),
            None | Some("int32") => "i32".to_string(),
            Some(other) => bail!("Unsupported integer format '{}' on '{}'", other, prop_name),
        },
        Some("number") => "f64".to_string(),
        Some("boolean") => "bool".to_string(),
        Some("array") => match &schema.items {
            Some(items) => format!("Vec<{}>", rust_type(items, prop_name, imports)?),
            None => bail!("Array property '{}' has no items", prop_name),
        },
        Some("object") => {
            imports.hash_map = true;
            "HashMap<String, String>".to_string()
        }
        Some(other) => bail!("Unsupported type '{}' on property '{}'", other, prop_name),
        None => bail!("Property '{}' has neither a type nor a $ref", prop_name),
    };
    Ok(ty)
}

fn is_type_name(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Enum values of a string property: the explicit list, or values quoted
/// in its description
fn enum_values_for(
    prop: &PropertyDefinition,
    property_names: &HashSet<&str>,
) -> Result<Option<Vec<String>>> {
    let is_string = matches!(prop.schema.type_name.as_deref(), None | Some("string"))
        && prop.schema.ref_name.is_none();

    if let Some(values) = &prop.enum_values {
        if !is_string {
            bail!("Enum property '{}' must be a string", prop.name);
        }
        if values.is_empty() {
            bail!("Enum property '{}' has no values", prop.name);
        }
        return Ok(Some(values.clone()));
    }

    if is_string
        && prop.schema.type_name.is_some()
        && let Some(desc) = &prop.description
    {
        return Ok(extract_enum_from_description(desc, property_names));
    }
    Ok(None)
}

/// Extract enum values listed in a description.
/// Looks for values in curly double quotes (“active”), which the API
/// reference uses to spell out allowed values. Property names mentioned the
/// same way are skipped.
fn extract_enum_from_description(
    description: &str,
    property_names: &HashSet<&str>,
) -> Option<Vec<String>> {
    let re = Regex::new(r"“([^”\s]+)”").ok()?;
    let mut seen = HashSet::new();
    let values: Vec<String> = re
        .captures_iter(description)
        .map(|cap| cap[1].to_string())
        .filter(|v| !property_names.contains(v.as_str()))
        .filter(|v| seen.insert(v.clone()))
        .collect();

    // A single quoted value is an example, not an enumeration
    if values.len() >= 2 { Some(values) } else { None }
}

/// Constant names for enum values, e.g. "zh-cn" -> "ZH_CN"
fn member_constants(values: &[String]) -> Vec<(String, String)> {
    let mut used = HashSet::new();
    let mut members = Vec::new();
    for value in values {
        if members.iter().any(|(_, v)| v == value) {
            continue;
        }
        let mut base = value.to_shouty_snake_case();
        if base.is_empty() {
            base = "EMPTY".to_string();
        } else if base.starts_with(|c: char| c.is_ascii_digit()) {
            base = format!("VALUE_{}", base);
        }

        let mut constant = base.clone();
        let mut n = 2;
        while !used.insert(constant.clone()) {
            constant = format!("{}_{}", base, n);
            n += 1;
        }
        members.push((constant, value.clone()));
    }
    members
}
