//! Generator configuration

/// Code generation options
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path of the codec crate as seen from generated code (default: `cirrus_core`)
    pub core_crate: String,

    /// Emit `with_*` builder methods for optional properties
    pub builders: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            core_crate: "cirrus_core".to_string(),
            builders: true,
        }
    }
}
