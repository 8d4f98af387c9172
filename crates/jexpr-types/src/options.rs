//! Per-invocation configuration threaded through `execute`.
//!
//! Both structs derive `Serialize`/`Deserialize` so a host can load them from
//! a config file the same way `oatty-registry`'s `RegistryConfig` does,
//! rather than only constructing them in code.

use serde::{Deserialize, Serialize};

/// Options forwarded to the template-application collaborator behind
/// `permuto.apply`. The engine never inspects these beyond passing them
/// through; the external adapter decides what they mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// Whether the template adapter should perform string interpolation.
    /// Default `false`.
    pub enable_interpolation: bool,
}

/// The full per-invocation configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteOptions {
    /// The key recognized as the literal-array wrapper, e.g. `{ "array": [...] }`.
    /// Default `"array"`.
    #[serde(default = "default_array_key")]
    pub array_key: String,
    #[serde(default)]
    pub template_options: TemplateOptions,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self { array_key: default_array_key(), template_options: TemplateOptions::default() }
    }
}

pub fn default_array_key() -> String {
    "array".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_round_trip_through_json() {
        let options = ExecuteOptions { array_key: "@x".to_string(), template_options: TemplateOptions { enable_interpolation: true } };
        let json = serde_json::to_string(&options).unwrap();
        let parsed: ExecuteOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: ExecuteOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ExecuteOptions::default());
    }
}
