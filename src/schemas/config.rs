//! Config schema - Configuration for docgate

use serde::{Deserialize, Serialize};

/// How the gate evaluator reports incomplete gating checklists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// Stop at the first incomplete gating checklist
    #[default]
    FailFast,
    /// Evaluate every gating checklist and name all incomplete ones
    Aggregate,
}

/// Main configuration for docgate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Reporting policy for denied transitions
    #[serde(default)]
    pub gate_policy: GatePolicy,

    /// Checklist registry file, relative to .docgate/
    #[serde(default = "default_checklists_file")]
    pub checklists_file: String,

    /// Stored documents file, relative to .docgate/
    #[serde(default = "default_documents_file")]
    pub documents_file: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_checklists_file() -> String {
    "checklists.json".to_string()
}

fn default_documents_file() -> String {
    "documents.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            gate_policy: GatePolicy::FailFast,
            checklists_file: default_checklists_file(),
            documents_file: default_documents_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.gate_policy, GatePolicy::FailFast);
        assert_eq!(config.checklists_file, "checklists.json");
        assert_eq!(config.documents_file, "documents.json");
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"gate_policy": "aggregate"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.gate_policy, GatePolicy::Aggregate);
        assert_eq!(parsed.checklists_file, "checklists.json");
        assert_eq!(parsed.schema_version, 1);
    }

    #[test]
    fn test_gate_policy_serialization() {
        assert_eq!(serde_json::to_string(&GatePolicy::FailFast).unwrap(), "\"fail_fast\"");
        assert_eq!(serde_json::to_string(&GatePolicy::Aggregate).unwrap(), "\"aggregate\"");
    }
}
