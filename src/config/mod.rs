//! Configuration module
//!
//! Handles the label-uniqueness policy applied during label accumulation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::model::LabelKind;

/// Which label kinds keep only their first-encountered value.
///
/// The default covers the standard suite and environment kinds; hosts
/// with extra single-valued kinds can load their own policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPolicy {
    /// Kinds restricted to a single value per item
    pub unique: Vec<LabelKind>,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            unique: vec![
                LabelKind::Severity,
                LabelKind::Framework,
                LabelKind::Host,
                LabelKind::Suite,
                LabelKind::ParentSuite,
                LabelKind::SubSuite,
            ],
        }
    }
}

impl LabelPolicy {
    /// Whether a kind is restricted to a single value
    pub fn is_unique(&self, kind: &LabelKind) -> bool {
        self.unique.contains(kind)
    }

    /// Load a policy from a YAML or JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read policy file")?;

        let policy: Self = if path
            .as_ref()
            .extension()
            .map(|e| e == "yaml" || e == "yml")
            .unwrap_or(false)
        {
            serde_yaml::from_str(&content).context("Failed to parse YAML policy")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON policy")?
        };

        debug!(kinds = policy.unique.len(), "loaded label policy");
        Ok(policy)
    }

    /// Save the policy to a YAML or JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = if path
            .as_ref()
            .extension()
            .map(|e| e == "yaml" || e == "yml")
            .unwrap_or(false)
        {
            serde_yaml::to_string(self).context("Failed to serialize policy")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize policy")?
        };

        std::fs::write(path, content).context("Failed to write policy file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = LabelPolicy::default();
        assert_eq!(policy.unique.len(), 6);
        assert!(policy.is_unique(&LabelKind::Severity));
        assert!(policy.is_unique(&LabelKind::ParentSuite));
        assert!(!policy.is_unique(&LabelKind::Tag));
        assert!(!policy.is_unique(&LabelKind::Custom("team".to_string())));
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.yaml");

        let policy = LabelPolicy::default();
        policy.save(&path).unwrap();
        let loaded = LabelPolicy::load(&path).unwrap();
        assert_eq!(loaded, policy);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");

        let policy = LabelPolicy {
            unique: vec![LabelKind::Severity, LabelKind::Custom("team".to_string())],
        };
        policy.save(&path).unwrap();
        let loaded = LabelPolicy::load(&path).unwrap();
        assert_eq!(loaded, policy);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(LabelPolicy::load("/nonexistent/policy.yaml").is_err());
    }
}
