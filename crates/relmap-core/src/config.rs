//! Model builder configuration.

use serde::{Deserialize, Serialize};

/// Default for [`BuilderConfig::check_key_types`].
pub const DEFAULT_CHECK_KEY_TYPES: bool = true;

/// Default for [`BuilderConfig::reject_shared_foreign_keys`].
pub const DEFAULT_REJECT_SHARED_FOREIGN_KEYS: bool = true;

/// Options controlling how strictly a model is checked at finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Reject relationships whose foreign key and principal key hold
    /// different scalar types.
    pub check_key_types: bool,

    /// Reject models where one foreign key property backs more than one
    /// relationship.
    pub reject_shared_foreign_keys: bool,
}

impl BuilderConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            check_key_types: DEFAULT_CHECK_KEY_TYPES,
            reject_shared_foreign_keys: DEFAULT_REJECT_SHARED_FOREIGN_KEYS,
        }
    }

    /// Enable or disable key type checking.
    pub fn with_check_key_types(mut self, enabled: bool) -> Self {
        self.check_key_types = enabled;
        self
    }

    /// Enable or disable rejection of shared foreign keys.
    pub fn with_reject_shared_foreign_keys(mut self, enabled: bool) -> Self {
        self.reject_shared_foreign_keys = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(json).map_err(|e| crate::Error::Serialization(e.to_string()))
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.check_key_types, DEFAULT_CHECK_KEY_TYPES);
        assert_eq!(
            config.reject_shared_foreign_keys,
            DEFAULT_REJECT_SHARED_FOREIGN_KEYS
        );
    }

    #[test]
    fn test_config_builder() {
        let config = BuilderConfig::new()
            .with_check_key_types(false)
            .with_reject_shared_foreign_keys(false);

        assert!(!config.check_key_types);
        assert!(!config.reject_shared_foreign_keys);
    }

    #[test]
    fn test_config_from_json() {
        let config = BuilderConfig::from_json(r#"{ "check_key_types": false }"#).unwrap();
        assert!(!config.check_key_types);
        assert!(config.reject_shared_foreign_keys);

        assert!(BuilderConfig::from_json("not json").is_err());
    }
}
