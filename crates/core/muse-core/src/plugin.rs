//! Plugin types

use crate::{Result, Service};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Plugin trait
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Plugin name (unique identifier)
    fn name(&self) -> &str;

    /// Plugin description
    fn description(&self) -> &str;

    /// Plugin dependencies (other plugin names)
    fn dependencies(&self) -> Vec<String> {
        vec![]
    }

    /// Priority (higher = loads later, overrides earlier plugins)
    fn priority(&self) -> i32 {
        0
    }

    /// Initialize plugin with caller-supplied settings
    async fn init(&self, _config: HashMap<String, String>) -> Result<()> {
        Ok(())
    }

    /// Services provided by this plugin
    fn services(&self) -> Vec<Arc<dyn Service>> {
        vec![]
    }

    /// Configuration schema
    ///
    /// A JSON object keyed by setting name; each entry carries `type`,
    /// `default` and `description`.
    fn config_schema(&self) -> Option<serde_json::Value> {
        None
    }
}

/// Resolve a setting the way plugins do at init time
///
/// Explicit config wins over the process environment, which wins over the
/// schema default. Returns the value and whether it came from the default.
pub fn resolve_setting(
    key: &str,
    config: &HashMap<String, String>,
    schema: Option<&serde_json::Value>,
) -> Option<(String, bool)> {
    if let Some(v) = config.get(key) {
        return Some((v.clone(), false));
    }
    if let Ok(v) = std::env::var(key) {
        return Some((v, false));
    }
    schema
        .and_then(|s| s.get(key))
        .and_then(|entry| entry.get("default"))
        .map(|v| (v.to_string().replace('"', ""), true))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyPlugin;

    #[async_trait]
    impl Plugin for EmptyPlugin {
        fn name(&self) -> &str {
            "empty"
        }

        fn description(&self) -> &str {
            "does nothing"
        }
    }

    #[test]
    fn test_plugin_defaults() {
        let plugin = EmptyPlugin;
        assert!(plugin.dependencies().is_empty());
        assert_eq!(plugin.priority(), 0);
        assert!(plugin.services().is_empty());
        assert!(plugin.config_schema().is_none());
        assert!(tokio_test::block_on(plugin.init(HashMap::new())).is_ok());
    }

    #[test]
    fn test_resolve_setting_precedence() {
        let schema = serde_json::json!({
            "MUSE_TEST_SETTING": {"type": "boolean", "default": true}
        });
        let mut config = HashMap::new();

        let (value, is_default) =
            resolve_setting("MUSE_TEST_SETTING", &config, Some(&schema)).unwrap();
        assert_eq!(value, "true");
        assert!(is_default);

        config.insert("MUSE_TEST_SETTING".to_string(), "false".to_string());
        let (value, is_default) =
            resolve_setting("MUSE_TEST_SETTING", &config, Some(&schema)).unwrap();
        assert_eq!(value, "false");
        assert!(!is_default);

        assert!(resolve_setting("MUSE_TEST_UNKNOWN_SETTING", &HashMap::new(), Some(&schema)).is_none());
    }
}
