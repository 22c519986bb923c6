//! Host application integration.
//!
//! Hosts own an [`Extensions`] registry on their application context;
//! [`init_app`] builds the encoding service from configuration and installs
//! it under [`EXTENSION_KEY`]. Initializing an already-initialized host is
//! a no-op, never an error, so hosts may call it from multiple setup paths.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::service::EncodingService;

/// Registry key marking that this extension has been initialized.
pub const EXTENSION_KEY: &str = "sorenson";

/// String-keyed extension registry owned by a host application context.
#[derive(Default)]
pub struct Extensions {
    entries: HashMap<String, Arc<EncodingService>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an extension is registered under the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Fetch a registered service by key.
    pub fn get(&self, key: &str) -> Option<Arc<EncodingService>> {
        self.entries.get(key).cloned()
    }
}

/// Install the encoding service into the host registry.
pub fn init_app(extensions: &mut Extensions, config: &Config) -> anyhow::Result<()> {
    if extensions.contains(EXTENSION_KEY) {
        tracing::debug!("encoding service already registered, skipping");
        return Ok(());
    }

    let service = EncodingService::from_config(config)?;
    extensions
        .entries
        .insert(EXTENSION_KEY.to_string(), Arc::new(service));

    tracing::info!(key = EXTENSION_KEY, "registered encoding service");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_registers_under_marker_key() {
        let mut extensions = Extensions::new();
        assert!(!extensions.contains(EXTENSION_KEY));

        init_app(&mut extensions, &Config::default()).unwrap();
        assert!(extensions.contains(EXTENSION_KEY));
        assert!(extensions.get(EXTENSION_KEY).is_some());
    }

    #[test]
    fn second_init_keeps_existing_service() {
        let mut extensions = Extensions::new();
        init_app(&mut extensions, &Config::default()).unwrap();
        let first = extensions.get(EXTENSION_KEY).unwrap();

        init_app(&mut extensions, &Config::default()).unwrap();
        let second = extensions.get(EXTENSION_KEY).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn init_with_broken_config_fails_and_registers_nothing() {
        let mut extensions = Extensions::new();
        let mut config = Config::default();
        // Two groups for the same ratio make the catalog unbuildable.
        let dup = config.presets[0].clone();
        config.presets.push(dup);

        assert!(init_app(&mut extensions, &config).is_err());
        assert!(!extensions.contains(EXTENSION_KEY));
    }
}
