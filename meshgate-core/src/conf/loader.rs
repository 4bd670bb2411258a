use crate::conf::error::ConfigError;
use crate::conf::holder::ConfigHolder;
use crate::conf::types::MeshgateConfig;

use std::fs;
use std::path::Path;

/// Loads a deployment descriptor from `path`.
///
/// The decode is all-or-nothing: any malformed structure or field (chiefly
/// an invalid duration literal) fails the whole load and no partial tree is
/// produced. The caller decides whether a failure is fatal.
pub fn load_config(path: &Path) -> Result<ConfigHolder, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config: MeshgateConfig =
        serde_json::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Record the resolved source path for later re-dump / debugging
    //--------------------------------------------------------------------------
    let resolved = std::path::absolute(path).map_err(|e| ConfigError::resolve_path(path, e))?;

    tracing::info!(
        path = %resolved.display(),
        servers = config.servers.len(),
        clusters = config.cluster_manager.clusters.len(),
        "loaded config"
    );

    Ok(ConfigHolder::new(config, resolved))
}
