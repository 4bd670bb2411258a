pub mod cluster;
pub mod registry;
pub mod server;

pub use cluster::*;
pub use registry::*;
pub use server::*;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// The whole deployment descriptor.
///
/// Every section is independently optional: a missing key decodes to its
/// zero value, never an error. Unknown keys are ignored so descriptors from
/// newer deployments stay loadable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MeshgateConfig {
    #[serde(default)]
    pub servers: Vec<ServerConfig>,

    #[serde(default)]
    pub cluster_manager: ClusterManagerConfig,

    /// Used by the service discovery module.
    #[serde(default)]
    pub service_registry: ServiceRegistryConfig,

    /// Opaque sub-document for dynamic resources. Preserved verbatim;
    /// the resource manager that owns its schema decodes it later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_resources: Option<Box<RawValue>>,

    /// Opaque sub-document for static resources, same contract as
    /// `dynamic_resources`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_resources: Option<Box<RawValue>>,
}
