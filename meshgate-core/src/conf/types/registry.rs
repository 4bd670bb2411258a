use serde::{Deserialize, Serialize};

/// Self-registration metadata published for service discovery.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceRegistryConfig {
    #[serde(default, rename = "application")]
    pub service_app_info: ServiceAppInfoConfig,

    #[serde(default, rename = "publish_info")]
    pub service_pub_info: Vec<ServicePubInfoConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceAppInfoConfig {
    #[serde(default)]
    pub ant_share_cloud: bool,

    #[serde(default)]
    pub data_center: String,

    #[serde(default)]
    pub app_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServicePubInfoConfig {
    #[serde(default)]
    pub service_name: String,

    #[serde(default)]
    pub pub_data: String,
}
