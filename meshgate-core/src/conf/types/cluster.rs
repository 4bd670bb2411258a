use crate::conf::duration::DurationConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ClusterManagerConfig {
    #[serde(default)]
    pub auto_discovery: bool,

    #[serde(default)]
    pub clusters: Vec<ClusterConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ClusterConfig {
    /// Join key used by routing and subscription consumers; uniqueness is
    /// not enforced at this layer.
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub cluster_type: String,

    #[serde(default)]
    pub sub_type: String,

    #[serde(default)]
    pub lb_type: String,

    #[serde(default)]
    pub max_request_per_conn: u32,

    #[serde(default)]
    pub circuit_breakers: CircuitBreakersConfig,

    #[serde(default)]
    pub health_check: HealthCheckConfig,

    #[serde(default, rename = "spec")]
    pub cluster_spec: ClusterSpecConfig,

    #[serde(default)]
    pub hosts: Vec<HostConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct CircuitBreakersConfig {
    #[serde(default)]
    pub thresholds: Vec<ThresholdConfig>,
}

/// Connection-pool limits for one routing priority.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub max_connections: u32,

    #[serde(default)]
    pub max_pending_requests: u32,

    #[serde(default)]
    pub max_requests: u32,

    #[serde(default)]
    pub max_retries: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct HealthCheckConfig {
    #[serde(default)]
    pub timeout: DurationConfig,

    #[serde(default)]
    pub healthy_threshold: u32,

    #[serde(default)]
    pub unhealthy_threshold: u32,

    #[serde(default)]
    pub interval: DurationConfig,

    #[serde(default)]
    pub interval_jitter: DurationConfig,

    #[serde(default)]
    pub check_path: String,

    #[serde(default)]
    pub service_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ClusterSpecConfig {
    #[serde(default, rename = "subscribe")]
    pub subscribes: Vec<SubscribeSpecConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SubscribeSpecConfig {
    #[serde(default)]
    pub service_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct HostConfig {
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub hostname: String,

    /// Relative weight, interpreted by the load balancer; not normalized
    /// here.
    #[serde(default)]
    pub weight: u32,
}
