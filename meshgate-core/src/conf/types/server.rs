use crate::conf::duration::DurationConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    /// Default logger for everything under this server.
    #[serde(default)]
    pub default_log_path: String,

    #[serde(default)]
    pub default_log_level: String,

    /// How long to keep draining connections on graceful shutdown.
    #[serde(default)]
    pub graceful_timeout: DurationConfig,

    /// Worker concurrency hint; 0 means "let the runtime decide".
    #[serde(default)]
    pub processor: usize,

    #[serde(default)]
    pub listeners: Vec<ListenerConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ListenerConfig {
    /// Not required to be unique at this layer; the listener manager
    /// enforces uniqueness where it matters.
    #[serde(default)]
    pub name: String,

    /// Address to bind, e.g. "0.0.0.0:8080"
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub bind_port: bool,

    #[serde(default)]
    pub network_filters: Vec<FilterConfig>,

    #[serde(default)]
    pub stream_filters: Vec<FilterConfig>,

    /// Per-listener logger overrides.
    #[serde(default)]
    pub log_path: String,

    #[serde(default)]
    pub log_level: String,

    #[serde(default)]
    pub access_logs: Vec<AccessLogConfig>,

    /// Only used in the http2 case.
    #[serde(default)]
    pub disable_conn_io: bool,
}

/// One filter instance in a chain.
///
/// `config` is deliberately untyped: its shape is owned by the filter
/// implementation identified by `filter_type`, which extracts and validates
/// the fields it expects at the point of use.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FilterConfig {
    #[serde(default, rename = "type")]
    pub filter_type: String,

    #[serde(default)]
    pub config: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AccessLogConfig {
    #[serde(default)]
    pub log_path: String,

    /// Template string; empty means the sink's default format.
    #[serde(default)]
    pub log_format: String,
}
