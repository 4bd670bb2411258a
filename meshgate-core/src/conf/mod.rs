mod duration;
mod error;
mod holder;
mod loader;
pub mod types;

pub use duration::DurationConfig;
pub use error::ConfigError;
pub use holder::{ConfigHolder, SharedConfig};
pub use loader::load_config;
pub use types::MeshgateConfig;
