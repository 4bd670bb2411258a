pub mod conf;
pub mod logging;
