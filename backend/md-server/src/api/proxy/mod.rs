#[allow(clippy::module_inception)]
pub mod proxy;
pub mod proxy_config;
pub mod upstream;
