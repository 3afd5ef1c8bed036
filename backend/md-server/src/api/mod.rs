pub mod error;
pub mod extractors;
pub mod not_found;
pub mod proxy;
