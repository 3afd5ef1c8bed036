pub mod static_bundle;
pub mod unauthorized;
