pub mod backend_urls;
pub mod claims;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod tenant;
pub mod tenant_marker;
pub mod tenant_table;
pub mod token_payload;
pub mod token_verifier;
pub mod unverified_token_verifier;

pub use backend_urls::BackendUrls;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use tenant::Tenant;
pub use tenant_marker::extract_tenant_marker;
pub use tenant_table::TenantTable;
pub use token_payload::decode_payload;
pub use token_verifier::TokenVerifier;
pub use unverified_token_verifier::UnverifiedTokenVerifier;
