pub mod credential;
pub mod url_validator;

pub use credential::credential_matches;
pub use url_validator::validate_target_url;
