//! Unified API error codes

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::RedlinkError;

/// API error code enum
///
/// Serialized as numbers via serde_repr, grouped by thousands:
/// - 0: success
/// - 1000-1099: generic errors
/// - 2000-2099: credential errors
/// - 3000-3099: link errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // Generic 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,

    // Credentials 2000-2099
    CredentialMissing = 2000,
    CredentialWrong = 2001,

    // Links 3000-3099
    LinkNotFound = 3000,
    LinkNameTaken = 3001,
    LinkInvalidUrl = 3002,
    LinkIdSpaceExhausted = 3003,
}

impl From<&RedlinkError> for ErrorCode {
    fn from(err: &RedlinkError) -> Self {
        match err {
            RedlinkError::NotFound(_) => ErrorCode::LinkNotFound,
            RedlinkError::DuplicateName(_) => ErrorCode::LinkNameTaken,
            RedlinkError::MissingCredential(_) => ErrorCode::CredentialMissing,
            RedlinkError::WrongCredential(_) => ErrorCode::CredentialWrong,
            RedlinkError::IdSpaceExhausted(_) => ErrorCode::LinkIdSpaceExhausted,
            RedlinkError::Validation(_) => ErrorCode::BadRequest,
            RedlinkError::DatabaseConfig(_)
            | RedlinkError::DatabaseConnection(_)
            | RedlinkError::DatabaseOperation(_)
            | RedlinkError::Serialization(_)
            | RedlinkError::FileOperation(_) => ErrorCode::InternalServerError,
        }
    }
}
