use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum RedlinkError {
    NotFound(String),
    DuplicateName(String),
    MissingCredential(String),
    WrongCredential(String),
    IdSpaceExhausted(String),
    Validation(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Serialization(String),
    FileOperation(String),
}

impl RedlinkError {
    /// Stable error code, used in logs and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            RedlinkError::NotFound(_) => "E001",
            RedlinkError::DuplicateName(_) => "E002",
            RedlinkError::MissingCredential(_) => "E003",
            RedlinkError::WrongCredential(_) => "E004",
            RedlinkError::IdSpaceExhausted(_) => "E005",
            RedlinkError::Validation(_) => "E006",
            RedlinkError::DatabaseConfig(_) => "E007",
            RedlinkError::DatabaseConnection(_) => "E008",
            RedlinkError::DatabaseOperation(_) => "E009",
            RedlinkError::Serialization(_) => "E010",
            RedlinkError::FileOperation(_) => "E011",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            RedlinkError::NotFound(_) => "Resource Not Found",
            RedlinkError::DuplicateName(_) => "Duplicate Link Name",
            RedlinkError::MissingCredential(_) => "Missing Credential",
            RedlinkError::WrongCredential(_) => "Wrong Credential",
            RedlinkError::IdSpaceExhausted(_) => "Identifier Space Exhausted",
            RedlinkError::Validation(_) => "Validation Error",
            RedlinkError::DatabaseConfig(_) => "Database Configuration Error",
            RedlinkError::DatabaseConnection(_) => "Database Connection Error",
            RedlinkError::DatabaseOperation(_) => "Database Operation Error",
            RedlinkError::Serialization(_) => "Serialization Error",
            RedlinkError::FileOperation(_) => "File Operation Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RedlinkError::NotFound(msg) => msg,
            RedlinkError::DuplicateName(msg) => msg,
            RedlinkError::MissingCredential(msg) => msg,
            RedlinkError::WrongCredential(msg) => msg,
            RedlinkError::IdSpaceExhausted(msg) => msg,
            RedlinkError::Validation(msg) => msg,
            RedlinkError::DatabaseConfig(msg) => msg,
            RedlinkError::DatabaseConnection(msg) => msg,
            RedlinkError::DatabaseOperation(msg) => msg,
            RedlinkError::Serialization(msg) => msg,
            RedlinkError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status the API layer maps this error to
    pub fn http_status(&self) -> StatusCode {
        match self {
            RedlinkError::NotFound(_) => StatusCode::NOT_FOUND,
            RedlinkError::DuplicateName(_) => StatusCode::CONFLICT,
            RedlinkError::MissingCredential(_) => StatusCode::FORBIDDEN,
            RedlinkError::WrongCredential(_) => StatusCode::FORBIDDEN,
            RedlinkError::Validation(_) => StatusCode::BAD_REQUEST,
            RedlinkError::IdSpaceExhausted(_)
            | RedlinkError::DatabaseConfig(_)
            | RedlinkError::DatabaseConnection(_)
            | RedlinkError::DatabaseOperation(_)
            | RedlinkError::Serialization(_)
            | RedlinkError::FileOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RedlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RedlinkError {}

impl RedlinkError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        RedlinkError::NotFound(msg.into())
    }

    pub fn duplicate_name<T: Into<String>>(msg: T) -> Self {
        RedlinkError::DuplicateName(msg.into())
    }

    pub fn missing_credential<T: Into<String>>(msg: T) -> Self {
        RedlinkError::MissingCredential(msg.into())
    }

    pub fn wrong_credential<T: Into<String>>(msg: T) -> Self {
        RedlinkError::WrongCredential(msg.into())
    }

    pub fn id_space_exhausted<T: Into<String>>(msg: T) -> Self {
        RedlinkError::IdSpaceExhausted(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        RedlinkError::Validation(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        RedlinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        RedlinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        RedlinkError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        RedlinkError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        RedlinkError::FileOperation(msg.into())
    }
}

impl From<sea_orm::DbErr> for RedlinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        RedlinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for RedlinkError {
    fn from(err: std::io::Error) -> Self {
        RedlinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for RedlinkError {
    fn from(err: serde_json::Error) -> Self {
        RedlinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RedlinkError>;
