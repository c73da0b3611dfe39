//! API request and response types

use serde::{Deserialize, Serialize};

use crate::errors::{RedlinkError, Result};
use crate::storage::Link;

const MAX_NAME_LENGTH: usize = 200;
const MAX_PASSWORD_LENGTH: usize = 100;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Body of `POST /api/links`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PostNewLink {
    pub name: String,
    pub target_url: String,
    pub password: Option<String>,
}

impl PostNewLink {
    /// Field-shape validation, rejected before the registry is invoked
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RedlinkError::validation("name: must not be blank"));
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(RedlinkError::validation(format!(
                "name: cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        if let Some(ref password) = self.password
            && password.len() > MAX_PASSWORD_LENGTH
        {
            return Err(RedlinkError::validation(format!(
                "password: cannot exceed {} characters",
                MAX_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }
}

/// Body of `PATCH /api/links/{id}`
///
/// `password` is the credential for protected links, never a new password.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PatchLink {
    pub name: Option<String>,
    pub target_url: Option<String>,
    pub password: Option<String>,
}

impl PatchLink {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name
            && name.len() > MAX_NAME_LENGTH
        {
            return Err(RedlinkError::validation(format!(
                "name: cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        if let Some(ref password) = self.password
            && password.len() > MAX_PASSWORD_LENGTH
        {
            return Err(RedlinkError::validation(format!(
                "password: cannot exceed {} characters",
                MAX_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }
}

/// Query parameters of `GET /api/links`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LookupQuery {
    pub name: String,
}

/// Query parameters of `DELETE /api/links/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DeleteQuery {
    pub password: Option<String>,
}

/// Link view returned by the API; never exposes the stored password
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkResponse {
    pub id: String,
    pub name: String,
    pub target_url: String,
    /// Human-facing redirect URL, `<base_url>/red/<id>`
    pub redirect_url: String,
    pub visits: u64,
}

impl LinkResponse {
    pub fn from_link(link: &Link, base_url: &str) -> Self {
        Self {
            id: link.id.clone(),
            name: link.name.clone(),
            target_url: link.target_url.clone(),
            redirect_url: format!("{}/red/{}", base_url.trim_end_matches('/'), link.id),
            visits: link.visits,
        }
    }
}
