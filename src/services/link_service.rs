//! Link registry
//!
//! Business logic for link operations: creation with a freshly allocated
//! identifier, credential-guarded mutation, and the redirect dereference
//! with its visit counter.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{RedlinkError, Result};
use crate::services::IdGenerator;
use crate::storage::{Link, LinkStore};
use crate::utils::credential_matches;
use crate::utils::validate_target_url;

/// Request to create a new link
#[derive(Debug, Clone)]
pub struct CreateLinkRequest {
    pub name: String,
    pub target_url: String,
    /// Non-empty value makes the link password-protected
    pub password: Option<String>,
}

/// Request to update an existing link
///
/// Omitted or empty fields are left unchanged. `password` is the caller's
/// credential for protected links; the stored password itself is immutable
/// after creation.
#[derive(Debug, Clone, Default)]
pub struct UpdateLinkRequest {
    pub name: Option<String>,
    pub target_url: Option<String>,
    pub password: Option<String>,
}

/// Service for link registry operations
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    id_generator: Arc<IdGenerator>,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            store,
            id_generator,
        }
    }

    /// Check the supplied credential against a record's protection state
    ///
    /// Unprotected records accept anything. Protected records demand a
    /// non-empty, exactly matching credential.
    fn check_credential(link: &Link, supplied: Option<&str>) -> Result<()> {
        if !link.is_protected() {
            return Ok(());
        }

        let stored = link.password.as_deref().unwrap_or_default();

        match supplied.filter(|p| !p.is_empty()) {
            None => Err(RedlinkError::missing_credential(format!(
                "link '{}' is password protected",
                link.id
            ))),
            Some(supplied) if credential_matches(supplied, stored) => Ok(()),
            Some(_) => Err(RedlinkError::wrong_credential(format!(
                "wrong password for link '{}'",
                link.id
            ))),
        }
    }

    /// Create a new link under a freshly allocated identifier
    pub async fn create_link(&self, req: CreateLinkRequest) -> Result<Link> {
        if req.name.trim().is_empty() {
            return Err(RedlinkError::validation("name: must not be blank"));
        }

        validate_target_url(&req.target_url)
            .map_err(|e| RedlinkError::validation(format!("target_url: {}", e)))?;

        let id = self.id_generator.generate(self.store.as_ref()).await?;

        let new_link = Link {
            id,
            name: req.name,
            target_url: req.target_url,
            password: req.password.filter(|p| !p.is_empty()),
            visits: 0,
        };

        self.store.insert(&new_link).await?;

        info!(
            "LinkService: created link '{}' -> '{}'",
            new_link.id, new_link.target_url
        );
        Ok(new_link)
    }

    /// Get a single link by id
    pub async fn get_link(&self, id: &str) -> Result<Link> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| RedlinkError::not_found(format!("link '{}' not found", id)))
    }

    /// Get a single link by its display name
    pub async fn get_link_by_name(&self, name: &str) -> Result<Link> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| RedlinkError::not_found(format!("no link named '{}'", name)))
    }

    /// Apply a partial update to an existing link
    ///
    /// The merged record is fully validated before anything is persisted,
    /// so a failed update leaves the record untouched.
    pub async fn update_link(&self, id: &str, req: UpdateLinkRequest) -> Result<Link> {
        let existing = self.get_link(id).await?;

        Self::check_credential(&existing, req.password.as_deref())?;

        let name = match req.name.filter(|n| !n.is_empty()) {
            Some(name) => name,
            None => existing.name,
        };

        let target_url = match req.target_url.filter(|t| !t.is_empty()) {
            Some(target) => {
                validate_target_url(&target)
                    .map_err(|e| RedlinkError::validation(format!("target_url: {}", e)))?;
                target
            }
            None => existing.target_url,
        };

        let updated = Link {
            id: existing.id,
            name,
            target_url,
            password: existing.password,
            visits: existing.visits,
        };

        self.store.update(&updated).await?;

        info!("LinkService: updated link '{}'", updated.id);
        Ok(updated)
    }

    /// Delete a link; deleting an absent id is a successful no-op
    pub async fn delete_link(&self, id: &str, password: Option<&str>) -> Result<()> {
        let Some(existing) = self.store.find(id).await? else {
            debug!("LinkService: delete of absent link '{}' ignored", id);
            return Ok(());
        };

        Self::check_credential(&existing, password)?;

        self.store.remove(id).await?;

        info!("LinkService: deleted link '{}'", id);
        Ok(())
    }

    /// Dereference a link: atomically count the visit, return the target
    pub async fn redirect_and_increment(&self, id: &str) -> Result<String> {
        if !self.store.increment_visits(id).await? {
            return Err(RedlinkError::not_found(format!("link '{}' not found", id)));
        }

        let link = self
            .store
            .find(id)
            .await?
            .ok_or_else(|| RedlinkError::not_found(format!("link '{}' not found", id)))?;

        Ok(link.target_url)
    }
}
