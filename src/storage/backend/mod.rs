//! Sea-ORM storage backend
//!
//! This module provides database storage using Sea-ORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};
use tracing::{debug, info};

use crate::errors::{RedlinkError, Result};
use crate::storage::{Link, LinkStore};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{link_to_active_model, model_to_link};

use migration::entities::link;

/// Infer the database type from its connection URL
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite://")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(RedlinkError::database_config(format!(
            "cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// Sea-ORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(RedlinkError::database_config(
                "database URL is not set".to_string(),
            ));
        }

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, backend_name).await?
        };

        run_migrations(&db).await?;

        info!("Storage backend initialized: {}", backend_name);

        Ok(SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
        })
    }

    fn map_write_err(err: sea_orm::DbErr, link: &Link) -> RedlinkError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RedlinkError::duplicate_name(format!(
                "a link named '{}' already exists",
                link.name
            )),
            _ => RedlinkError::database_operation(format!(
                "failed to write link '{}': {}",
                link.id, err
            )),
        }
    }
}

#[async_trait]
impl LinkStore for SeaOrmStorage {
    async fn exists(&self, id: &str) -> Result<bool> {
        let count = link::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| {
                RedlinkError::database_operation(format!("existence check failed: {}", e))
            })?;

        Ok(count > 0)
    }

    async fn find(&self, id: &str) -> Result<Option<Link>> {
        let model = link::Entity::find_by_id(id).one(&self.db).await.map_err(|e| {
            RedlinkError::database_operation(format!("failed to load link '{}': {}", id, e))
        })?;

        Ok(model.map(model_to_link))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(link::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                RedlinkError::database_operation(format!(
                    "failed to look up link named '{}': {}",
                    name, e
                ))
            })?;

        Ok(model.map(model_to_link))
    }

    async fn insert(&self, new_link: &Link) -> Result<()> {
        link::Entity::insert(link_to_active_model(new_link, true))
            .exec(&self.db)
            .await
            .map_err(|e| Self::map_write_err(e, new_link))?;

        debug!("Link inserted: {}", new_link.id);
        Ok(())
    }

    async fn update(&self, updated: &Link) -> Result<()> {
        link::Entity::update(link_to_active_model(updated, false))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => {
                    RedlinkError::not_found(format!("link '{}' not found", updated.id))
                }
                other => Self::map_write_err(other, updated),
            })?;

        debug!("Link updated: {}", updated.id);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let result = link::Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            RedlinkError::database_operation(format!("failed to delete link '{}': {}", id, e))
        })?;

        if result.rows_affected > 0 {
            info!("Link deleted: {}", id);
        }
        Ok(())
    }

    async fn increment_visits(&self, id: &str) -> Result<bool> {
        // Single atomic UPDATE; concurrent redirects cannot lose counts
        let result = link::Entity::update_many()
            .col_expr(link::Column::Visits, Expr::col(link::Column::Visits).add(1))
            .filter(link::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedlinkError::database_operation(format!(
                    "failed to increment visits for '{}': {}",
                    id, e
                ))
            })?;

        Ok(result.rows_affected > 0)
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(infer_backend_from_url("sqlite://data.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("links.sqlite").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url(":memory:").unwrap(), "sqlite");
        assert_eq!(
            infer_backend_from_url("mysql://root@localhost/redlink").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("postgres://localhost/redlink").unwrap(),
            "postgres"
        );
        assert!(infer_backend_from_url("redis://localhost").is_err());
    }
}
