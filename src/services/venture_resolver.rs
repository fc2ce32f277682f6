//! Venture resolution for logistics imports.
//!
//! Load and shipper rows may omit the venture id, in which case the row
//! belongs to the single active logistics venture. The lookup sits behind
//! a trait so the commit path can be exercised without a seeded database.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::database::entities::ventures;
use crate::errors::{ImportError, ImportResult};

#[async_trait]
pub trait VentureResolver: Send + Sync {
    /// Resolve the target venture: the explicit id when present, otherwise
    /// the single active LOGISTICS venture.
    async fn resolve(&self, explicit_id: Option<i32>) -> ImportResult<i32>;
}

/// Default resolver backed by the `ventures` table.
pub struct DbVentureResolver {
    db: DatabaseConnection,
}

impl DbVentureResolver {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VentureResolver for DbVentureResolver {
    async fn resolve(&self, explicit_id: Option<i32>) -> ImportResult<i32> {
        let venture = match explicit_id {
            Some(id) => ventures::Entity::find_by_id(id).one(&self.db).await?,
            None => {
                ventures::Entity::find()
                    .filter(ventures::Column::VentureType.eq("LOGISTICS"))
                    .filter(ventures::Column::IsActive.eq(true))
                    .one(&self.db)
                    .await?
            }
        };

        venture
            .map(|v| v.id)
            .ok_or_else(|| ImportError::CommitFailed("No logistics venture found".to_string()))
    }
}

/// Test resolver that answers with a fixed venture id.
pub struct FixedVentureResolver(pub i32);

#[async_trait]
impl VentureResolver for FixedVentureResolver {
    async fn resolve(&self, explicit_id: Option<i32>) -> ImportResult<i32> {
        Ok(explicit_id.unwrap_or(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, Set};

    async fn seed_venture(db: &DatabaseConnection, venture_type: &str, active: bool) -> i32 {
        ventures::ActiveModel {
            name: Set(format!("{} venture", venture_type)),
            venture_type: Set(venture_type.to_string()),
            is_active: Set(active),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_falls_back_to_active_logistics_venture() {
        let db = setup_test_db().await;
        seed_venture(&db, "LOGISTICS", false).await;
        let active_id = seed_venture(&db, "LOGISTICS", true).await;
        seed_venture(&db, "HOTELS", true).await;

        let resolver = DbVentureResolver::new(db);
        assert_eq!(resolver.resolve(None).await.unwrap(), active_id);
    }

    #[tokio::test]
    async fn test_explicit_id_must_exist() {
        let db = setup_test_db().await;
        let id = seed_venture(&db, "LOGISTICS", true).await;

        let resolver = DbVentureResolver::new(db);
        assert_eq!(resolver.resolve(Some(id)).await.unwrap(), id);
        assert!(resolver.resolve(Some(id + 1)).await.is_err());
    }
}
