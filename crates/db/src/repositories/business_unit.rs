//! Business unit repository for database operations.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::business_units;

/// Business unit repository for read operations.
#[derive(Debug, Clone)]
pub struct BusinessUnitRepository {
    db: DatabaseConnection,
}

impl BusinessUnitRepository {
    /// Creates a new business unit repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds all business units in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_all_ordered(&self) -> Result<Vec<business_units::Model>, DbErr> {
        business_units::Entity::find()
            .order_by_asc(business_units::Column::DisplayOrder)
            .all(&self.db)
            .await
    }

    /// Finds a business unit by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<business_units::Model>, DbErr> {
        business_units::Entity::find()
            .filter(business_units::Column::Slug.eq(slug))
            .one(&self.db)
            .await
    }
}
