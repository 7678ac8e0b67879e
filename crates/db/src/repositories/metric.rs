//! Metric repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::entities::metrics;

/// Metric repository for read operations.
#[derive(Debug, Clone)]
pub struct MetricRepository {
    db: DatabaseConnection,
}

impl MetricRepository {
    /// Creates a new metric repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds all metrics in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_all_ordered(&self) -> Result<Vec<metrics::Model>, DbErr> {
        metrics::Entity::find()
            .order_by_asc(metrics::Column::DisplayOrder)
            .all(&self.db)
            .await
    }
}
