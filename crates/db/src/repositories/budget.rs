//! Budget repository for budget-value queries.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::budgets;

/// Budget repository for read operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds budgets for one unit and year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_for_unit_year(
        &self,
        business_unit_id: Uuid,
        year: i32,
    ) -> Result<Vec<budgets::Model>, DbErr> {
        budgets::Entity::find()
            .filter(budgets::Column::BusinessUnitId.eq(business_unit_id))
            .filter(budgets::Column::Year.eq(year))
            .all(&self.db)
            .await
    }

    /// Finds budgets for all units for one year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_for_year(&self, year: i32) -> Result<Vec<budgets::Model>, DbErr> {
        budgets::Entity::find()
            .filter(budgets::Column::Year.eq(year))
            .all(&self.db)
            .await
    }
}
