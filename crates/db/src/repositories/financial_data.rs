//! Financial data repository for actual-value queries.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::financial_data;
use finboard_core::reporting::FULL_YEAR_MONTH;

/// Financial data repository for read operations.
#[derive(Debug, Clone)]
pub struct FinancialDataRepository {
    db: DatabaseConnection,
}

impl FinancialDataRepository {
    /// Creates a new financial data repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds full-year actuals for one unit and year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_full_year(
        &self,
        business_unit_id: Uuid,
        year: i32,
    ) -> Result<Vec<financial_data::Model>, DbErr> {
        financial_data::Entity::find()
            .filter(financial_data::Column::BusinessUnitId.eq(business_unit_id))
            .filter(financial_data::Column::Year.eq(year))
            .filter(financial_data::Column::Month.eq(FULL_YEAR_MONTH))
            .all(&self.db)
            .await
    }

    /// Finds full-year actuals for all units across the given years.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_full_year_in(
        &self,
        years: &[i32],
    ) -> Result<Vec<financial_data::Model>, DbErr> {
        financial_data::Entity::find()
            .filter(financial_data::Column::Year.is_in(years.iter().copied()))
            .filter(financial_data::Column::Month.eq(FULL_YEAR_MONTH))
            .all(&self.db)
            .await
    }
}
