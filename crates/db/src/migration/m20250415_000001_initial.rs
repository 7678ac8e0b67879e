//! Initial database migration.
//!
//! Creates the reporting tables: business units, metric definitions,
//! financial actuals, and budgets.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(BUSINESS_UNITS_SQL).await?;
        db.execute_unprepared(METRICS_SQL).await?;
        db.execute_unprepared(FINANCIAL_DATA_SQL).await?;
        db.execute_unprepared(BUDGETS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const BUSINESS_UNITS_SQL: &str = r"
-- Business units (reporting segments plus the consolidated group)
CREATE TABLE business_units (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    slug VARCHAR(100) NOT NULL UNIQUE,
    display_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_business_units_order ON business_units(display_order);
";

const METRICS_SQL: &str = r"
-- Metric definitions
CREATE TABLE metrics (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    slug VARCHAR(100) NOT NULL UNIQUE,
    category VARCHAR(50) NOT NULL DEFAULT 'other',
    is_percentage BOOLEAN NOT NULL DEFAULT false,
    display_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_metrics_order ON metrics(display_order);
";

const FINANCIAL_DATA_SQL: &str = r"
-- Actual values; month 0 is the full-year aggregate
CREATE TABLE financial_data (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    business_unit_id UUID NOT NULL REFERENCES business_units(id) ON DELETE CASCADE,
    metric_id UUID NOT NULL REFERENCES metrics(id) ON DELETE CASCADE,
    year INTEGER NOT NULL,
    month INTEGER NOT NULL DEFAULT 0,
    value NUMERIC(20, 6) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_financial_data UNIQUE (business_unit_id, metric_id, year, month),
    CONSTRAINT chk_financial_data_month CHECK (month BETWEEN 0 AND 12)
);

-- Index for the full-year read paths
CREATE INDEX idx_financial_data_fy ON financial_data(business_unit_id, year) WHERE month = 0;
";

const BUDGETS_SQL: &str = r"
-- Full-year budget values
CREATE TABLE budgets (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    business_unit_id UUID NOT NULL REFERENCES business_units(id) ON DELETE CASCADE,
    metric_id UUID NOT NULL REFERENCES metrics(id) ON DELETE CASCADE,
    year INTEGER NOT NULL,
    month INTEGER NOT NULL DEFAULT 0,
    value NUMERIC(20, 6) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_budgets UNIQUE (business_unit_id, metric_id, year)
);

CREATE INDEX idx_budgets_year ON budgets(year);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS budgets CASCADE;
DROP TABLE IF EXISTS financial_data CASCADE;
DROP TABLE IF EXISTS metrics CASCADE;
DROP TABLE IF EXISTS business_units CASCADE;
";
