//! `SeaORM` entity definitions.

pub mod budgets;
pub mod business_units;
pub mod financial_data;
pub mod metrics;
