//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. All request-time access is read-only.

pub mod budget;
pub mod business_unit;
pub mod financial_data;
pub mod metric;

pub use budget::BudgetRepository;
pub use business_unit::BusinessUnitRepository;
pub use financial_data::FinancialDataRepository;
pub use metric::MetricRepository;
