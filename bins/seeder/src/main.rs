//! One-shot bulk loader for Finboard reporting data.
//!
//! Reads business units, metric definitions, and value rows from a JSON
//! seed file keyed by slugs, clears the existing tables, and reloads
//! them. Budget rows are marked in the file with the sentinel month -1
//! and land in the budgets table as full-year values; everything else
//! goes to financial_data. Rows referencing an unknown unit or metric
//! slug are skipped with a warning, not fatal.
//!
//! Usage: cargo run --bin seeder [path/to/seed-data.json]

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

use finboard_core::reporting::FULL_YEAR_MONTH;
use finboard_db::entities::{budgets, business_units, financial_data, metrics};

/// Month value marking a budget row in the seed file.
const BUDGET_SENTINEL_MONTH: i32 = -1;

/// Default seed file location.
const DEFAULT_SEED_PATH: &str = "data/seed-data.json";

#[derive(Debug, Deserialize)]
struct SeedData {
    business_units: Vec<SeedBusinessUnit>,
    metrics: Vec<SeedMetric>,
    financial_data: Vec<SeedRecord>,
}

#[derive(Debug, Deserialize)]
struct SeedBusinessUnit {
    name: String,
    slug: String,
    display_order: i32,
}

#[derive(Debug, Deserialize)]
struct SeedMetric {
    name: String,
    slug: String,
    category: String,
    is_percentage: bool,
    display_order: i32,
}

#[derive(Debug, Deserialize)]
struct SeedRecord {
    business_unit: String,
    metric: String,
    year: i32,
    month: i32,
    value: Decimal,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let seed_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SEED_PATH.to_string());

    println!("Reading seed data from {seed_path}...");
    let raw = std::fs::read_to_string(&seed_path).expect("Failed to read seed data file");
    let seed_data: SeedData = serde_json::from_str(&raw).expect("Failed to parse seed data file");

    println!("Connecting to database...");
    let db = finboard_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Clearing existing data...");
    clear_existing(&db).await;

    println!("Creating business units...");
    let unit_map = seed_business_units(&db, &seed_data.business_units).await;

    println!("Creating metrics...");
    let metric_map = seed_metrics(&db, &seed_data.metrics).await;

    println!("Creating financial data...");
    let (actual_count, budget_count) =
        seed_values(&db, &seed_data.financial_data, &unit_map, &metric_map).await;

    println!("Seed complete!");
    println!("  - Business Units: {}", unit_map.len());
    println!("  - Metrics: {}", metric_map.len());
    println!("  - Financial Data: {actual_count}");
    println!("  - Budget Data: {budget_count}");
}

/// Deletes all existing rows, children first.
async fn clear_existing(db: &DatabaseConnection) {
    financial_data::Entity::delete_many()
        .exec(db)
        .await
        .expect("Failed to clear financial data");
    budgets::Entity::delete_many()
        .exec(db)
        .await
        .expect("Failed to clear budgets");
    business_units::Entity::delete_many()
        .exec(db)
        .await
        .expect("Failed to clear business units");
    metrics::Entity::delete_many()
        .exec(db)
        .await
        .expect("Failed to clear metrics");
}

/// Inserts business units and returns the slug to ID lookup map.
async fn seed_business_units(
    db: &DatabaseConnection,
    units: &[SeedBusinessUnit],
) -> HashMap<String, Uuid> {
    let mut unit_map = HashMap::new();

    for unit in units {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now().into();
        let model = business_units::ActiveModel {
            id: Set(id),
            name: Set(unit.name.clone()),
            slug: Set(unit.slug.clone()),
            display_order: Set(unit.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        if let Err(e) = model.insert(db).await {
            eprintln!("Failed to insert business unit {}: {e}", unit.slug);
        } else {
            unit_map.insert(unit.slug.clone(), id);
        }
    }

    unit_map
}

/// Inserts metrics and returns the slug to ID lookup map.
async fn seed_metrics(db: &DatabaseConnection, seed: &[SeedMetric]) -> HashMap<String, Uuid> {
    let mut metric_map = HashMap::new();

    for metric in seed {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now().into();
        let model = metrics::ActiveModel {
            id: Set(id),
            name: Set(metric.name.clone()),
            slug: Set(metric.slug.clone()),
            category: Set(metric.category.clone()),
            is_percentage: Set(metric.is_percentage),
            display_order: Set(metric.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        if let Err(e) = model.insert(db).await {
            eprintln!("Failed to insert metric {}: {e}", metric.slug);
        } else {
            metric_map.insert(metric.slug.clone(), id);
        }
    }

    metric_map
}

/// Inserts value rows, routing budget-sentinel rows to the budgets table.
///
/// Returns (actual count, budget count).
async fn seed_values(
    db: &DatabaseConnection,
    records: &[SeedRecord],
    unit_map: &HashMap<String, Uuid>,
    metric_map: &HashMap<String, Uuid>,
) -> (u32, u32) {
    let mut actual_count = 0;
    let mut budget_count = 0;

    for record in records {
        let (Some(&business_unit_id), Some(&metric_id)) = (
            unit_map.get(&record.business_unit),
            metric_map.get(&record.metric),
        ) else {
            println!(
                "  Skipping: unit={}, metric={}",
                record.business_unit, record.metric
            );
            continue;
        };

        let now = chrono::Utc::now().into();

        if record.month == BUDGET_SENTINEL_MONTH {
            let model = budgets::ActiveModel {
                id: Set(Uuid::new_v4()),
                business_unit_id: Set(business_unit_id),
                metric_id: Set(metric_id),
                year: Set(record.year),
                month: Set(FULL_YEAR_MONTH),
                value: Set(record.value),
                created_at: Set(now),
                updated_at: Set(now),
            };
            if let Err(e) = model.insert(db).await {
                eprintln!(
                    "Failed to insert budget {}/{} {}: {e}",
                    record.business_unit, record.metric, record.year
                );
            } else {
                budget_count += 1;
            }
        } else {
            let model = financial_data::ActiveModel {
                id: Set(Uuid::new_v4()),
                business_unit_id: Set(business_unit_id),
                metric_id: Set(metric_id),
                year: Set(record.year),
                month: Set(record.month),
                value: Set(record.value),
                created_at: Set(now),
                updated_at: Set(now),
            };
            if let Err(e) = model.insert(db).await {
                eprintln!(
                    "Failed to insert actual {}/{} {}: {e}",
                    record.business_unit, record.metric, record.year
                );
            } else {
                actual_count += 1;
            }
        }
    }

    (actual_count, budget_count)
}
