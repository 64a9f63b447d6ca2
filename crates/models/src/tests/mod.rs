use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::cafe::NewCafe;
use crate::db::connect_with_config;

/// Database connection and configuration tests
pub mod db_tests;

/// CRUD operations tests for the cafe entity
pub mod crud_tests;

/// Transaction handling tests
pub mod transaction_tests;

/// Fresh migrated in-memory database for one test.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn sample(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: name.to_string(),
        map_url: format!("https://maps.example.com/{name}"),
        img_url: format!("https://img.example.com/{name}.jpg"),
        location: location.to_string(),
        seats: "20-30".to_string(),
        has_toilet: true,
        has_wifi: true,
        has_sockets: false,
        can_take_calls: false,
        coffee_price: Some("£2.50".to_string()),
    }
}
