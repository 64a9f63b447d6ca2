#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::cafe::NewCafe;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database; every call is isolated from the others.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn new_cafe(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: name.to_string(),
        map_url: "https://g.page/example".to_string(),
        img_url: "https://img.example.com/cafe.jpg".to_string(),
        location: location.to_string(),
        seats: "20-30".to_string(),
        has_toilet: true,
        has_wifi: false,
        has_sockets: true,
        can_take_calls: false,
        coffee_price: Some("£2.40".to_string()),
    }
}
