use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;

use crate::db::{connect_with_config, test_connection};

/// Test basic in-memory connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    test_connection(&db).await?;

    let row = db
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string()))
        .await?
        .expect("one row");
    let value: i32 = row.try_get("", "test")?;
    assert_eq!(value, 1);
    Ok(())
}

/// The in-memory pool must keep one database across queries
#[tokio::test]
async fn test_memory_pool_shares_one_database() -> Result<()> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 8,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    db.execute(Statement::from_string(DatabaseBackend::Sqlite, "CREATE TABLE probe (v INTEGER)".to_string())).await?;
    db.execute(Statement::from_string(DatabaseBackend::Sqlite, "INSERT INTO probe VALUES (7)".to_string())).await?;

    let mut handles = vec![];
    for _ in 0..4 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            db.query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT v FROM probe".to_string()))
                .await
                .map(|row| row.and_then(|r| r.try_get::<i32>("", "v").ok()))
        }));
    }
    for h in handles {
        assert_eq!(h.await??, Some(7));
    }
    Ok(())
}

/// File-backed databases are created on first connect
#[tokio::test]
async fn test_file_database_created() -> Result<()> {
    let path = std::env::temp_dir().join(format!("cafes-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    test_connection(&db).await?;
    drop(db);
    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
    Ok(())
}
