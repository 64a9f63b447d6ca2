use sea_orm::{EntityTrait, TransactionTrait};
use anyhow::Result;

use super::{sample, setup_test_db};
use crate::cafe;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = cafe::create(&txn, sample("Committed", "Soho")).await?;
    txn.commit().await?;

    let found = cafe::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|c| c.name), Some("Committed".to_string()));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = cafe::create(&txn, sample("Rolled Back", "Soho")).await?;
    txn.rollback().await?;

    assert!(cafe::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}
