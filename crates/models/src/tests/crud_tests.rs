use sea_orm::{EntityTrait, QueryFilter, ColumnTrait};
use anyhow::Result;

use super::{sample, setup_test_db};
use crate::cafe;
use crate::errors::ModelError;

#[tokio::test]
async fn test_cafe_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = cafe::create(&db, sample("Science Gallery", "London Bridge")).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Science Gallery");
    assert_eq!(created.coffee_price.as_deref(), Some("£2.50"));

    // Read
    let found = cafe::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(created.clone()));

    // Find by name
    let by_name = cafe::Entity::find()
        .filter(cafe::Column::Name.eq("Science Gallery"))
        .one(&db)
        .await?;
    assert_eq!(by_name.map(|c| c.id), Some(created.id));

    // Update price
    let updated = cafe::set_coffee_price(&db, created.id, "£3.00".into()).await?.expect("row exists");
    assert_eq!(updated.coffee_price.as_deref(), Some("£3.00"));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.seats, created.seats);

    // Delete
    let res = cafe::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert!(cafe::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_ids_are_distinct() -> Result<()> {
    let db = setup_test_db().await?;
    let a = cafe::create(&db, sample("A", "Peckham")).await?;
    let b = cafe::create(&db, sample("B", "Peckham")).await?;
    assert_ne!(a.id, b.id);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() -> Result<()> {
    let db = setup_test_db().await?;
    cafe::create(&db, sample("Dup", "Hackney")).await?;
    let err = cafe::create(&db, sample("Dup", "Shoreditch")).await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_blank_required_field_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let mut input = sample("Blank Seats", "Bermondsey");
    input.seats = "   ".into();
    let err = cafe::create(&db, input).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(ref m) if m.contains("seats")));
    assert!(cafe::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_null_coffee_price_stored() -> Result<()> {
    let db = setup_test_db().await?;
    let mut input = sample("No Price", "Barbican");
    input.coffee_price = None;
    let created = cafe::create(&db, input).await?;
    let found = cafe::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert!(found.coffee_price.is_none());
    let json = serde_json::to_value(&found)?;
    assert!(json["coffee_price"].is_null());
    assert_eq!(json["has_toilet"], serde_json::json!(true));
    Ok(())
}

#[tokio::test]
async fn test_set_price_on_missing_row() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(cafe::set_coffee_price(&db, 999, "£1.00".into()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_set_price_after_concurrent_delete() -> Result<()> {
    let db = setup_test_db().await?;
    let created = cafe::create(&db, sample("Vanishing", "Slough")).await?;
    let loaded = cafe::Entity::find_by_id(created.id).one(&db).await?.expect("row just inserted");

    cafe::Entity::delete_by_id(created.id).exec(&db).await?;

    assert!(cafe::apply_coffee_price(&db, loaded, "£2.00".into()).await?.is_none());
    assert!(cafe::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}
