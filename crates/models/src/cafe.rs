use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, Set, SqlErr};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "cafe")]
#[schema(as = Cafe)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a cafe that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl NewCafe {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_required("name", &self.name)?;
        validate_required("map_url", &self.map_url)?;
        validate_required("img_url", &self.img_url)?;
        validate_required("location", &self.location)?;
        validate_required("seats", &self.seats)?;
        Ok(())
    }
}

pub fn validate_required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewCafe) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let name = new.name.clone();
    let am = ActiveModel {
        id: NotSet,
        name: Set(new.name),
        map_url: Set(new.map_url),
        img_url: Set(new.img_url),
        location: Set(new.location),
        seats: Set(new.seats),
        has_toilet: Set(new.has_toilet),
        has_wifi: Set(new.has_wifi),
        has_sockets: Set(new.has_sockets),
        can_take_calls: Set(new.can_take_calls),
        coffee_price: Set(new.coffee_price),
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            errors::ModelError::Conflict(format!("a cafe named '{name}' already exists"))
        }
        _ => errors::ModelError::Db(e.to_string()),
    })
}

/// Returns `None` when no row with `id` exists, including one removed
/// between the read and the write.
pub async fn set_coffee_price<C: ConnectionTrait>(
    db: &C,
    id: i32,
    price: String,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    apply_coffee_price(db, found, price).await
}

/// Writes `price` onto a previously loaded row; `None` if that row is gone.
pub async fn apply_coffee_price<C: ConnectionTrait>(
    db: &C,
    found: Model,
    price: String,
) -> Result<Option<Model>, errors::ModelError> {
    let mut am: ActiveModel = found.into();
    am.coffee_price = Set(Some(price));
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(errors::ModelError::Db(e.to_string())),
    }
}
