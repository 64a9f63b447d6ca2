use async_trait::async_trait;
use models::cafe::{self, NewCafe};
use rand::Rng;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::errors::ServiceError;

/// Persistence contract for cafe records.
///
/// Every call is one unit of work against the table; nothing is cached
/// between calls.
#[async_trait]
pub trait CafeStore: Send + Sync {
    /// Every live record, in id order.
    async fn list_all(&self) -> Result<Vec<cafe::Model>, ServiceError>;
    /// One record chosen uniformly; `NotFound` when the table is empty.
    async fn random_one(&self) -> Result<cafe::Model, ServiceError>;
    /// Case-insensitive substring match on `location`. No match is an empty `Vec`.
    async fn search_by_location(&self, substring: &str) -> Result<Vec<cafe::Model>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<cafe::Model>, ServiceError>;
    /// `Conflict` on a duplicate name, `Validation` on a blank required field.
    async fn insert(&self, new: NewCafe) -> Result<cafe::Model, ServiceError>;
    async fn update_price(&self, id: i32, new_price: &str) -> Result<cafe::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmCafeStore {
    pub db: DatabaseConnection,
}

impl SeaOrmCafeStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Folds ASCII only, like SQLite `lower()`. `%`, `_` and the escape character itself match literally.
pub fn like_pattern(substring: &str) -> String {
    let mut escaped = String::with_capacity(substring.len() + 2);
    escaped.push('%');
    for ch in substring.to_ascii_lowercase().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl CafeStore for SeaOrmCafeStore {
    async fn list_all(&self) -> Result<Vec<cafe::Model>, ServiceError> {
        cafe::Entity::find()
            .order_by_asc(cafe::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::storage)
    }

    async fn random_one(&self) -> Result<cafe::Model, ServiceError> {
        // count and pick in one transaction so the offset stays in range
        let txn = self.db.begin().await.map_err(ServiceError::storage)?;
        let total = cafe::Entity::find().count(&txn).await.map_err(ServiceError::storage)?;
        if total == 0 {
            txn.rollback().await.map_err(ServiceError::storage)?;
            return Err(ServiceError::not_found("cafe"));
        }
        let offset = rand::thread_rng().gen_range(0..total);
        let picked = cafe::Entity::find()
            .order_by_asc(cafe::Column::Id)
            .offset(offset)
            .limit(1)
            .one(&txn)
            .await
            .map_err(ServiceError::storage)?;
        txn.commit().await.map_err(ServiceError::storage)?;
        picked.ok_or_else(|| ServiceError::not_found("cafe"))
    }

    async fn search_by_location(&self, substring: &str) -> Result<Vec<cafe::Model>, ServiceError> {
        let location = Expr::expr(Func::lower(Expr::col((cafe::Entity, cafe::Column::Location))));
        cafe::Entity::find()
            .filter(location.like(LikeExpr::new(like_pattern(substring)).escape('\\')))
            .order_by_asc(cafe::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::storage)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<cafe::Model>, ServiceError> {
        cafe::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::storage)
    }

    async fn insert(&self, new: NewCafe) -> Result<cafe::Model, ServiceError> {
        Ok(cafe::create(&self.db, new).await?)
    }

    async fn update_price(&self, id: i32, new_price: &str) -> Result<cafe::Model, ServiceError> {
        cafe::set_coffee_price(&self.db, id, new_price.to_string())
            .await?
            .ok_or_else(|| ServiceError::not_found("cafe"))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = cafe::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::storage)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("cafe"));
        }
        Ok(())
    }
}
