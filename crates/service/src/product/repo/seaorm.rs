use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use models::product::{self, Product, ProductDraft};

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// SeaORM-backed repository over the `product` table.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let found = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn save(&self, id: Option<i64>, draft: &ProductDraft) -> Result<Product, ServiceError> {
        let am = product::ActiveModel {
            id: id.map_or(NotSet, Unchanged),
            name: Set(draft.name.clone()),
            description: Set(draft.description.clone()),
            price: Set(draft.price),
        };
        let saved = match id {
            None => am.insert(&self.db).await?,
            Some(_) => am.update(&self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => ServiceError::not_found("product"),
                other => other.into(),
            })?,
        };
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
