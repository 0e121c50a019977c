use async_trait::async_trait;
use models::product::{Product, ProductDraft};

use crate::errors::ServiceError;

/// Persistence operations the product service needs, and nothing more.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All rows in ascending id order.
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError>;
    /// Insert when `id` is `None`; otherwise overwrite the fields of row `id`.
    /// Overwriting a row that no longer exists yields `ServiceError::NotFound`.
    async fn save(&self, id: Option<i64>, draft: &ProductDraft) -> Result<Product, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i64, Product>,
        last_id: i64,
    }

    /// Ids start at 1 and are never reused, like a database sequence.
    #[derive(Default)]
    pub struct InMemoryProductRepository {
        table: Mutex<Table>,
    }

    impl InMemoryProductRepository {
        fn lock(&self) -> Result<MutexGuard<'_, Table>, ServiceError> {
            self.table.lock().map_err(|_| ServiceError::Db("in-memory table lock poisoned".into()))
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn save(&self, id: Option<i64>, draft: &ProductDraft) -> Result<Product, ServiceError> {
            let mut table = self.lock()?;
            let id = match id {
                Some(id) if table.rows.contains_key(&id) => id,
                Some(_) => return Err(ServiceError::not_found("product")),
                None => {
                    table.last_id += 1;
                    table.last_id
                }
            };
            let row = Product {
                id,
                name: draft.name.clone(),
                description: draft.description.clone(),
                price: draft.price,
            };
            table.rows.insert(id, row.clone());
            Ok(row)
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.remove(&id).is_some())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn draft() -> ProductDraft {
            ProductDraft { name: "Chair".into(), description: "Wooden chair".into(), price: 49.99 }
        }

        #[tokio::test]
        async fn save_over_missing_row_is_not_found() {
            let repo = InMemoryProductRepository::default();
            let err = repo.save(Some(7), &draft()).await.unwrap_err();
            assert!(matches!(err, ServiceError::NotFound(_)));
            assert!(repo.find_all().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn save_over_deleted_row_is_not_found() {
            let repo = InMemoryProductRepository::default();
            let created = repo.save(None, &draft()).await.unwrap();
            assert!(repo.delete(created.id).await.unwrap());
            let err = repo.save(Some(created.id), &draft()).await.unwrap_err();
            assert!(matches!(err, ServiceError::NotFound(_)));
        }
    }
}
