use std::sync::Arc;

use models::product::{Product, ProductDraft};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Application service for the product catalogue.
///
/// Absent rows are reported as `Ok(None)`; `Err` is reserved for storage faults.
pub struct ProductService<R: ProductRepository + ?Sized = dyn ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Persist a new product; the returned row carries the storage-assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::product::{ProductService, repository::mock::InMemoryProductRepository};
    /// use models::product::ProductDraft;
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(InMemoryProductRepository::default()));
    /// let draft = ProductDraft { name: "Chair".into(), description: "Wooden chair".into(), price: 49.99 };
    /// let created = tokio_test::block_on(svc.create(draft)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.name, "Chair");
    /// ```
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, ServiceError> {
        let created = self.repo.save(None, &draft).await?;
        info!(id = created.id, "product_created");
        Ok(created)
    }

    /// Overwrite name, description and price of row `id`, keeping its id.
    /// Storage is not written when the row does not exist.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: i64, draft: ProductDraft) -> Result<Option<Product>, ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else { return Ok(None) };
        let updated = self.repo.save(Some(existing.id), &draft).await?;
        info!(id = updated.id, "product_updated");
        Ok(Some(updated))
    }

    /// Remove row `id`, returning its state from just before removal.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else { return Ok(None) };
        if !self.repo.delete(existing.id).await? {
            // removed concurrently between the read and the delete
            return Ok(None);
        }
        info!(id = existing.id, "product_deleted");
        Ok(Some(existing))
    }
}
