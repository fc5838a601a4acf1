use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::entity::{id::parse_id, Product};
use crate::errors::ServiceError;
use crate::pagination::{Pagination, SortDirection};
use crate::product::domain::{CreateProductInput, UpdateProductInput};
use crate::product::repository::ProductRepository;

/// Application service for product use cases.
/// Ids arrive as raw text and are validated here before reaching the repository.
pub struct ProductService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and store a new product.
    ///
    /// # Examples
    /// ```
    /// use service::product::{ProductService, domain::CreateProductInput, repository::mock::MockProductRepository};
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(MockProductRepository::default()));
    /// let p = tokio_test::block_on(svc.create(CreateProductInput { name: "Mug".into(), price: 7.5 })).unwrap();
    /// let found = tokio_test::block_on(svc.get(&p.id.to_string())).unwrap();
    /// assert_eq!(found.name, "Mug");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, ServiceError> {
        let product = Product::new(input.name, input.price)?;
        self.repo.create(&product).await?;
        info!(product_id = %product.id, price = product.price, "product_created");
        Ok(product)
    }

    pub async fn get(&self, id: &str) -> Result<Product, ServiceError> {
        let id = parse_id(id)?;
        self.repo.find_by_id(id).await
    }

    pub async fn list(&self, page: Pagination, sort: SortDirection) -> Result<Vec<Product>, ServiceError> {
        let products = self.repo.find_all(page, sort).await?;
        debug!(page = page.page, limit = page.limit, ?sort, count = products.len(), "products_listed");
        Ok(products)
    }

    /// Replace name and price; id and creation time are preserved.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateProductInput) -> Result<Product, ServiceError> {
        let id = parse_id(id)?;
        let mut product = self.repo.find_by_id(id).await?;
        product.update_details(input.name, input.price)?;
        self.repo.update(&product).await?;
        info!(product_id = %product.id, "product_updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        self.repo.delete(id).await?;
        info!(product_id = %id, "product_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityError;
    use crate::product::repository::{mock::MockProductRepository, SeaOrmProductRepository};
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn mock_service() -> ProductService<MockProductRepository> {
        ProductService::new(Arc::new(MockProductRepository::default()))
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_storage() {
        let svc = mock_service();
        let err = svc.create(CreateProductInput { name: "".into(), price: 1.0 }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(EntityError::RequiredName)));
        let err = svc.create(CreateProductInput { name: "A".into(), price: -3.0 }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(EntityError::InvalidPrice)));
        assert!(svc.list(Pagination::default(), SortDirection::Asc).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_ids_are_validation_errors() {
        let svc = mock_service();
        assert!(matches!(svc.get("nope").await, Err(ServiceError::Validation(EntityError::InvalidId))));
        assert!(matches!(svc.delete("").await, Err(ServiceError::Validation(EntityError::RequiredId))));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let svc = mock_service();
        let id = Uuid::new_v4().to_string();
        assert!(matches!(svc.get(&id).await, Err(ServiceError::NotFound(_))));
        let input = UpdateProductInput { name: "x".into(), price: 1.0 };
        assert!(matches!(svc.update(&id, input).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(&id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_validates_new_values() -> anyhow::Result<()> {
        let svc = mock_service();
        let p = svc.create(CreateProductInput { name: "Lamp".into(), price: 10.0 }).await?;
        let err = svc.update(&p.id.to_string(), UpdateProductInput { name: "Lamp".into(), price: 0.0 }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(EntityError::RequiredPrice)));
        assert_eq!(svc.get(&p.id.to_string()).await?.price, 10.0);
        Ok(())
    }

    #[tokio::test]
    async fn full_lifecycle_against_sqlite() -> anyhow::Result<()> {
        let svc = ProductService::new(Arc::new(SeaOrmProductRepository { db: get_db().await? }));
        let p = svc.create(CreateProductInput { name: "Lamp".into(), price: 10.0 }).await?;
        let id = p.id.to_string();

        let updated = svc.update(&id, UpdateProductInput { name: "Desk lamp".into(), price: 12.5 }).await?;
        assert_eq!(updated.id, p.id);

        let listed = svc.list(Pagination::default(), SortDirection::Asc).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Desk lamp");
        assert_eq!(listed[0].price, 12.5);

        svc.delete(&id).await?;
        assert!(matches!(svc.get(&id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
