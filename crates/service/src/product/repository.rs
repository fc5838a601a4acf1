use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::entity::Product;
use crate::errors::ServiceError;
use crate::pagination::{Pagination, SortDirection};

/// Persistence capability for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), ServiceError>;
    /// Unknown ids are `ServiceError::NotFound`.
    async fn find_by_id(&self, id: Uuid) -> Result<Product, ServiceError>;
    async fn find_all(&self, page: Pagination, sort: SortDirection) -> Result<Vec<Product>, ServiceError>;
    async fn update(&self, product: &Product) -> Result<(), ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}

impl From<models::product::Model> for Product {
    fn from(m: models::product::Model) -> Self {
        Product { id: m.id, name: m.name, price: m.price, created_at: m.created_at.with_timezone(&Utc) }
    }
}

impl From<&Product> for models::product::Model {
    fn from(p: &Product) -> Self {
        models::product::Model { id: p.id, name: p.name.clone(), price: p.price, created_at: p.created_at.into() }
    }
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, product: &Product) -> Result<(), ServiceError> {
        models::product::insert(&self.db, product.into()).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product, ServiceError> {
        models::product::find(&self.db, id)
            .await?
            .map(Product::from)
            .ok_or_else(|| ServiceError::not_found("product"))
    }

    async fn find_all(&self, page: Pagination, sort: SortDirection) -> Result<Vec<Product>, ServiceError> {
        let rows = models::product::list_by_created_at(&self.db, sort.into(), page.window()).await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: &Product) -> Result<(), ServiceError> {
        models::product::update_details(&self.db, product.id, &product.name, product.price)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if models::product::delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("product"))
        }
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockProductRepository {
        products: Mutex<Vec<Product>>, // insertion order breaks created_at ties
    }

    impl MockProductRepository {
        fn store(&self) -> Result<MutexGuard<'_, Vec<Product>>, ServiceError> {
            self.products.lock().map_err(|_| ServiceError::Db("mock store poisoned".into()))
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn create(&self, product: &Product) -> Result<(), ServiceError> {
            let mut products = self.store()?;
            if products.iter().any(|p| p.id == product.id) {
                return Err(ServiceError::Db(format!("duplicate product id {}", product.id)));
            }
            products.push(product.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Product, ServiceError> {
            let products = self.store()?;
            products.iter().find(|p| p.id == id).cloned().ok_or_else(|| ServiceError::not_found("product"))
        }

        async fn find_all(&self, page: Pagination, sort: SortDirection) -> Result<Vec<Product>, ServiceError> {
            let mut sorted = self.store()?.clone();
            sorted.sort_by_key(|p| p.created_at);
            if sort == SortDirection::Desc {
                sorted.reverse();
            }
            Ok(match page.window() {
                Some(w) => sorted
                    .into_iter()
                    .skip(usize::try_from(w.offset).unwrap_or(usize::MAX))
                    .take(usize::try_from(w.limit).unwrap_or(usize::MAX))
                    .collect(),
                None => sorted,
            })
        }

        async fn update(&self, product: &Product) -> Result<(), ServiceError> {
            let mut products = self.store()?;
            let slot = products.iter_mut().find(|p| p.id == product.id).ok_or_else(|| ServiceError::not_found("product"))?;
            slot.name = product.name.clone();
            slot.price = product.price;
            Ok(())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            let mut products = self.store()?;
            let before = products.len();
            products.retain(|p| p.id != id);
            if products.len() == before {
                return Err(ServiceError::not_found("product"));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockProductRepository;
    use super::*;
    use crate::test_support::{get_db, numbered_products};

    async fn seed(repo: &dyn ProductRepository, count: usize) -> Result<(), ServiceError> {
        // insert newest first so ordering comes from created_at, not insertion
        for p in numbered_products(count).iter().rev() {
            repo.create(p).await?;
        }
        Ok(())
    }

    async fn check_pagination(repo: &dyn ProductRepository) -> anyhow::Result<()> {
        seed(repo, 23).await?;

        let page1 = repo.find_all(Pagination::new(1, 10), SortDirection::Asc).await?;
        assert_eq!(page1.len(), 10);
        assert_eq!(page1[0].name, "Product 1");
        assert_eq!(page1[9].name, "Product 10");

        let page2 = repo.find_all(Pagination::new(2, 10), SortDirection::Asc).await?;
        assert_eq!(page2.len(), 10);
        assert_eq!(page2[0].name, "Product 11");
        assert_eq!(page2[9].name, "Product 20");

        let page3 = repo.find_all(Pagination::new(3, 10), SortDirection::Asc).await?;
        assert_eq!(page3.len(), 3);
        assert_eq!(page3[0].name, "Product 21");
        assert_eq!(page3[2].name, "Product 23");

        let desc = repo.find_all(Pagination::new(1, 2), SortDirection::Desc).await?;
        assert_eq!(desc[0].name, "Product 23");
        assert_eq!(desc[1].name, "Product 22");

        let all = repo.find_all(Pagination::new(0, 10), SortDirection::parse("bogus")).await?;
        assert_eq!(all.len(), 23);
        assert_eq!(all[0].name, "Product 1");
        Ok(())
    }

    async fn check_crud(repo: &dyn ProductRepository) -> anyhow::Result<()> {
        let mut product = Product::new("Product 1", 10.0)?;
        repo.create(&product).await?;

        let found = repo.find_by_id(product.id).await?;
        assert_eq!(found.name, "Product 1");
        assert_eq!(found.price, 10.0);

        product.update_details("Product 2", 20.0)?;
        repo.update(&product).await?;
        let found = repo.find_by_id(product.id).await?;
        assert_eq!(found.name, "Product 2");
        assert_eq!(found.price, 20.0);

        repo.delete(product.id).await?;
        assert!(matches!(repo.find_by_id(product.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(repo.delete(product.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(repo.update(&product).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_crud() -> anyhow::Result<()> {
        let repo = SeaOrmProductRepository { db: get_db().await? };
        check_crud(&repo).await
    }

    #[tokio::test]
    async fn seaorm_find_all_paginates_by_creation_time() -> anyhow::Result<()> {
        let repo = SeaOrmProductRepository { db: get_db().await? };
        check_pagination(&repo).await
    }

    #[tokio::test]
    async fn mock_crud() -> anyhow::Result<()> {
        check_crud(&MockProductRepository::default()).await
    }

    #[tokio::test]
    async fn mock_find_all_paginates_by_creation_time() -> anyhow::Result<()> {
        check_pagination(&MockProductRepository::default()).await
    }
}
