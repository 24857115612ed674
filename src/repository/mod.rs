use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    dto::{
        categories::NewCategory,
        products::{NewProduct, ProductPatch},
    },
    error::AppResult,
    models::{Category, Product},
};

pub mod orm;

pub use orm::OrmCatalog;

/// Queries against the `products` and `categories` tables.
///
/// Handlers only see this trait, so tests can swap in an in-memory double.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Newest first. `limit` caps the number of rows returned.
    async fn list_products(&self, limit: Option<u64>) -> AppResult<Vec<Product>>;

    async fn get_product(&self, id: Uuid) -> AppResult<Option<Product>>;

    async fn create_product(&self, input: NewProduct) -> AppResult<Product>;

    /// Fails with `NotFound` when no row has `id`.
    async fn update_product(&self, id: Uuid, patch: ProductPatch) -> AppResult<Product>;

    /// Fails with `NotFound` when no row has `id`.
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;

    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Insert keyed by slug. An existing row is kept as is and returned.
    async fn upsert_category(&self, input: NewCategory) -> AppResult<Category>;

    /// Insert keyed by slug. An existing row is kept as is and returned.
    async fn upsert_product(&self, input: NewProduct) -> AppResult<Product>;
}
