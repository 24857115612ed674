#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbErr, Schema};
use storefront_api::{
    dto::{
        categories::NewCategory,
        products::{NewProduct, ProductPatch},
    },
    entity::{Categories, Products},
    error::{AppError, AppResult},
    models::{Category, Product},
    repository::{CatalogRepository, OrmCatalog},
    state::AppState,
};
use uuid::Uuid;

/// Catalog over a private in-memory SQLite database with the schema created from the entities.
pub async fn memory_catalog() -> anyhow::Result<OrmCatalog> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single pinned connection keeps the in-memory database alive.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;

    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    conn.execute(backend.build(&schema.create_table_from_entity(Categories)))
        .await?;
    conn.execute(backend.build(&schema.create_table_from_entity(Products)))
        .await?;

    Ok(OrmCatalog::new(conn))
}

pub async fn memory_state() -> anyhow::Result<(AppState, OrmCatalog)> {
    let catalog = memory_catalog().await?;
    let state = AppState::new(Arc::new(catalog.clone()), true);
    Ok((state, catalog))
}

pub fn new_product(slug: &str) -> NewProduct {
    NewProduct {
        name: format!("Producto {slug}"),
        slug: slug.to_string(),
        description: Some("Madera de roble".to_string()),
        price: 1499,
        image_url: Some(format!("https://picsum.photos/seed/{slug}/800/600")),
        stock: 5,
        category_id: None,
    }
}

pub fn sample_product(name: &str, price: i64, stock: i32) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: None,
        price,
        image_url: None,
        stock,
        category_id: None,
        created_at: Utc::now(),
    }
}

/// Repository double that serves a fixed product list and records every call.
#[derive(Default)]
pub struct StubCatalog {
    pub products: Vec<Product>,
    pub fail: bool,
    /// Fail with a database error instead of an internal one.
    pub db_error: bool,
    pub calls: AtomicUsize,
    pub last_limit: Mutex<Option<Option<u64>>>,
}

impl StubCatalog {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn db_failing() -> Self {
        Self {
            fail: true,
            db_error: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail && self.db_error {
            return Err(AppError::OrmError(DbErr::Custom("connection reset".into())));
        }
        if self.fail {
            return Err(AppError::Internal(anyhow::anyhow!("backend unreachable")));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for StubCatalog {
    async fn list_products(&self, limit: Option<u64>) -> AppResult<Vec<Product>> {
        self.record()?;
        *self.last_limit.lock().unwrap() = Some(limit);
        let take = limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(self.products.iter().take(take).cloned().collect())
    }

    async fn get_product(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.record()?;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn create_product(&self, _input: NewProduct) -> AppResult<Product> {
        self.record()?;
        Err(AppError::BadRequest("read-only stub".into()))
    }

    async fn update_product(&self, _id: Uuid, _patch: ProductPatch) -> AppResult<Product> {
        self.record()?;
        Err(AppError::NotFound)
    }

    async fn delete_product(&self, _id: Uuid) -> AppResult<()> {
        self.record()?;
        Err(AppError::NotFound)
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.record()?;
        Ok(Vec::new())
    }

    async fn upsert_category(&self, _input: NewCategory) -> AppResult<Category> {
        self.record()?;
        Err(AppError::BadRequest("read-only stub".into()))
    }

    async fn upsert_product(&self, _input: NewProduct) -> AppResult<Product> {
        self.record()?;
        Err(AppError::BadRequest("read-only stub".into()))
    }
}
