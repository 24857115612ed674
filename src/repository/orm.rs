use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, sea_query::OnConflict,
};
use uuid::Uuid;

use crate::{
    dto::{
        categories::NewCategory,
        products::{NewProduct, ProductPatch},
    },
    entity::{
        Categories, Products,
        categories::{self, ActiveModel as CategoryActive},
        products::{self, ActiveModel as ProductActive},
    },
    error::{AppError, AppResult},
    models::{Category, Product},
};

use super::CatalogRepository;

/// SeaORM-backed catalog.
#[derive(Clone)]
pub struct OrmCatalog {
    conn: DatabaseConnection,
}

impl OrmCatalog {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    async fn product_by_slug(&self, slug: &str) -> AppResult<Option<Product>> {
        let found = Products::find()
            .filter(products::Column::Slug.eq(slug))
            .one(&self.conn)
            .await?;
        Ok(found.map(Product::from))
    }
}

fn product_active(input: NewProduct) -> ProductActive {
    ProductActive {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        slug: Set(input.slug),
        description: Set(input.description),
        price: Set(input.price),
        image_url: Set(input.image_url),
        stock: Set(input.stock),
        category_id: Set(input.category_id),
        created_at: Set(Utc::now().into()),
    }
}

#[async_trait]
impl CatalogRepository for OrmCatalog {
    async fn list_products(&self, limit: Option<u64>) -> AppResult<Vec<Product>> {
        let mut finder = Products::find().order_by_desc(products::Column::CreatedAt);
        if let Some(limit) = limit {
            finder = finder.limit(limit);
        }
        let items = finder
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Product::from)
            .collect();
        Ok(items)
    }

    async fn get_product(&self, id: Uuid) -> AppResult<Option<Product>> {
        let found = Products::find_by_id(id).one(&self.conn).await?;
        Ok(found.map(Product::from))
    }

    async fn create_product(&self, input: NewProduct) -> AppResult<Product> {
        let product = product_active(input)
            .insert(&self.conn)
            .await
            .map_err(AppError::from_write)?;
        Ok(product.into())
    }

    async fn update_product(&self, id: Uuid, patch: ProductPatch) -> AppResult<Product> {
        let existing = match Products::find_by_id(id).one(&self.conn).await? {
            Some(p) => p,
            None => return Err(AppError::NotFound),
        };

        let mut active: ProductActive = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(slug) = patch.slug {
            active.slug = Set(slug);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(price) = patch.price {
            active.price = Set(price);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(stock) = patch.stock {
            active.stock = Set(stock);
        }
        if let Some(category_id) = patch.category_id {
            active.category_id = Set(category_id);
        }

        let product = active
            .update(&self.conn)
            .await
            .map_err(AppError::from_write)?;
        Ok(product.into())
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        let result = Products::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let items = Categories::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Category::from)
            .collect();
        Ok(items)
    }

    async fn upsert_category(&self, input: NewCategory) -> AppResult<Category> {
        let slug = input.slug.clone();
        let active = CategoryActive {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            slug: Set(input.slug),
            created_at: Set(Utc::now().into()),
        };
        Categories::insert(active)
            .on_conflict(
                OnConflict::column(categories::Column::Slug)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .map_err(AppError::from_write)?;

        let stored = Categories::find()
            .filter(categories::Column::Slug.eq(slug.as_str()))
            .one(&self.conn)
            .await?;
        stored.map(Category::from).ok_or(AppError::NotFound)
    }

    async fn upsert_product(&self, input: NewProduct) -> AppResult<Product> {
        let slug = input.slug.clone();
        Products::insert(product_active(input))
            .on_conflict(
                OnConflict::column(products::Column::Slug)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .map_err(AppError::from_write)?;

        self.product_by_slug(&slug).await?.ok_or(AppError::NotFound)
    }
}
