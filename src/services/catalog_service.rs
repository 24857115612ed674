use uuid::Uuid;

use crate::{
    dto::{
        categories::CategoryList,
        products::{NewProduct, ProductList, ProductPatch},
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Confirmation, Meta},
    state::AppState,
};

/// Number of products on the storefront landing page.
pub const FEATURED_LIMIT: u64 = 12;

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = state.catalog.list_products(None).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

/// Lookup failures are reported as 404, the same as a missing row.
pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let found = match state.catalog.get_product(id).await {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!(error = ?err, product_id = %id, "product lookup failed");
            None
        }
    };
    let result = found.ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", result, None))
}

pub async fn create_product(
    state: &AppState,
    payload: NewProduct,
) -> AppResult<ApiResponse<Product>> {
    payload.check()?;
    let product = state.catalog.create_product(payload).await?;
    tracing::info!(product_id = %product.id, slug = %product.slug, "product created");

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: ProductPatch,
) -> AppResult<ApiResponse<Product>> {
    payload.check()?;
    let product = state.catalog.update_product(id, payload).await?;
    tracing::info!(product_id = %product.id, "product updated");

    Ok(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    ))
}

/// Query failures are reported as 400 here, unlike the read paths.
pub async fn delete_product(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<Confirmation>> {
    match state.catalog.delete_product(id).await {
        Ok(()) => {}
        Err(AppError::OrmError(err)) => {
            tracing::warn!(error = %err, product_id = %id, "product delete failed");
            return Err(AppError::BadRequest("product could not be deleted".into()));
        }
        Err(err) => return Err(err),
    }
    tracing::info!(product_id = %id, "product deleted");

    Ok(ApiResponse::success(
        "Deleted",
        Confirmation {
            message: "Product deleted".into(),
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items = state.catalog.list_categories().await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(meta),
    ))
}

/// Newest products for the landing page.
///
/// Never fails: an unconfigured backend or a query error yields an empty list.
pub async fn featured_products(state: &AppState) -> Vec<Product> {
    if !state.backend_ready {
        tracing::warn!("catalog backend is not configured, rendering empty listing");
        return Vec::new();
    }

    match state.catalog.list_products(Some(FEATURED_LIMIT)).await {
        Ok(items) => items,
        Err(err) => {
            tracing::error!(error = ?err, "failed to fetch featured products");
            Vec::new()
        }
    }
}

/// Product for the detail page. Missing rows and query errors both yield `None`.
pub async fn product_detail(state: &AppState, id: Uuid) -> Option<Product> {
    if !state.backend_ready {
        return None;
    }

    match state.catalog.get_product(id).await {
        Ok(found) => found,
        Err(err) => {
            tracing::error!(error = ?err, product_id = %id, "failed to fetch product");
            None
        }
    }
}
