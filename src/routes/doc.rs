use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::{CategoryList, NewCategory},
        products::{NewProduct, ProductList, ProductPatch},
    },
    models::{Category, Product},
    response::{ApiResponse, Confirmation, Meta},
    routes::{categories, health, products},
};

#[derive(OpenApi)]
#[openapi(
    info(
        description = "Every JSON body is an envelope `{ message, data, meta }`. The payload, such as a product or an array of products, is in `data`."
    ),
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        categories::list_categories,
    ),
    components(
        schemas(
            Product,
            Category,
            NewProduct,
            ProductPatch,
            NewCategory,
            ProductList,
            CategoryList,
            Confirmation,
            health::HealthData,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CategoryList>,
            ApiResponse<Confirmation>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Categories", description = "Category endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
