use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::categories::CategoryList, error::AppResult, response::ApiResponse,
    services::catalog_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories by name, as an array in `data`", body = ApiResponse<CategoryList>),
        (status = 500, description = "Query failed")
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let response = catalog_service::list_categories(&state).await?;
    Ok(Json(response))
}
