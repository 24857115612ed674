use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use uuid::Uuid;

use crate::{
    presentation::{self, ProductCard},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/productos/{id}", get(product_page))
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let products = catalog_service::featured_products(&state).await;
    let cards: Vec<ProductCard> = products.iter().map(ProductCard::from).collect();
    Html(presentation::render_listing(
        &state.store_name,
        state.backend_ready,
        &cards,
    ))
}

pub async fn product_page(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> (StatusCode, Html<String>) {
    let product = match Uuid::parse_str(&raw_id) {
        Ok(id) => catalog_service::product_detail(&state, id).await,
        Err(_) => None,
    };

    match product {
        Some(product) => (
            StatusCode::OK,
            Html(presentation::render_detail(&state.store_name, &product)),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Html(presentation::render_not_found(&state.store_name)),
        ),
    }
}
