mod health;
mod products;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use products::{parse_product_id, UPDATE_METHOD};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::list_products))
        .route("/product", post(products::create_product))
        .route(
            "/product/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product)
                .fallback(products::update_by_verb),
        )
}
