use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::{AppError, Envelope, ResponseError, Result},
    models::{Page, PageQuery, Product, ProductRequest},
};

/// Non-standard verb accepted as an alias of `PUT` on `/product/{id}`.
pub const UPDATE_METHOD: &str = "UPDATE";

const PRODUCT_ALLOWED_METHODS: &str = "GET, PUT, DELETE, UPDATE";

pub fn parse_product_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(AppError::invalid_product_id)
}

pub async fn list_products(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let page = match query {
        Ok(Query(params)) => Page::from(params),
        Err(_) => Page::from(PageQuery::default()),
    };

    let products = state.products.find_page(page).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = parse_product_id(&id)?;

    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::product_not_found)?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>)> {
    let payload = ProductRequest::from_body(&body)?;

    let product = state.products.create(&payload).await?;
    tracing::info!("Created product {}", product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>> {
    let id = parse_product_id(&id)?;
    let payload = ProductRequest::from_body(&body)?;

    let product = state
        .products
        .update(id, &payload)
        .await?
        .ok_or_else(AppError::product_not_found)?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_product_id(&id)?;

    if state.products.find_by_id(id).await?.is_none() {
        return Err(AppError::product_not_found());
    }

    state.products.delete(id).await?;
    tracing::info!("Deleted product {}", id);

    Ok(Json(json!({ "result": "success" })))
}

/// Catches every verb `/product/{id}` has no route for. Only `UPDATE` is
/// served; the rest get 405.
pub async fn update_by_verb(
    method: Method,
    state: State<AppState>,
    id: Path<String>,
    body: Bytes,
) -> Response {
    if method.as_str() != UPDATE_METHOD {
        let err = ResponseError::new("Method not allowed", StatusCode::METHOD_NOT_ALLOWED);
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, PRODUCT_ALLOWED_METHODS)],
            Json(Envelope::failure(err)),
        )
            .into_response();
    }

    update_product(state, id, body).await.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_product_id("1").unwrap(), 1);
        assert_eq!(parse_product_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "abc", "1.5", "0", "-3", "99999999999", "1a"] {
            let err = parse_product_id(raw).unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest(ref msg) if msg == "Invalid product ID"),
                "{raw:?} should be rejected"
            );
        }
    }
}
