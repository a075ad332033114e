use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    extract::AppJson,
    products::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest},
    products::repo::Product,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
}

fn validate(name: &str, quantity: i64, price: f64) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("name must be non-empty"));
    }
    if quantity < 0 {
        return Err(ApiError::Validation("quantity must be a non-negative integer"));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::Validation("price must be a non-negative number"));
    }
    Ok(())
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = Product::list_by_owner(&state.db, user_id).await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    validate(&payload.name, payload.quantity, payload.price)?;

    let product =
        Product::create(&state.db, user_id, &payload.name, payload.quantity, payload.price)
            .await?;
    info!(user_id, product_id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product.into())))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = Product::get(&state.db, user_id, id)
        .await?
        .ok_or(ApiError::NotFound("product not found"))?;
    Ok(Json(product.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::Validation(
            "at least one of name, quantity or price is required",
        ));
    }

    // Ownership check and patch base in one scoped read.
    let current = Product::get(&state.db, user_id, id)
        .await?
        .ok_or(ApiError::NotFound("product not found"))?;

    let name = payload.name.unwrap_or(current.name);
    let quantity = payload.quantity.unwrap_or(current.quantity);
    let price = payload.price.unwrap_or(current.price);
    validate(&name, quantity, price)?;

    let updated = Product::update(&state.db, user_id, id, &name, quantity, price)
        .await?
        .ok_or(ApiError::NotFound("product not found"))?;
    info!(user_id, product_id = id, "product updated");
    Ok(Json(updated.into()))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !Product::delete(&state.db, user_id, id).await? {
        return Err(ApiError::NotFound("product not found"));
    }
    info!(user_id, product_id = id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
