//! Admin product and category management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use kraftbox_core::{CategoryId, ProductId};

use crate::db::{CategoryRepository, ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{Category, NewProduct, Product, ProductPatch};
use crate::state::AppState;

/// List all products, newest first.
///
/// GET /api/admin/products
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;

    Ok(Json(products))
}

/// Create a product.
///
/// POST /api/admin/products
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(new): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    if new.name.trim().is_empty() {
        return Err(AppError::BadRequest("Product name is required".to_string()));
    }

    let product = ProductRepository::new(state.pool()).create(&new).await?;
    tracing::info!(product_id = %product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product in place.
///
/// PUT /api/admin/products/{id}
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::BadRequest("Product name is required".to_string()));
    }

    let product = ProductRepository::new(state.pool()).update(id, &patch).await?;

    Ok(Json(product))
}

/// Delete a product.
///
/// DELETE /api/admin/products/{id}
pub async fn remove(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool()).delete(id).await?;
    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(json!({ "success": true })))
}

/// Category create/update payload.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Partial category update.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// List categories, sorted by name.
///
/// GET /api/admin/categories
pub async fn list_categories(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;

    Ok(Json(categories))
}

/// Create a category.
///
/// POST /api/admin/categories
pub async fn create_category(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<Category>)> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Category name is required".to_string()));
    }

    let category = CategoryRepository::new(state.pool())
        .create(name, payload.description.trim())
        .await?;
    tracing::info!(category_id = %category.id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category in place.
///
/// PUT /api/admin/categories/{id}
pub async fn update_category(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(patch): Json<CategoryPatch>,
) -> Result<Json<Category>> {
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::BadRequest("Category name is required".to_string()));
    }

    let category = CategoryRepository::new(state.pool())
        .update(
            id,
            patch.name.as_deref().map(str::trim),
            patch.description.as_deref().map(str::trim),
        )
        .await?;

    Ok(Json(category))
}

/// Delete a category.
///
/// DELETE /api/admin/categories/{id}
///
/// Products keep their category string; the public filter simply stops
/// matching it.
pub async fn remove_category(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Value>> {
    CategoryRepository::new(state.pool()).delete(id).await?;
    tracing::info!(category_id = %id, "Category deleted");

    Ok(Json(json!({ "success": true })))
}
