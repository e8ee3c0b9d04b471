//! Public catalog routes: products and categories.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::db::{CategoryRepository, ProductRepository};
use crate::error::Result;
use crate::models::{Category, Product};
use crate::state::AppState;

/// Query parameters for the public product list.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub category: Option<String>,
}

/// List products for the public catalog.
///
/// GET /api/products?category=
///
/// Sorted by name; an empty `category` parameter means no filter.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<Json<Vec<Product>>> {
    let category = params.category.as_deref().filter(|c| !c.is_empty());
    let products = ProductRepository::new(state.pool())
        .list_public(category)
        .await?;

    Ok(Json(products))
}

/// List product categories.
///
/// GET /api/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;

    Ok(Json(categories))
}
