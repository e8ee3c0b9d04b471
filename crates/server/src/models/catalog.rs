//! Catalog models: products, product categories, and news articles.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kraftbox_core::{ArticleId, ArticleStatus, CategoryId, ProductId};

/// A corrugated-box product shown on the public products page.
///
/// `price` is a reference unit price in VND and serializes as a decimal
/// string on the wire.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    pub is_featured: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product. Only `name` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update for a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub is_featured: Option<bool>,
    pub image_url: Option<String>,
}

/// A product grouping used for filtering the public catalog.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A news or knowledge-base article.
///
/// `published_at` is stamped on the first transition to published and
/// cleared again when the article is pulled back to draft.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an article. Only `title` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticle {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
}

/// Partial update for an article. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<ArticleStatus>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let product: NewProduct = serde_json::from_str(r#"{"name": "Carton 3 lop"}"#).unwrap();

        assert_eq!(product.name, "Carton 3 lop");
        assert_eq!(product.category, "");
        assert_eq!(product.description, "");
        assert_eq!(product.price, Decimal::ZERO);
        assert!(!product.is_featured);
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_product_price_serializes_as_string() {
        let product = Product {
            id: ProductId::new(1),
            name: "Carton 5 lop".to_string(),
            category: "carton".to_string(),
            description: String::new(),
            price: Decimal::new(12_500, 0),
            is_featured: true,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "12500");
    }

    #[test]
    fn test_article_patch_accepts_partial_body() {
        let patch: ArticlePatch =
            serde_json::from_str(r#"{"status": "published"}"#).unwrap();

        assert_eq!(patch.status, Some(ArticleStatus::Published));
        assert!(patch.title.is_none());
        assert!(patch.content.is_none());
    }
}
