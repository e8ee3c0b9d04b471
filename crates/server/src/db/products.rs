//! Product database operations.

use sqlx::PgPool;

use kraftbox_core::ProductId;

use crate::db::RepositoryError;
use crate::models::{NewProduct, Product, ProductPatch};

/// Repository for catalog products.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists every product, newest first. Used by the admin panel.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, description, price, is_featured, image_url,
                   created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Lists products for the public catalog, name ascending, optionally
    /// filtered to one category.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list_public(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, description, price, is_featured, image_url,
                   created_at, updated_at
            FROM products
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY name ASC
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Inserts a product.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, category, description, price, is_featured, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, category, description, price, is_featured, image_url,
                      created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(&new.description)
        .bind(new.price)
        .bind(new.is_featured)
        .bind(&new.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Applies a partial update; absent fields keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no product with that ID
    /// exists.
    pub async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                is_featured = COALESCE($6, is_featured),
                image_url = COALESCE($7, image_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, category, description, price, is_featured, image_url,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.category)
        .bind(&patch.description)
        .bind(patch.price)
        .bind(patch.is_featured)
        .bind(&patch.image_url)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no product with that ID
    /// exists.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Counts all products.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn count_all(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
