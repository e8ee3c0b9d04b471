//! Product category database operations.

use sqlx::PgPool;

use kraftbox_core::CategoryId;

use crate::db::{RepositoryError, is_unique_violation};
use crate::models::Category;

/// Repository for product categories.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists all categories, name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, created_at
            FROM product_categories
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Inserts a category.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the name is already taken.
    pub async fn create(&self, name: &str, description: &str) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO product_categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict(format!("category {name:?} already exists"))
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(category)
    }

    /// Applies a partial update to a category.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no category with that ID
    /// exists.
    pub async fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE product_categories
            SET name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(category)
    }

    /// Deletes a category. Products keep their category string; the
    /// public filter simply stops matching anything for it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no category with that ID
    /// exists.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product_categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
