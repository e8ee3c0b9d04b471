//! News article database operations.

use sqlx::PgPool;

use kraftbox_core::{ArticleId, ArticleStatus};

use crate::db::RepositoryError;
use crate::models::{Article, ArticlePatch, NewArticle};

/// Repository for news articles.
pub struct ArticleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists every article regardless of status, newest first. Used by
    /// the admin panel.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list_all(&self) -> Result<Vec<Article>, RepositoryError> {
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, excerpt, content, author, image_url, status,
                   published_at, created_at, updated_at
            FROM news_articles
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(articles)
    }

    /// Lists published articles for the public site, most recently
    /// published first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list_published(&self) -> Result<Vec<Article>, RepositoryError> {
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, excerpt, content, author, image_url, status,
                   published_at, created_at, updated_at
            FROM news_articles
            WHERE status = 'published'
            ORDER BY published_at DESC NULLS LAST
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(articles)
    }

    /// Inserts an article. Creating directly as published stamps
    /// `published_at` immediately.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn create(&self, new: &NewArticle) -> Result<Article, RepositoryError> {
        let status = new.status.unwrap_or(ArticleStatus::Draft);
        let article = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO news_articles (title, excerpt, content, author, image_url, status,
                                       published_at)
            VALUES ($1, $2, $3, $4, $5, $6,
                    CASE WHEN $6 = 'published' THEN NOW() ELSE NULL END)
            RETURNING id, title, excerpt, content, author, image_url, status,
                      published_at, created_at, updated_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.excerpt)
        .bind(&new.content)
        .bind(&new.author)
        .bind(&new.image_url)
        .bind(status)
        .fetch_one(self.pool)
        .await?;

        Ok(article)
    }

    /// Applies a partial update. The first transition to published stamps
    /// `published_at`; moving back to draft clears it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no article with that ID
    /// exists.
    pub async fn update(
        &self,
        id: ArticleId,
        patch: &ArticlePatch,
    ) -> Result<Article, RepositoryError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            UPDATE news_articles
            SET title = COALESCE($2, title),
                excerpt = COALESCE($3, excerpt),
                content = COALESCE($4, content),
                author = COALESCE($5, author),
                image_url = COALESCE($6, image_url),
                status = COALESCE($7, status),
                published_at = CASE
                    WHEN COALESCE($7, status) = 'published' THEN COALESCE(published_at, NOW())
                    ELSE NULL
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, excerpt, content, author, image_url, status,
                      published_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.excerpt)
        .bind(&patch.content)
        .bind(&patch.author)
        .bind(&patch.image_url)
        .bind(patch.status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(article)
    }

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no article with that ID
    /// exists.
    pub async fn delete(&self, id: ArticleId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Counts published articles.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn count_published(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM news_articles WHERE status = 'published'",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
