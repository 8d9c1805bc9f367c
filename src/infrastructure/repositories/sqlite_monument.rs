use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::monument::{
    Monument, MonumentId, MonumentName, MonumentReadRepository, MonumentSlug, MonumentUpdate,
    MonumentWriteRepository, NewMonument,
};
use crate::domain::slug::SlugLang;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const MONUMENT_COLUMNS: &str =
    "id, name_en, name_ar, description, slug_en, slug_ar, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteMonumentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMonumentWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteMonumentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMonumentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MonumentRow {
    id: i64,
    name_en: String,
    name_ar: Option<String>,
    description: Option<String>,
    slug_en: Option<String>,
    slug_ar: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MonumentRow> for Monument {
    type Error = DomainError;

    fn try_from(row: MonumentRow) -> Result<Self, Self::Error> {
        Ok(Monument {
            id: MonumentId::new(row.id)?,
            name_en: MonumentName::new(row.name_en)?,
            name_ar: row.name_ar.map(MonumentName::new).transpose()?,
            description: row.description,
            slug_en: row.slug_en.map(MonumentSlug::new).transpose()?,
            slug_ar: row.slug_ar.map(MonumentSlug::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl MonumentWriteRepository for SqliteMonumentWriteRepository {
    async fn insert(&self, monument: NewMonument) -> DomainResult<Monument> {
        let NewMonument {
            name_en,
            name_ar,
            description,
            slug_en,
            slug_ar,
            created_at,
            updated_at,
        } = monument;

        let sql = format!(
            "INSERT INTO monuments (name_en, name_ar, description, slug_en, slug_ar, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {MONUMENT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, MonumentRow>(&sql)
            .bind(name_en.into_inner())
            .bind(name_ar.map(MonumentName::into_inner))
            .bind(description)
            .bind(slug_en.map(String::from))
            .bind(slug_ar.map(String::from))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Monument::try_from(row)
    }

    async fn update(&self, update: MonumentUpdate) -> DomainResult<Monument> {
        let MonumentUpdate {
            id,
            name_en,
            name_ar,
            description,
            slug_en,
            slug_ar,
            updated_at,
        } = update;

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE monuments SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name_en {
            builder.push(", name_en = ");
            builder.push_bind(name.into_inner());
        }

        if let Some(name) = name_ar {
            builder.push(", name_ar = ");
            builder.push_bind(name.map(MonumentName::into_inner));
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }

        for (lang, slug) in [(SlugLang::En, slug_en), (SlugLang::Ar, slug_ar)] {
            if let Some(slug) = slug {
                builder.push(format!(", {} = ", lang.column()));
                builder.push_bind(slug.map(String::from));
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {MONUMENT_COLUMNS}"));

        let row = builder
            .build_query_as::<MonumentRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("monument not found".into()))?;

        Monument::try_from(row)
    }

    async fn delete(&self, id: MonumentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM monuments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("monument not found".into()));
        }

        Ok(())
    }
}

#[async_trait]
impl MonumentReadRepository for SqliteMonumentReadRepository {
    async fn find_by_id(&self, id: MonumentId) -> DomainResult<Option<Monument>> {
        let sql = format!("SELECT {MONUMENT_COLUMNS} FROM monuments WHERE id = ?");
        let row = sqlx::query_as::<_, MonumentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Monument::try_from).transpose()
    }

    async fn find_slug_holder(
        &self,
        lang: SlugLang,
        slug: &str,
        exclude: Option<MonumentId>,
    ) -> DomainResult<Option<MonumentId>> {
        let sql = format!(
            "SELECT id FROM monuments WHERE {} = ? AND (? IS NULL OR id <> ?) LIMIT 1",
            lang.column()
        );
        let exclude = exclude.map(i64::from);

        let holder: Option<i64> = sqlx::query_scalar(&sql)
            .bind(slug)
            .bind(exclude)
            .bind(exclude)
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        holder.map(MonumentId::new).transpose()
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Monument>> {
        let sql = format!("SELECT {MONUMENT_COLUMNS} FROM monuments ORDER BY id LIMIT ?");
        let rows = sqlx::query_as::<_, MonumentRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Monument::try_from).collect()
    }
}
