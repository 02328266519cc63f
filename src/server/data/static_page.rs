//! Static page data repository for database operations.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

/// Repository providing database operations for static content pages.
///
/// One row exists per page kind; writes are upserts keyed on the kind's
/// unique index.
pub struct StaticPageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaticPageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces a page's content, creating the row on first write.
    ///
    /// # Arguments
    /// - `kind` - Which page to write
    /// - `content` - The full replacement content
    ///
    /// # Returns
    /// - `Ok(Model)` - The row after the write
    /// - `Err(DbErr)` - Database error during upsert or fetch
    pub async fn upsert(
        &self,
        kind: entity::static_page::StaticPageKind,
        content: String,
    ) -> Result<entity::static_page::Model, DbErr> {
        let now = Utc::now();

        entity::prelude::StaticPage::insert(entity::static_page::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            kind: ActiveValue::Set(kind.clone()),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::static_page::Column::Kind)
                .update_columns([
                    entity::static_page::Column::Content,
                    entity::static_page::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_kind(kind.clone()).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Static page {:?} after upsert", kind))
        })
    }

    /// Finds a page by its kind.
    ///
    /// # Arguments
    /// - `kind` - Which page to read
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Page found
    /// - `Ok(None)` - Page has never been written
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_kind(
        &self,
        kind: entity::static_page::StaticPageKind,
    ) -> Result<Option<entity::static_page::Model>, DbErr> {
        entity::prelude::StaticPage::find()
            .filter(entity::static_page::Column::Kind.eq(kind))
            .one(self.db)
            .await
    }
}
