//! FAQ and static page flows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{faq::FaqRepository, static_page::StaticPageRepository},
    error::AppError,
    model::{
        api::AckDto,
        content::{CreateFaqDto, FaqDto, StaticPageDto, UpdateFaqDto, UpsertStaticPageDto},
    },
};

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_faq(&self, dto: CreateFaqDto) -> Result<FaqDto, AppError> {
        let faq = FaqRepository::new(self.db).create(dto).await?;
        Ok(FaqDto::from_entity(faq))
    }

    pub async fn update_faq(&self, id: &str, dto: UpdateFaqDto) -> Result<FaqDto, AppError> {
        let updated = FaqRepository::new(self.db)
            .update(id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("FAQ entry not found".to_string()))?;

        Ok(FaqDto::from_entity(updated))
    }

    pub async fn delete_faq(&self, id: &str) -> Result<AckDto, AppError> {
        if !FaqRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("FAQ entry not found".to_string()));
        }

        Ok(AckDto::new("FAQ entry deleted"))
    }

    /// Gets every FAQ entry, oldest first.
    pub async fn get_faqs(&self) -> Result<Vec<FaqDto>, AppError> {
        let faqs = FaqRepository::new(self.db).get_all().await?;
        Ok(faqs.into_iter().map(FaqDto::from_entity).collect())
    }

    /// Gets one static page by kind.
    ///
    /// # Arguments
    /// - `kind` - Which page to read
    ///
    /// # Returns
    /// - `Ok(StaticPageDto)` - The page content
    /// - `Err(AppError)` - The page has never been published
    pub async fn get_page(
        &self,
        kind: entity::static_page::StaticPageKind,
    ) -> Result<StaticPageDto, AppError> {
        let page = StaticPageRepository::new(self.db)
            .find_by_kind(kind)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("This page has not been published yet".to_string())
            })?;

        Ok(StaticPageDto::from_entity(page))
    }

    /// Replaces a static page's content, creating it on first write.
    ///
    /// # Arguments
    /// - `kind` - Which page to write
    /// - `dto` - The full replacement content
    ///
    /// # Returns
    /// - `Ok(StaticPageDto)` - The stored page
    /// - `Err(AppError)` - Database error
    pub async fn upsert_page(
        &self,
        kind: entity::static_page::StaticPageKind,
        dto: UpsertStaticPageDto,
    ) -> Result<StaticPageDto, AppError> {
        let page = StaticPageRepository::new(self.db)
            .upsert(kind, dto.content)
            .await?;

        Ok(StaticPageDto::from_entity(page))
    }
}
