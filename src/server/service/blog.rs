//! Blog publishing flows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::blog::BlogRepository,
    error::AppError,
    model::{
        api::AckDto,
        blog::{BlogDto, BlogListQuery, CreateBlogDto, UpdateBlogDto},
    },
    query::{parse_date, FilterBuilder, Paginated, Pagination},
};

pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateBlogDto) -> Result<BlogDto, AppError> {
        let blog = BlogRepository::new(self.db).create(dto).await?;
        Ok(BlogDto::from_entity(blog))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<BlogDto, AppError> {
        let blog = BlogRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        Ok(BlogDto::from_entity(blog))
    }

    /// Gets the filtered, paginated blog listing.
    pub async fn get_all(&self, query: BlogListQuery) -> Result<Paginated<BlogDto>, AppError> {
        let pagination = Pagination::from_query(
            query.page.as_deref(),
            query.limit.as_deref(),
            query.sort_by,
            query.sort_order.as_deref(),
        );

        let condition = FilterBuilder::new()
            .search(
                query.search_term.as_deref(),
                &[
                    entity::blog::Column::Title,
                    entity::blog::Column::Content,
                ],
            )
            .contains(entity::blog::Column::Category, query.category.as_deref())
            .date_range(
                entity::blog::Column::CreatedAt,
                parse_date(query.from_date.as_deref()),
                parse_date(query.to_date.as_deref()),
            )
            .build();

        let (blogs, total) = BlogRepository::new(self.db)
            .get_all_filtered(condition, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            blogs.into_iter().map(BlogDto::from_entity).collect(),
        ))
    }

    pub async fn update(&self, id: &str, dto: UpdateBlogDto) -> Result<BlogDto, AppError> {
        let updated = BlogRepository::new(self.db)
            .update(id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        Ok(BlogDto::from_entity(updated))
    }

    pub async fn delete(&self, id: &str) -> Result<AckDto, AppError> {
        if !BlogRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Blog post not found".to_string()));
        }

        Ok(AckDto::new("Blog post deleted"))
    }
}
