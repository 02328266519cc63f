//! Trip service catalog flows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::trip_service::TripServiceRepository,
    error::{auth::AuthError, AppError},
    model::{
        api::AckDto,
        trip_service::{
            CreateTripServiceDto, CreateTripServiceParam, TripServiceDto, TripServiceListQuery,
            UpdateTripServiceDto,
        },
    },
    query::{parse_date, parse_number, FilterBuilder, Paginated, Pagination},
};

/// Catalog operations over agent trip listings.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new trip service owned by the calling agent.
    ///
    /// # Arguments
    /// - `owner` - The authenticated agent
    /// - `dto` - Listing fields
    ///
    /// # Returns
    /// - `Ok(TripServiceDto)` - The created listing
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        owner: &entity::user::Model,
        dto: CreateTripServiceDto,
    ) -> Result<TripServiceDto, AppError> {
        let service = TripServiceRepository::new(self.db)
            .create(CreateTripServiceParam::from_dto(owner.id.clone(), dto))
            .await?;

        Ok(TripServiceDto::from_entity(service))
    }

    /// Gets one listing by id.
    ///
    /// # Arguments
    /// - `id` - Id of the listing
    ///
    /// # Returns
    /// - `Ok(TripServiceDto)` - The listing
    /// - `Err(AppError)` - No listing with that id
    pub async fn get_by_id(&self, id: &str) -> Result<TripServiceDto, AppError> {
        let service = TripServiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip service not found".to_string()))?;

        Ok(TripServiceDto::from_entity(service))
    }

    /// Gets the filtered, paginated catalog listing.
    ///
    /// # Arguments
    /// - `query` - Search term, type/status filters, ranges, and pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<TripServiceDto>)` - Page of listings with the total match count
    /// - `Err(AppError)` - Database error
    pub async fn get_all(
        &self,
        query: TripServiceListQuery,
    ) -> Result<Paginated<TripServiceDto>, AppError> {
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
                    entity::trip_service::Column::FromLocation,
                    entity::trip_service::Column::ToLocation,
                    entity::trip_service::Column::Description,
                ],
            )
            .contains(
                entity::trip_service::Column::FromLocation,
                query.from_location.as_deref(),
            )
            .contains(
                entity::trip_service::Column::ToLocation,
                query.to_location.as_deref(),
            )
            .equals(entity::trip_service::Column::ServiceType, query.service_type)
            .equals(entity::trip_service::Column::RouteType, query.route_type)
            .equals(entity::trip_service::Column::Status, query.status)
            .flag(
                entity::trip_service::Column::IsPopular,
                query.is_popular.as_deref(),
            )
            .numeric_range(
                entity::trip_service::Column::Price,
                parse_number(query.min_price.as_deref()),
                parse_number(query.max_price.as_deref()),
            )
            .date_range(
                entity::trip_service::Column::CreatedAt,
                parse_date(query.from_date.as_deref()),
                parse_date(query.to_date.as_deref()),
            )
            .build();

        let (services, total) = TripServiceRepository::new(self.db)
            .get_all_filtered(condition, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            services
                .into_iter()
                .map(TripServiceDto::from_entity)
                .collect(),
        ))
    }

    /// Gets the calling agent's own listings.
    ///
    /// # Arguments
    /// - `owner_id` - Id of the authenticated agent
    /// - `query` - Pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<TripServiceDto>)` - Page of the agent's listings
    /// - `Err(AppError)` - Database error
    pub async fn get_mine(
        &self,
        owner_id: &str,
        query: TripServiceListQuery,
    ) -> Result<Paginated<TripServiceDto>, AppError> {
        let pagination = Pagination::from_query(
            query.page.as_deref(),
            query.limit.as_deref(),
            query.sort_by,
            query.sort_order.as_deref(),
        );

        let (services, total) = TripServiceRepository::new(self.db)
            .get_by_owner(owner_id, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            services
                .into_iter()
                .map(TripServiceDto::from_entity)
                .collect(),
        ))
    }

    /// Updates a listing on behalf of its owner or an admin.
    ///
    /// The popularity flag is curated, so only admins may change it.
    ///
    /// # Arguments
    /// - `actor` - The authenticated user performing the update
    /// - `id` - Id of the listing
    /// - `dto` - Fields to change
    ///
    /// # Returns
    /// - `Ok(TripServiceDto)` - The refreshed listing
    /// - `Err(AppError)` - Missing listing or insufficient permissions
    pub async fn update(
        &self,
        actor: &entity::user::Model,
        id: &str,
        dto: UpdateTripServiceDto,
    ) -> Result<TripServiceDto, AppError> {
        let repo = TripServiceRepository::new(self.db);

        let service = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip service not found".to_string()))?;

        let is_admin = actor.role == entity::user::UserRole::Admin;
        if !is_admin && service.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id.clone(),
                format!("update trip service {}", id),
            )
            .into());
        }
        if !is_admin && dto.is_popular.is_some() {
            return Err(AuthError::AccessDenied(
                actor.id.clone(),
                "change the popular flag".to_string(),
            )
            .into());
        }

        let updated = repo
            .update(id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip service not found".to_string()))?;

        Ok(TripServiceDto::from_entity(updated))
    }

    /// Deletes a listing on behalf of its owner or an admin.
    ///
    /// # Arguments
    /// - `actor` - The authenticated user performing the delete
    /// - `id` - Id of the listing
    ///
    /// # Returns
    /// - `Ok(AckDto)` - Listing deleted
    /// - `Err(AppError)` - Missing listing or insufficient permissions
    pub async fn delete(
        &self,
        actor: &entity::user::Model,
        id: &str,
    ) -> Result<AckDto, AppError> {
        let repo = TripServiceRepository::new(self.db);

        let service = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip service not found".to_string()))?;

        if actor.role != entity::user::UserRole::Admin && service.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id.clone(),
                format!("delete trip service {}", id),
            )
            .into());
        }

        repo.delete(id).await?;
        Ok(AckDto::new("Trip service deleted"))
    }
}
