//! Vehicle fleet flows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::{
        api::AckDto,
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto, VehicleListQuery},
    },
    query::{parse_number, FilterBuilder, Paginated, Pagination},
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateVehicleDto) -> Result<VehicleDto, AppError> {
        let vehicle = VehicleRepository::new(self.db).create(dto).await?;
        Ok(VehicleDto::from_entity(vehicle))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<VehicleDto, AppError> {
        let vehicle = VehicleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleDto::from_entity(vehicle))
    }

    /// Gets the filtered, paginated vehicle listing.
    pub async fn get_all(&self, query: VehicleListQuery) -> Result<Paginated<VehicleDto>, AppError> {
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
                    entity::vehicle::Column::Name,
                    entity::vehicle::Column::PlateNumber,
                ],
            )
            .flag(entity::vehicle::Column::IsActive, query.is_active.as_deref())
            .numeric_range(
                entity::vehicle::Column::SeatCount,
                parse_number(query.min_seats.as_deref()),
                parse_number(query.max_seats.as_deref()),
            )
            .numeric_range(
                entity::vehicle::Column::BasePrice,
                parse_number(query.min_price.as_deref()),
                parse_number(query.max_price.as_deref()),
            )
            .build();

        let (vehicles, total) = VehicleRepository::new(self.db)
            .get_all_filtered(condition, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            vehicles.into_iter().map(VehicleDto::from_entity).collect(),
        ))
    }

    pub async fn update(&self, id: &str, dto: UpdateVehicleDto) -> Result<VehicleDto, AppError> {
        let updated = VehicleRepository::new(self.db)
            .update(id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleDto::from_entity(updated))
    }

    pub async fn delete(&self, id: &str) -> Result<AckDto, AppError> {
        if !VehicleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(AckDto::new("Vehicle deleted"))
    }
}
