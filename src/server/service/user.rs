//! Profile, notification preference, and admin user-management flows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        api::AckDto,
        user::{
            NotificationSettingsDto, UpdateProfileDto, UpdateProfileParam, UserDto, UserListQuery,
        },
    },
    query::{parse_date, FilterBuilder, Paginated, Pagination},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a partial update to the caller's profile.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `dto` - Fields to change
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The refreshed profile
    /// - `Err(AppError)` - User missing or database error
    pub async fn update_profile(
        &self,
        user_id: &str,
        dto: UpdateProfileDto,
    ) -> Result<UserDto, AppError> {
        let updated = UserRepository::new(self.db)
            .update_profile(UpdateProfileParam::from_dto(user_id.to_string(), dto))
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserDto::from_entity(updated))
    }

    /// Gets one user by id.
    ///
    /// # Arguments
    /// - `id` - Id of the user
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user
    /// - `Err(AppError)` - No user with that id
    pub async fn get_by_id(&self, id: &str) -> Result<UserDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserDto::from_entity(user))
    }

    /// Gets the filtered, paginated user listing for the admin dashboard.
    ///
    /// Without explicit role and status filters the listing shows the active
    /// customer base: ACTIVE accounts with the USER role. Passing either
    /// filter widens the view to agents, admins, or inactive accounts.
    ///
    /// # Arguments
    /// - `query` - Search term, role/status filters, and pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<UserDto>)` - Page of users with the total match count
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self, query: UserListQuery) -> Result<Paginated<UserDto>, AppError> {
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
                    entity::user::Column::FullName,
                    entity::user::Column::Email,
                    entity::user::Column::ContactNumber,
                ],
            )
            .equals(
                entity::user::Column::Role,
                query.role.or(Some(entity::user::UserRole::User)),
            )
            .equals(
                entity::user::Column::Status,
                query.status.or(Some(entity::user::UserStatus::Active)),
            )
            .equals(entity::user::Column::Country, query.country)
            .date_range(
                entity::user::Column::CreatedAt,
                parse_date(query.from_date.as_deref()),
                parse_date(query.to_date.as_deref()),
            )
            .build();

        let (users, total) = UserRepository::new(self.db)
            .get_all_filtered(condition, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            users.into_iter().map(UserDto::from_entity).collect(),
        ))
    }

    /// Deletes a user account on behalf of an administrator.
    ///
    /// Admins cannot delete their own account through this path; they have
    /// the same self-deactivation flow as everyone else.
    ///
    /// # Arguments
    /// - `actor_id` - Id of the admin performing the deletion
    /// - `id` - Id of the user to delete
    ///
    /// # Returns
    /// - `Ok(AckDto)` - Account deleted
    /// - `Err(AppError)` - Self-deletion attempt or no user with that id
    pub async fn delete(&self, actor_id: &str, id: &str) -> Result<AckDto, AppError> {
        if actor_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(AckDto::new("User deleted"))
    }

    /// Deactivates the caller's own account.
    ///
    /// The row is kept so existing conversations and payments stay intact;
    /// the account simply stops authenticating.
    ///
    /// # Returns
    /// - `Ok(AckDto)` - Account deactivated
    /// - `Err(AppError)` - Database error
    pub async fn deactivate(&self, user_id: &str) -> Result<AckDto, AppError> {
        UserRepository::new(self.db).deactivate(user_id).await?;

        Ok(AckDto::new("Account deactivated"))
    }

    /// Replaces the caller's notification preferences.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `dto` - The full preference set
    ///
    /// # Returns
    /// - `Ok(NotificationSettingsDto)` - The stored preferences
    /// - `Err(AppError)` - Database error
    pub async fn update_notification_settings(
        &self,
        user_id: &str,
        dto: NotificationSettingsDto,
    ) -> Result<NotificationSettingsDto, AppError> {
        UserRepository::new(self.db)
            .set_notification_settings(
                user_id,
                dto.support_notification,
                dto.payment_notification,
                dto.email_notification,
            )
            .await?;

        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::user::{UserRole, UserStatus};
    use test_utils::{builder::TestBuilder, factory::UserFactory};

    /// Tests the default scope of the admin user listing.
    ///
    /// Expected: with no filters supplied, only active USER accounts appear
    #[tokio::test]
    async fn listing_defaults_to_active_customers() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let customer = UserFactory::new(db).build().await.unwrap();
        UserFactory::new(db)
            .status(UserStatus::Inactive)
            .build()
            .await
            .unwrap();
        UserFactory::new(db)
            .role(UserRole::Admin)
            .build()
            .await
            .unwrap();

        let page = UserService::new(db)
            .get_all(UserListQuery::default())
            .await
            .unwrap();

        assert_eq!(page.meta.total, 1);
        assert_eq!(page.data[0].id, customer.id);
    }

    /// Tests that explicit filters widen the default listing scope.
    ///
    /// Expected: asking for agents returns them instead of customers
    #[tokio::test]
    async fn explicit_role_filter_overrides_the_default() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        UserFactory::new(db).build().await.unwrap();
        let agent = UserFactory::new(db)
            .role(UserRole::Agent)
            .build()
            .await
            .unwrap();

        let page = UserService::new(db)
            .get_all(UserListQuery {
                role: Some(UserRole::Agent),
                ..UserListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(page.meta.total, 1);
        assert_eq!(page.data[0].id, agent.id);
    }
}
