use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::token::TokenService,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Authenticates the request and enforces role requirements.
    ///
    /// The bearer token only proves identity; the user row is re-read on
    /// every request so deactivated accounts and revoked roles take effect
    /// immediately. An empty `roles` slice admits any authenticated user.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the Authorization bearer token
    /// - `roles` - Roles permitted to perform the operation
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated, authorized user row
    /// - `Err(AppError)` - Missing/invalid token, inactive account, or wrong role
    pub async fn require(
        &self,
        headers: &HeaderMap,
        roles: &[entity::user::UserRole],
    ) -> Result<entity::user::Model, AppError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.verify_access(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(&claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if user.status != entity::user::UserStatus::Active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user.id.clone(),
                format!("requires one of {:?}, has {:?}", roles, user.role),
            )
            .into());
        }

        Ok(user)
    }
}
