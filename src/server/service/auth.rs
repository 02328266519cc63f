//! Account registration, verification, and credential flows.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{CreateUserParam, UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        api::AckDto,
        auth::{
            AuthResponseDto, ChangePasswordDto, ForgotPasswordDto, LoginDto, RefreshDto,
            RegisterDto, ResetPasswordDto, TokenPairDto, VerifyOtpDto,
        },
        otp::OtpChallenge,
        user::UserDto,
    },
};

use super::{mail::Mailer, token::TokenService};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    mailer: &'a Mailer,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, mailer: &'a Mailer) -> Self {
        Self { db, tokens, mailer }
    }

    /// Registers a new account and emails a verification code.
    ///
    /// The account is created INACTIVE and stays unusable until the code is
    /// confirmed. An unverified account whose code has lapsed is replaced so
    /// the address can be claimed again.
    ///
    /// # Arguments
    /// - `dto` - Registration fields
    ///
    /// # Returns
    /// - `Ok(AckDto)` - Account created, code sent
    /// - `Err(AppError)` - Email taken, admin role requested, or downstream failure
    pub async fn register(&self, dto: RegisterDto) -> Result<AckDto, AppError> {
        let role = match dto.role {
            Some(entity::user::UserRole::Admin) => {
                return Err(AppError::BadRequest(
                    "Admin accounts cannot be self-registered".to_string(),
                ));
            }
            Some(role) => role,
            None => entity::user::UserRole::User,
        };

        let repo = UserRepository::new(self.db);
        let now = Utc::now();

        if let Some(existing) = repo.find_by_email(&dto.email).await? {
            if existing.is_email_verified {
                return Err(AppError::Conflict(
                    "An account with this email already exists".to_string(),
                ));
            }

            // An unverified signup with a live code keeps its claim on the
            // address; a lapsed one is discarded.
            match OtpChallenge::from_user(&existing) {
                Some(challenge) if !challenge.is_expired(now) => {
                    return Err(AppError::Conflict(
                        "An account with this email is pending verification".to_string(),
                    ));
                }
                _ => {
                    repo.delete(&existing.id).await?;
                }
            }
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)?;
        let otp = OtpChallenge::issue(now);

        let user = repo
            .create(CreateUserParam {
                full_name: dto.full_name,
                email: dto.email,
                password_hash,
                role,
                contact_number: dto.contact_number,
                country: dto.country,
                otp: otp.clone(),
            })
            .await?;

        self.mailer
            .send_verification_otp(&user.email, &user.full_name, &otp.code)
            .await?;

        Ok(AckDto::new("Verification code sent to your email"))
    }

    /// Confirms an emailed verification code and activates the account.
    ///
    /// # Arguments
    /// - `dto` - Email and submitted code
    ///
    /// # Returns
    /// - `Ok(AuthResponseDto)` - Account activated, tokens issued
    /// - `Err(AppError)` - Unknown email, missing/expired/wrong code
    pub async fn verify_otp(&self, dto: VerifyOtpDto) -> Result<AuthResponseDto, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::NotFound("No account with that email".to_string()))?;

        if user.is_email_verified {
            return Err(AppError::BadRequest(
                "This account is already verified".to_string(),
            ));
        }

        let challenge = OtpChallenge::from_user(&user).ok_or_else(|| {
            AppError::BadRequest("No code is pending for this account".to_string())
        })?;

        if challenge.is_expired(Utc::now()) {
            // A lapsed signup is discarded so the address can be claimed again.
            repo.delete(&user.id).await?;
            return Err(AppError::BadRequest(
                "The code has expired, please register again".to_string(),
            ));
        }

        if !challenge.matches(&dto.otp) {
            return Err(AppError::BadRequest("Invalid code".to_string()));
        }

        repo.activate(&user.id).await?;
        let user = repo
            .find_by_id(&user.id)
            .await?
            .ok_or_else(|| AppError::InternalError("User vanished during activation".to_string()))?;

        let pair = self.tokens.issue_pair(&user)?;
        Ok(AuthResponseDto {
            user: UserDto::from_entity(user),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    /// Authenticates credentials and issues a token pair.
    ///
    /// Unknown emails, wrong passwords, and role mismatches all produce the
    /// same error so the response reveals neither which addresses hold
    /// accounts nor what role they hold.
    ///
    /// # Arguments
    /// - `dto` - Email, password, and optional role context
    ///
    /// # Returns
    /// - `Ok(AuthResponseDto)` - Authenticated user with tokens
    /// - `Err(AppError)` - Bad credentials or inactive account
    pub async fn login(&self, dto: LoginDto) -> Result<AuthResponseDto, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or(AuthError::WrongCredentials)?;

        if !bcrypt::verify(&dto.password, &user.password)? {
            return Err(AuthError::WrongCredentials.into());
        }

        // Clients sign in through a role-specific surface; an account of a
        // different role fails exactly like bad credentials.
        if dto.role.is_some_and(|role| role != user.role) {
            return Err(AuthError::WrongCredentials.into());
        }

        if user.status != entity::user::UserStatus::Active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        // Losing the push token should never fail a login.
        if let Some(fcm_token) = dto.fcm_token {
            if let Err(error) = repo.set_fcm_token(&user.id, &fcm_token).await {
                tracing::warn!("Failed to store FCM token for {}: {}", user.id, error);
            }
        }

        let pair = self.tokens.issue_pair(&user)?;
        Ok(AuthResponseDto {
            user: UserDto::from_entity(user),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    /// Exchanges a refresh token for a fresh token pair.
    ///
    /// The user row is re-read so revoked or deactivated accounts cannot
    /// rotate tokens.
    ///
    /// # Arguments
    /// - `dto` - The refresh token
    ///
    /// # Returns
    /// - `Ok(TokenPairDto)` - Fresh pair
    /// - `Err(AppError)` - Invalid token or inactive account
    pub async fn refresh(&self, dto: RefreshDto) -> Result<TokenPairDto, AppError> {
        let claims = self.tokens.verify_refresh(&dto.refresh_token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

        if user.status != entity::user::UserStatus::Active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        Ok(self.tokens.issue_pair(&user)?)
    }

    /// Changes the caller's password after confirming the current one.
    ///
    /// # Arguments
    /// - `user` - The authenticated user row
    /// - `dto` - Current and replacement passwords
    ///
    /// # Returns
    /// - `Ok(AckDto)` - Password updated
    /// - `Err(AppError)` - Current password is wrong
    pub async fn change_password(
        &self,
        user: &entity::user::Model,
        dto: ChangePasswordDto,
    ) -> Result<AckDto, AppError> {
        if !bcrypt::verify(&dto.old_password, &user.password)? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&dto.new_password, bcrypt::DEFAULT_COST)?;
        UserRepository::new(self.db)
            .update_password(&user.id, &password_hash)
            .await?;

        Ok(AckDto::new("Password changed"))
    }

    /// Starts a password reset by emailing a fresh code.
    ///
    /// # Arguments
    /// - `dto` - The account email
    ///
    /// # Returns
    /// - `Ok(AckDto)` - Code sent
    /// - `Err(AppError)` - Unknown email or downstream failure
    pub async fn forgot_password(&self, dto: ForgotPasswordDto) -> Result<AckDto, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::NotFound("No account with that email".to_string()))?;

        let otp = OtpChallenge::issue(Utc::now());
        repo.set_otp(&user.id, &otp).await?;

        self.mailer
            .send_password_reset_otp(&user.email, &user.full_name, &otp.code)
            .await?;

        Ok(AckDto::new("Password reset code sent to your email"))
    }

    /// Completes a password reset with an emailed code.
    ///
    /// # Arguments
    /// - `dto` - Email, submitted code, and replacement password
    ///
    /// # Returns
    /// - `Ok(AckDto)` - Password replaced, code consumed
    /// - `Err(AppError)` - Unknown email or missing/expired/wrong code
    pub async fn reset_password(&self, dto: ResetPasswordDto) -> Result<AckDto, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::NotFound("No account with that email".to_string()))?;

        self.check_challenge(&user, &dto.otp)?;

        let password_hash = bcrypt::hash(&dto.new_password, bcrypt::DEFAULT_COST)?;
        // update_password also clears the pending code, consuming it.
        repo.update_password(&user.id, &password_hash).await?;

        Ok(AckDto::new("Password has been reset"))
    }

    fn check_challenge(&self, user: &entity::user::Model, submitted: &str) -> Result<(), AppError> {
        let challenge = OtpChallenge::from_user(user)
            .ok_or_else(|| AppError::BadRequest("No code is pending for this account".to_string()))?;

        if challenge.is_expired(Utc::now()) {
            return Err(AppError::BadRequest(
                "The code has expired, request a new one".to_string(),
            ));
        }

        if !challenge.matches(submitted) {
            return Err(AppError::BadRequest("Invalid code".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::user::UserRole;
    use test_utils::{builder::TestBuilder, factory::UserFactory};

    fn tokens() -> TokenService {
        TokenService::new("test-access-secret", "test-refresh-secret", 3600, 7200)
    }

    fn mailer() -> Mailer {
        Mailer::new("localhost", "mailer", "password", "Voyago <no-reply@example.com>").unwrap()
    }

    fn login_dto(email: &str, role: Option<UserRole>) -> LoginDto {
        LoginDto {
            email: email.to_string(),
            password: "hunter2".to_string(),
            role,
            fcm_token: None,
        }
    }

    /// Tests that the role context gates login like a credential.
    ///
    /// Expected: mismatched role fails as wrong credentials, matching or
    /// absent role succeeds
    #[tokio::test]
    async fn login_checks_role_context() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let hash = bcrypt::hash("hunter2", bcrypt::DEFAULT_COST).unwrap();
        let user = UserFactory::new(db)
            .password(hash)
            .role(UserRole::User)
            .build()
            .await
            .unwrap();

        let tokens = tokens();
        let mailer = mailer();
        let service = AuthService::new(db, &tokens, &mailer);

        let denied = service
            .login(login_dto(&user.email, Some(UserRole::Agent)))
            .await;
        assert!(matches!(
            denied,
            Err(AppError::AuthErr(AuthError::WrongCredentials))
        ));

        let matched = service
            .login(login_dto(&user.email, Some(UserRole::User)))
            .await
            .unwrap();
        assert_eq!(matched.user.id, user.id);

        let unscoped = service.login(login_dto(&user.email, None)).await;
        assert!(unscoped.is_ok());
    }
}
