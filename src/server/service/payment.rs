//! Stripe Connect onboarding and payment history flows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{payment::PaymentRepository, user::UserRepository},
    error::AppError,
    model::payment::{OnboardingState, PaymentDto, PaymentListQuery},
    query::{FilterBuilder, Paginated, Pagination},
};

use super::stripe::StripeClient;

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    stripe: &'a StripeClient,
    app_url: &'a str,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, stripe: &'a StripeClient, app_url: &'a str) -> Self {
        Self {
            db,
            stripe,
            app_url,
        }
    }

    /// Advances an agent through Stripe Connect onboarding.
    ///
    /// The flow is re-entrant: a first call creates the Express account, and
    /// every call re-reads its verification state from Stripe. While
    /// requirements are outstanding a fresh single-use onboarding link is
    /// minted; once Stripe enables charges the account is marked connected
    /// and no link is returned.
    ///
    /// # Arguments
    /// - `user` - The authenticated agent
    ///
    /// # Returns
    /// - `Ok(OnboardingState)` - Where the agent stands in onboarding
    /// - `Err(AppError)` - Stripe or database failure
    pub async fn onboard(&self, user: &entity::user::Model) -> Result<OnboardingState, AppError> {
        let users = UserRepository::new(self.db);

        let account_id = match &user.stripe_account_id {
            Some(id) => id.clone(),
            None => {
                let account = self.stripe.create_express_account().await?;
                users
                    .set_stripe_account(&user.id, &account.id, false)
                    .await?;
                account.id
            }
        };

        let account = self.stripe.retrieve_account(&account_id).await?;

        if account.charges_enabled && account.details_submitted {
            if !user.is_stripe_connected {
                users.set_stripe_account(&user.id, &account_id, true).await?;
            }
            return Ok(OnboardingState::Verified);
        }

        let onboarding_url = self
            .stripe
            .create_account_link(
                &account_id,
                &format!("{}/agent/onboarding/refresh", self.app_url),
                &format!("{}/agent/onboarding/complete", self.app_url),
            )
            .await?;

        if account.requirements.currently_due.is_empty() {
            Ok(OnboardingState::Pending { onboarding_url })
        } else {
            Ok(OnboardingState::RequirementsDue { onboarding_url })
        }
    }

    /// Gets the caller's own settled payment history.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `query` - Pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<PaymentDto>)` - Page of the caller's payments
    /// - `Err(AppError)` - The caller has no payment records, or database error
    pub async fn my_transactions(
        &self,
        user_id: &str,
        query: PaymentListQuery,
    ) -> Result<Paginated<PaymentDto>, AppError> {
        let pagination = Pagination::from_query(
            query.page.as_deref(),
            query.limit.as_deref(),
            query.sort_by,
            query.sort_order.as_deref(),
        );

        let (payments, total) = PaymentRepository::new(self.db)
            .get_for_user(user_id, &pagination)
            .await?;

        if total == 0 {
            return Err(AppError::NotFound("No transactions found".to_string()));
        }

        Ok(Paginated::new(
            pagination.meta(total),
            payments.into_iter().map(PaymentDto::from_entity).collect(),
        ))
    }

    /// Gets the filtered, paginated payment listing for the admin dashboard.
    ///
    /// # Arguments
    /// - `query` - Status filter and pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<PaymentDto>)` - Page of payments with the total match count
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self, query: PaymentListQuery) -> Result<Paginated<PaymentDto>, AppError> {
        let pagination = Pagination::from_query(
            query.page.as_deref(),
            query.limit.as_deref(),
            query.sort_by,
            query.sort_order.as_deref(),
        );

        let condition = FilterBuilder::new()
            .equals(entity::payment::Column::Status, query.status)
            .build();

        let (payments, total) = PaymentRepository::new(self.db)
            .get_all_filtered(condition, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            payments.into_iter().map(PaymentDto::from_entity).collect(),
        ))
    }
}
