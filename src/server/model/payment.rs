//! Payment and Stripe Connect onboarding models.

use chrono::{DateTime, Utc};
use entity::payment::PaymentStatus;
use serde::Serialize;

/// Outcome of a Stripe Connect onboarding attempt.
///
/// Onboarding is re-entrant: agents call the endpoint until their account
/// reaches `Verified`, receiving a fresh onboarding link while requirements
/// remain outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingState {
    /// The connected account can receive payouts; no link is needed.
    Verified,
    /// Stripe still requires information; the agent must revisit onboarding.
    RequirementsDue { onboarding_url: String },
    /// The account exists but Stripe has not finished processing it.
    Pending { onboarding_url: String },
}

/// Response payload for the onboarding endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_url: Option<String>,
}

impl OnboardingDto {
    pub fn from_state(state: OnboardingState) -> Self {
        match state {
            OnboardingState::Verified => Self {
                status: "verified".to_string(),
                onboarding_url: None,
            },
            OnboardingState::RequirementsDue { onboarding_url } => Self {
                status: "requirements_due".to_string(),
                onboarding_url: Some(onboarding_url),
            },
            OnboardingState::Pending { onboarding_url } => Self {
                status: "pending".to_string(),
                onboarding_url: Some(onboarding_url),
            },
        }
    }
}

/// Query parameters for payment listings.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListQuery {
    pub status: Option<PaymentStatus>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// A payment record as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub stripe_payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PaymentDto {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            amount: entity.amount,
            currency: entity.currency,
            status: entity.status,
            stripe_payment_intent_id: entity.stripe_payment_intent_id,
            created_at: entity.created_at,
        }
    }
}
