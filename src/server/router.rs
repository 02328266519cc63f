use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{auth, blog, content, message, payment, support, trip_service, user, vehicle},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/verify-otp", post(auth::verify_otp))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        // Profile and admin user management
        .route(
            "/api/users/me",
            get(user::get_me).put(user::update_me).delete(user::deactivate_me),
        )
        .route(
            "/api/users/me/notification-settings",
            get(user::get_notification_settings).put(user::update_notification_settings),
        )
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user).delete(user::delete_user),
        )
        // Trip service catalog
        .route(
            "/api/trip-services",
            get(trip_service::get_trip_services).post(trip_service::create_trip_service),
        )
        .route("/api/trip-services/mine", get(trip_service::get_my_trip_services))
        .route(
            "/api/trip-services/{id}",
            get(trip_service::get_trip_service)
                .put(trip_service::update_trip_service)
                .delete(trip_service::delete_trip_service),
        )
        // Vehicle fleet
        .route(
            "/api/vehicles",
            get(vehicle::get_vehicles).post(vehicle::create_vehicle),
        )
        .route(
            "/api/vehicles/{id}",
            get(vehicle::get_vehicle)
                .put(vehicle::update_vehicle)
                .delete(vehicle::delete_vehicle),
        )
        // Blog
        .route("/api/blogs", get(blog::get_blogs).post(blog::create_blog))
        .route(
            "/api/blogs/{id}",
            get(blog::get_blog).put(blog::update_blog).delete(blog::delete_blog),
        )
        // Messaging
        .route("/api/messages", post(message::send_message))
        .route("/api/messages/{counterpart_id}", get(message::get_history))
        .route("/api/channels", get(message::get_channels))
        .route("/api/channels/{id}", get(message::get_channel))
        // Support and notifications
        .route(
            "/api/support",
            get(support::get_tickets).post(support::create_ticket),
        )
        .route("/api/support/{id}", get(support::get_ticket))
        .route("/api/support/{id}/close", put(support::close_ticket))
        .route("/api/notifications", get(support::get_notifications))
        .route(
            "/api/notifications/{id}/read",
            put(support::mark_notification_read),
        )
        // Payments and onboarding
        .route("/api/payments", get(payment::get_payments))
        .route("/api/payments/onboard", post(payment::onboard))
        .route("/api/payments/my-transactions", get(payment::get_my_transactions))
        // FAQ and static pages
        .route("/api/faqs", get(content::get_faqs).post(content::create_faq))
        .route(
            "/api/faqs/{id}",
            put(content::update_faq).delete(content::delete_faq),
        )
        .route(
            "/api/pages/{kind}",
            get(content::get_page).put(content::upsert_page),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
