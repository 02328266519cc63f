pub use super::blog::Entity as Blog;
pub use super::channel::Entity as Channel;
pub use super::faq::Entity as Faq;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::static_page::Entity as StaticPage;
pub use super::support_ticket::Entity as SupportTicket;
pub use super::trip_service::Entity as TripService;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
