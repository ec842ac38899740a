pub mod activity_logs;
pub mod auth;
pub mod notifications;
pub mod users;
