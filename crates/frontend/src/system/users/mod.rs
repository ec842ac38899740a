pub mod api;
pub mod store;
pub mod ui;

pub use store::{use_users, UserStore};
pub use ui::UserList;
