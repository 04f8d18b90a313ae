pub mod admin;
pub mod error;
pub mod home;

pub use admin::reloaded_page;
pub use error::error_page;
pub use home::home_page;
