pub mod calendars;
pub mod error;
pub mod events;
pub mod health;
pub mod principal;

pub use error::ApiError;
pub use principal::Principal;
