pub mod cycles;
mod error;
pub mod health;

pub use error::ApiError;
