mod conversions;
mod error;
mod schema;
mod store;

pub use store::SqliteStore;
