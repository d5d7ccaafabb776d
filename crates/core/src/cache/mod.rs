mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{cycle_key, session_key, user_cycles_key};
pub use serialization::{
    deserialize_cycles, serialize_cycles, SerializationError, CACHE_SCHEMA_VERSION,
};
pub use traits::Cache;
