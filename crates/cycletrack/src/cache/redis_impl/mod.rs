mod cache;
mod error;

pub use cache::RedisCache;
