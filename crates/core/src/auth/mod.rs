mod functions;
mod types;

pub use functions::{bearer_token, is_session_expired};
pub use types::SessionData;
