mod types;
mod validation;

pub use types::{Cycle, CycleDraft};
pub use validation::{validate_draft, ValidationError};
