mod extractor;

pub use extractor::CurrentUser;
