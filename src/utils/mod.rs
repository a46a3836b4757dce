// URL handling utilities
pub mod query_string;
pub mod url_builder;

// Re-export all utilities for convenient access
pub use query_string::build_query_string;
pub use url_builder::absolute_url;
