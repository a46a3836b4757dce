use std::sync::Arc;

use crate::catalog::Catalog;

/// Immutable per-process state shared with every handler. Selection state
/// is never stored here; it lives in each request's query string.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub public_base_url: String,
    pub platform_name: String,
    pub custom_css: Option<String>,
}
