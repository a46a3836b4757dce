use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::Plan;

/// View state for one render of the pricing page. The server keeps no
/// session; the whole state round-trips through the query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionState {
    pub plan: Plan,
    pub config_panel_visible: bool,
    pub gpu: String,
    pub memory: String,
    pub alias: String,
}

impl SelectionState {
    /// Initial state: first catalog plan selected, panel hidden, fields
    /// empty.
    pub fn new(catalog: &Catalog) -> Self {
        SelectionState {
            plan: catalog.plans()[0].clone(),
            config_panel_visible: false,
            gpu: String::new(),
            memory: String::new(),
            alias: String::new(),
        }
    }

    /// The single plan-change transition. Unknown names fall back to the
    /// first catalog plan; choosing any plan reveals the configuration
    /// panel and clears the dependent fields.
    pub fn select_plan(&mut self, catalog: &Catalog, name: &str) {
        self.plan = catalog.lookup_or_default(name).clone();
        self.config_panel_visible = true;
        self.gpu.clear();
        self.memory.clear();
        self.alias.clear();
    }

    pub fn set_gpu(&mut self, value: &str) {
        self.gpu = value.to_string();
    }

    pub fn set_memory(&mut self, value: &str) {
        self.memory = value.to_string();
    }

    pub fn set_alias(&mut self, text: &str) {
        self.alias = text.to_string();
    }

    /// True iff GPU, memory and alias are all filled in. Gates the final
    /// call-to-action.
    pub fn is_ready(&self) -> bool {
        !self.gpu.is_empty() && !self.memory.is_empty() && !self.alias.is_empty()
    }
}

/// Rebuild the selection state from request query parameters.
///
/// The configuration fields are only read when a `plan` parameter was
/// submitted: without a chosen plan there is no panel to have filled them
/// in, and a plan-card submission carries `plan` alone, which is what
/// resets the fields on re-selection.
pub fn parse_selection(catalog: &Catalog, query: &HashMap<String, String>) -> SelectionState {
    let mut state = SelectionState::new(catalog);
    if let Some(name) = query.get("plan") {
        state.select_plan(catalog, name.trim());
        if let Some(gpu) = query.get("gpu") {
            state.set_gpu(gpu);
        }
        if let Some(memory) = query.get("memory") {
            state.set_memory(memory);
        }
        if let Some(alias) = query.get("alias") {
            state.set_alias(alias);
        }
    }
    state
}

/// Inverse of `parse_selection` for building page links.
pub fn build_selection_query_pairs(state: &SelectionState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if !state.config_panel_visible {
        return pairs;
    }
    pairs.push(("plan".into(), state.plan.name.clone()));
    if !state.gpu.is_empty() {
        pairs.push(("gpu".into(), state.gpu.clone()));
    }
    if !state.memory.is_empty() {
        pairs.push(("memory".into(), state.memory.clone()));
    }
    if !state.alias.is_empty() {
        pairs.push(("alias".into(), state.alias.clone()));
    }
    pairs
}
