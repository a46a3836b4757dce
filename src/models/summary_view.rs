use crate::models::SelectionState;

/// Display-ready projection of a `SelectionState` for the summary panel
/// and the final call-to-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub plan_name: String,
    pub plan_features: Vec<String>,
    pub gpu_label: String,
    pub memory_label: String,
    pub alias_label: String,
    pub ready: bool,
}

pub fn build_summary(state: &SelectionState) -> SummaryView {
    let gpu_label = if state.gpu.is_empty() {
        "Not selected".to_string()
    } else {
        state.gpu.clone()
    };
    let memory_label = if state.memory.is_empty() {
        "Not selected".to_string()
    } else {
        format!("{} GiB", state.memory)
    };
    let alias_label = if state.alias.is_empty() {
        "Not set".to_string()
    } else {
        state.alias.clone()
    };
    SummaryView {
        plan_name: state.plan.name.clone(),
        plan_features: state.plan.features.clone(),
        gpu_label,
        memory_label,
        alias_label,
        ready: state.is_ready(),
    }
}
