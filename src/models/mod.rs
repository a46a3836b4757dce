pub mod app_state;
pub mod plan;
pub mod selection_state;
pub mod summary_view;

pub use app_state::AppState;
pub use plan::Plan;
pub use selection_state::{build_selection_query_pairs, parse_selection, SelectionState};
pub use summary_view::{build_summary, SummaryView};
