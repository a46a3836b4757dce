use serde::{Deserialize, Serialize};

/// A fixed pricing tier. `price` is a display string, not a number;
/// "Custom" is a valid value and must round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
}
