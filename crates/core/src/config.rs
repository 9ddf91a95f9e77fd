use serde::{Deserialize, Serialize};

/// Table-level tuning. The source this game descends from drove both counts
/// off one constant; they are independent knobs here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Cards exposed per draw action.
    pub draw_count: usize,
    /// How many times the waste may be recycled into the stock.
    pub max_redeals: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            draw_count: 3,
            max_redeals: 3,
        }
    }
}
