use patience_core::TableConfig;

#[derive(Debug, Clone, Copy)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub games: u32,
    pub record_steps: bool,
    pub table: TableConfig,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            games: 1,
            record_steps: false,
            table: TableConfig::default(),
        }
    }
}
