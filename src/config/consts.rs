// src/config/consts.rs

// Data files
pub const DATA_DIR: &str = "data";
pub const CHAMPIONS_FILE: &str = "champions.json";
pub const ELIMINATIONS_FILE: &str = "eliminations.json";

// Logging
pub const LOG_FILE: &str = "data/ucl_ledger.log";

// Statistics
pub const NO_DATA: &str = "No data available.";
