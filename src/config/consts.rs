// src/config/consts.rs

// Snapshot
pub const VERSION_TAG: &str = "v0.1.1";
pub const PROJECT_DIR: &str = ".iampolicyhelper";
pub const RAW_DATA_FILE: &str = "rawData.json";
pub const VERSION_FILE: &str = "version.txt";

// Logging
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "iam_policy_helper=info";

// Env overrides
pub const DIR_ENV: &str = "IAM_POLICY_HELPER_DIR";
pub const LOG_ENV: &str = "RUST_LOG";
