use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::registry::{AccountCode, ChartOfAccounts, CoaLayout};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const DEFAULT_EPSILON: f64 = 0.01;

/// Engine configuration: chart profile, monitor cadence, comparison
/// tolerance, and the per-code negative-balance override list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub layout: CoaLayout,
    #[serde(default = "EngineConfig::default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "EngineConfig::default_epsilon")]
    pub epsilon: f64,
    /// Accounts conventionally allowed to carry a negative balance despite
    /// their type's sign rule (treasury-share style equity positions).
    #[serde(default = "EngineConfig::default_negative_overrides")]
    pub negative_balance_overrides: Vec<AccountCode>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: CoaLayout::default(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            epsilon: DEFAULT_EPSILON,
            negative_balance_overrides: Self::default_negative_overrides(),
        }
    }
}

impl EngineConfig {
    fn default_poll_interval_secs() -> u64 {
        DEFAULT_POLL_INTERVAL_SECS
    }

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn default_negative_overrides() -> Vec<AccountCode> {
        match AccountCode::new("3400") {
            Ok(code) => vec![code],
            Err(_) => Vec::new(),
        }
    }

    pub fn from_json_str(data: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn chart(&self) -> ChartOfAccounts {
        ChartOfAccounts::for_layout(self.layout)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn allows_negative(&self, code: &AccountCode) -> bool {
        self.negative_balance_overrides.contains(code)
    }
}
