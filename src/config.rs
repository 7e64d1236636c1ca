//! Process configuration read from the environment
//!
//! - `VCS_COMMIT_DATE`: fixed timestamp recorded on every new commit
//! - `VCS_LOG`: `tracing` filter directive, `warn` when unset
//! - `NO_PAGER`: never route `log` output through the pager

use crate::areas::workspace::{Clock, FixedClock, SystemClock};

pub const COMMIT_DATE_VAR: &str = "VCS_COMMIT_DATE";
pub const LOG_FILTER_VAR: &str = "VCS_LOG";
pub const NO_PAGER_VAR: &str = "NO_PAGER";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub commit_date: Option<String>,
    pub log_filter: String,
    pub no_pager: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_date: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            no_pager: false,
        }
    }
}

impl Config {
    pub fn load_from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            commit_date: non_empty(COMMIT_DATE_VAR),
            log_filter: non_empty(LOG_FILTER_VAR)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            no_pager: lookup(NO_PAGER_VAR).is_some(),
        }
    }

    /// Clock used to stamp new commits
    pub fn clock(&self) -> Box<dyn Clock> {
        match &self.commit_date {
            Some(date) => Box::new(FixedClock::new(date.clone())),
            None => Box::new(SystemClock),
        }
    }
}
