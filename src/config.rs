//! Frontend Configuration
//!
//! Fixed settings for the client. The API base can be swapped at build time with
//! `TODO_API_BASE=... trunk build`.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com/posts";

/// Ids above this are not backed by the service; edits stay local
pub const LOCAL_ONLY_ABOVE: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    /// Number of fetched items kept on load
    pub list_limit: usize,
    pub local_only_above: u32,
    /// Must match the CSS transition on `.modal-content-area`
    pub modal_transition_ms: u32,
    pub toast_duration_ms: u32,
    pub log_level: LevelFilter,
    pub log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            list_limit: 10,
            local_only_above: LOCAL_ONLY_ABOVE,
            modal_transition_ms: 300,
            toast_duration_ms: 3000,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            log_capacity: 200,
        }
    }
}

impl Config {
    /// Defaults plus the build-time API override
    pub fn from_env() -> Self {
        Self::with_api_base(option_env!("TODO_API_BASE"))
    }

    fn with_api_base(api_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn is_local_only(&self, id: u32) -> bool {
        id > self.local_only_above
    }
}
