//! # Gastos Frontend
//!
//! Client-side state and controller layer of the expense tracker.
//!
//! - [`controller::TrackerController`] owns every collection, form buffer and
//!   modal flag and runs each user operation against the REST API
//! - [`state`] holds the plain data plus the pure derived values
//! - [`services`] provides the API trait, the browser HTTP client, dialogs,
//!   logging and display formatting
//! - [`charts`] builds the budget chart data and owns the drawn chart
//! - [`hooks::use_tracker`] binds a controller to a yew component (wasm only)

pub mod charts;
pub mod config;
pub mod controller;
pub mod services;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod hooks;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::TrackerConfig;
pub use controller::{FollowUp, TrackerAction, TrackerController};
pub use state::TrackerView;

/// Read the page's configuration and install the console logger
///
/// A malformed configuration is logged and replaced by the defaults.
#[cfg(target_arch = "wasm32")]
pub fn bootstrap(config_element_id: &str) -> TrackerConfig {
    match TrackerConfig::from_document(config_element_id) {
        Ok(config) => {
            services::logging::init(config.log_level());
            log::info!("🚀 Expense tracker starting (API: {:?})", config.base_url);
            config
        }
        Err(e) => {
            services::logging::init(log::LevelFilter::Info);
            log::warn!("⚠️ {:#}; using default configuration", e);
            TrackerConfig::default()
        }
    }
}
