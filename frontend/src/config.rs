//! # Tracker Configuration
//!
//! Runtime settings for the controller. Every field has a default, so an empty
//! JSON object (or no configuration at all) yields a working setup that talks
//! to the page's own origin.

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// API base URL; `None` means the page's own origin
    pub base_url: Option<String>,

    /// `limit` sent with the expense and income listings
    pub list_limit: u32,

    /// Rows shown while "show all" is off
    pub preview_rows: usize,

    /// Delay between opening the chart modal and drawing into its canvas
    pub chart_redraw_delay_ms: u32,

    pub chart_canvas_id: String,

    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            list_limit: 100,
            preview_rows: 10,
            chart_redraw_delay_ms: 100,
            chart_canvas_id: "categoryChart".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse a (possibly partial) JSON configuration object
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid tracker configuration")
    }

    /// Read the configuration embedded in a `<script type="application/json">` element
    ///
    /// A page without the element gets the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document(element_id: &str) -> anyhow::Result<Self> {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(element_id))
            .and_then(|element| element.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json)
                .with_context(|| format!("Reading configuration from #{}", element_id)),
            _ => Ok(Self::default()),
        }
    }

    pub fn chart_redraw_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.chart_redraw_delay_ms))
    }

    /// Console log level, falling back to `info` for unknown names
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
