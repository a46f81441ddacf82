pub mod api;
pub mod currency;
pub mod date_utils;
pub mod dialogs;

#[cfg(target_arch = "wasm32")]
pub mod http_client;
#[cfg(target_arch = "wasm32")]
pub mod logging;

pub use api::{ApiError, ApiResult, TrackerApi};
pub use dialogs::Notifier;

#[cfg(target_arch = "wasm32")]
pub use dialogs::BrowserDialogs;
#[cfg(target_arch = "wasm32")]
pub use http_client::ApiClient;
