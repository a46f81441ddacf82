//! User-facing notifications and confirmations.
//!
//! The controller never talks to `window.alert` directly; it goes through
//! [`Notifier`] so the blocking dialogs can be swapped out.

/// Blocking notification surface used by the controller
pub trait Notifier {
    fn success(&self, message: &str);

    fn error(&self, message: &str);

    /// Ask the user to confirm a destructive action; `false` cancels it
    fn confirm(&self, message: &str) -> bool;
}

/// `alert`/`confirm` dialogs of the hosting page
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserDialogs;

#[cfg(target_arch = "wasm32")]
impl Notifier for BrowserDialogs {
    fn success(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn error(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}
