//! Blocking browser dialogs behind a trait so flows that need a confirmation
//! or an alert can be driven without a window.

/// Blocking user prompts.
pub trait Prompts {
    /// Asks a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
    /// Shows a message the user must dismiss.
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPrompts;

#[cfg(target_arch = "wasm32")]
impl Prompts for BrowserPrompts {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                tracing::warn!(?err, "alert dialog failed");
            }
        }
    }
}
