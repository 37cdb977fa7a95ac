//! Clipboard utilities for copying text to clipboard

use wasm_bindgen_futures::spawn_local;

/// Copy text to clipboard and report the outcome
///
/// `on_done` receives `true` when the browser accepted the text.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(false);
            return;
        };
        let clipboard = window.navigator().clipboard();
        let copied = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .is_ok();
        on_done(copied);
    });
}
