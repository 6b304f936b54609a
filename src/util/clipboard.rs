//! System clipboard access via `navigator.clipboard`.

#![allow(clippy::unused_async)]

use crate::error::ClientError;

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns `ClientError::Clipboard` when the browser denies access or the
/// clipboard API is unavailable.
pub async fn write_text(text: &str) -> Result<(), ClientError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or_else(|| ClientError::Clipboard("no window".to_owned()))?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| ClientError::Clipboard(format!("{e:?}")))?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err(ClientError::Clipboard("clipboard is only available in the browser".to_owned()))
    }
}
