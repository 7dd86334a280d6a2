//! System clipboard backed by `arboard`

use ramble_core::clipboard::Clipboard;

/// Clipboard handle opened lazily on first copy.
///
/// Failures are logged and swallowed: a copy that does not land is not
/// worth interrupting the user for.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(e) => {
                    tracing::warn!("Clipboard unavailable: {}", e);
                    return None;
                }
            }
        }
        self.inner.as_mut()
    }
}

impl Clipboard for SystemClipboard {
    fn copy_to_clipboard(&mut self, text: &str) {
        let Some(clipboard) = self.handle() else {
            return;
        };
        if let Err(e) = clipboard.set_text(text.to_owned()) {
            tracing::warn!("Failed to copy to clipboard: {}", e);
        }
    }
}
