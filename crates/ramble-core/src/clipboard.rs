//! Clipboard capability

/// Write-only access to the host clipboard
pub trait Clipboard {
    fn copy_to_clipboard(&mut self, text: &str);
}

/// Clipboard that keeps everything it was given, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    history: Vec<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_to_clipboard(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}
