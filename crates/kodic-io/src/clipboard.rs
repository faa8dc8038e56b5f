use arboard::Clipboard;

/// Thin wrapper over the system clipboard. This tool only ever reads.
pub struct ClipboardReader {
    clipboard: Clipboard,
}

impl ClipboardReader {
    pub fn new() -> Result<Self, anyhow::Error> {
        Ok(Self {
            clipboard: Clipboard::new()?,
        })
    }

    /// Current text contents. Fails when the clipboard holds no text or the
    /// platform call does; the caller skips the cycle.
    pub fn read_text(&mut self) -> Result<String, anyhow::Error> {
        Ok(self.clipboard.get_text()?)
    }
}
