use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Largest text handed to the system clipboard (1MB). A conversion output of
/// a few kilobytes is already unusually large.
const MAX_CLIPBOARD_SIZE: usize = 1024 * 1024;

/// Clipboard seam so tests never touch the system clipboard
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Nothing to copy: the output is empty");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Output too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }

    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

/// Copy a conversion output to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The text is empty (e.g. zero in unary)
/// - The text is larger than 1MB
/// - The system clipboard is unavailable (headless session, no display server)
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validate before opening the clipboard so input errors win over platform errors
    validate_clipboard_text(text)?;

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(text, &mut clipboard)
}
