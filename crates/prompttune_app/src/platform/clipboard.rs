use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Destination for variant text copied out of the UI.
pub trait ClipboardSink {
    fn copy(&self, text: &str);
}

/// OSC 52 escape sequence: hands the selection to the hosting terminal,
/// which also works over SSH where no display server is reachable.
pub struct Osc52Clipboard;

impl ClipboardSink for Osc52Clipboard {
    fn copy(&self, text: &str) {
        let encoded = STANDARD.encode(text.as_bytes());
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "\x1b]52;c;{encoded}\x07");
        let _ = stdout.flush();
    }
}
