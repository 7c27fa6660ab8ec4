//! Link actions: print, copy to clipboard, open in the browser.

use std::io::Write;

use tracing::info;

use crate::error::{ClientError, ClientResult};

/// Where a meeting link goes once it exists.
pub trait LinkSink {
    /// Puts `url` on the system clipboard.
    fn copy_to_clipboard(&self, url: &str) -> ClientResult<()>;

    /// Opens `url` with the OS default handler.
    fn open_url(&self, url: &str) -> ClientResult<()>;
}

/// The desktop's clipboard and default browser.
///
/// `arboard` and `open` pick the right mechanism for the running platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopSink;

impl LinkSink for DesktopSink {
    fn copy_to_clipboard(&self, url: &str) -> ClientResult<()> {
        info!(url = %url, "copying meeting URL to clipboard");

        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            ClientError::Output(format!("failed to access clipboard: {}", e))
        })?;

        clipboard.set_text(url).map_err(|e| {
            ClientError::Output(format!("failed to copy to clipboard: {}", e))
        })
    }

    fn open_url(&self, url: &str) -> ClientResult<()> {
        info!(url = %url, "opening meeting URL");
        open::that(url).map_err(|e| ClientError::Output(format!("failed to open URL: {}", e)))
    }
}

/// Prints the link, copies it, then opens it.
///
/// Stops at the first failure.
pub fn distribute(url: &str, sink: &dyn LinkSink, out: &mut dyn Write) -> ClientResult<()> {
    writeln!(out, "Meeting link: {}", url)?;
    out.flush()?;

    sink.copy_to_clipboard(url)?;
    sink.open_url(url)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::{Action, RecordingSink};
    use super::*;

    #[test]
    fn distribute_prints_then_copies_then_opens() {
        let sink = RecordingSink::default();
        let mut out = Vec::new();

        distribute("https://z.us/j/1", &sink, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Meeting link: https://z.us/j/1\n");
        assert_eq!(
            sink.actions(),
            vec![
                Action::Copy("https://z.us/j/1".into()),
                Action::Open("https://z.us/j/1".into()),
            ]
        );
    }

    #[test]
    fn clipboard_failure_stops_before_open() {
        let sink = RecordingSink::failing_copy();
        let mut out = Vec::new();

        let err = distribute("https://z.us/j/1", &sink, &mut out).unwrap_err();

        assert!(matches!(err, ClientError::Output(_)));
        assert!(sink.actions().is_empty());
    }
}
