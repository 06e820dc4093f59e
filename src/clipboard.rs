//! Clipboard access for the copy button.
//!
//! Failures never reach the UI: [`copy_to_clipboard`] logs them and
//! reports `false`.

use futures::future::LocalBoxFuture;
use log::{error, info};
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn navigator_clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard API is missing or threw synchronously.
    Unavailable(String),
    /// The write promise was rejected (permissions, focus, ...).
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(reason) => write!(f, "Clipboard unavailable: {}", reason),
            ClipboardError::Rejected(reason) => write!(f, "Clipboard write rejected: {}", reason),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Something that can put text on the system clipboard.
pub trait ClipboardWriter {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>>;
}

/// Browser clipboard via `navigator.clipboard.writeText`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl ClipboardWriter for NavigatorClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>> {
        Box::pin(async move {
            let promise = navigator_clipboard_write_text(text)
                .map_err(|e| ClipboardError::Unavailable(describe_js_error(&e)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(describe_js_error(&e)))
        })
    }
}

/// Write `text` to the clipboard, returning whether it succeeded.
/// Errors are logged and swallowed.
pub async fn copy_to_clipboard(writer: &impl ClipboardWriter, text: &str) -> bool {
    match writer.write_text(text).await {
        Ok(()) => {
            info!("Copied {} to clipboard", text);
            true
        }
        Err(e) => {
            error!("Failed to copy: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{PaymentAction, PaymentSession};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeClipboard {
        fail_with: Option<ClipboardError>,
        written: RefCell<Vec<String>>,
    }

    impl FakeClipboard {
        fn working() -> Self {
            Self { fail_with: None, written: RefCell::new(Vec::new()) }
        }

        fn failing(err: ClipboardError) -> Self {
            Self { fail_with: Some(err), written: RefCell::new(Vec::new()) }
        }
    }

    impl ClipboardWriter for FakeClipboard {
        fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>> {
            Box::pin(async move {
                if let Some(err) = &self.fail_with {
                    return Err(err.clone());
                }
                self.written.borrow_mut().push(text.to_string());
                Ok(())
            })
        }
    }

    // Mirrors what the payment page does with the copy result.
    fn copy_into(session: &mut PaymentSession, writer: &FakeClipboard) {
        if block_on(copy_to_clipboard(writer, "merchant@paytm")) {
            session.apply(PaymentAction::CopySucceeded);
        }
    }

    #[test]
    fn test_successful_copy_shows_feedback() {
        let clipboard = FakeClipboard::working();
        let mut session = PaymentSession::default();
        copy_into(&mut session, &clipboard);

        assert_eq!(*clipboard.written.borrow(), vec!["merchant@paytm".to_string()]);
        assert!(session.copy_feedback_active());

        session.apply(PaymentAction::CopyFeedbackExpired(session.copy_generation()));
        assert!(!session.copy_feedback_active());
    }

    #[test]
    fn test_failed_copy_is_swallowed() {
        for err in [
            ClipboardError::Unavailable("navigator.clipboard is undefined".into()),
            ClipboardError::Rejected("NotAllowedError".into()),
        ] {
            let clipboard = FakeClipboard::failing(err);
            let mut session = PaymentSession::default();
            copy_into(&mut session, &clipboard);

            assert!(clipboard.written.borrow().is_empty());
            assert!(!session.copy_feedback_active());
            assert_eq!(session, PaymentSession::default());
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::Rejected("NotAllowedError".into()).to_string(),
            "Clipboard write rejected: NotAllowedError"
        );
        assert_eq!(
            ClipboardError::Unavailable("no window".into()).to_string(),
            "Clipboard unavailable: no window"
        );
    }
}
