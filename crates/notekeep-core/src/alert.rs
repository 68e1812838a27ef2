//! User-facing alert port.

/// Blocking notification shown to the user, such as a dialog on a screen.
///
/// Screens report validation and network failures through this sink instead
/// of returning errors to their caller.
pub trait AlertSink: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}
