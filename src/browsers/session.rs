use crate::error::SessionError;
use std::future::Future;
use std::time::Duration;

/// Minimal surface of a controlled browser used to capture a page.
///
/// A session is acquired per capture and released with [`BrowserSession::close`];
/// sessions are never shared or pooled between URLs. All returned futures are
/// `Send` so a capture can run inside `tokio::spawn`.
pub trait BrowserSession: Send {
    /// Navigate the current window to `url`
    fn navigate(&mut self, url: &str) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Poll every `poll` until an element matching the CSS `selector` exists,
    /// failing with [`SessionError::WaitTimeout`] after `timeout`
    fn wait_for_element(
        &mut self,
        selector: &str,
        timeout: Duration,
        poll: Duration,
    ) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Serialized markup of the current document
    fn content(&mut self) -> impl Future<Output = Result<String, SessionError>> + Send;

    /// End the session and shut the browser down
    fn close(self) -> impl Future<Output = Result<(), SessionError>> + Send;
}
