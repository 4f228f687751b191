use crate::browsers::{BrowserSession, WebDriverSession};
use crate::config::SnapshotConfig;
use crate::error::{CaptureError, SessionError};
use crate::results::RenderedPage;
use std::path::Path;

/// Renders `url` in a fresh browser session and writes the final markup to
/// `output_path`, waiting at most `max_wait_secs` for the sets table.
pub async fn capture(
    url: &str,
    output_path: impl AsRef<Path>,
    max_wait_secs: u64,
) -> Result<RenderedPage, CaptureError> {
    let config = SnapshotConfig::default().with_max_wait(max_wait_secs);
    capture_with_config(url, output_path, &config).await
}

/// Same as [`capture`] with every knob taken from `config`
pub async fn capture_with_config(
    url: &str,
    output_path: impl AsRef<Path>,
    config: &SnapshotConfig,
) -> Result<RenderedPage, CaptureError> {
    config.validate()?;

    let session = WebDriverSession::launch(config)
        .await
        .map_err(CaptureError::SessionUnavailable)?;

    capture_with_session(session, url, output_path.as_ref(), config).await
}

/// Drives an already acquired session through a capture.
///
/// The session is closed on every exit path; a failure to close is logged
/// and does not replace the capture result.
pub async fn capture_with_session<S: BrowserSession>(
    mut session: S,
    url: &str,
    output_path: &Path,
    config: &SnapshotConfig,
) -> Result<RenderedPage, CaptureError> {
    let result = render_and_persist(&mut session, url, output_path, config).await;

    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    }

    result
}

async fn render_and_persist<S: BrowserSession>(
    session: &mut S,
    url: &str,
    output_path: &Path,
    config: &SnapshotConfig,
) -> Result<RenderedPage, CaptureError> {
    config.validate()?;

    ::log::info!("Navigating to {}", url);
    session
        .navigate(url)
        .await
        .map_err(|source| CaptureError::NavigationFailed {
            url: url.to_string(),
            source,
        })?;

    session
        .wait_for_element(
            &config.marker_selector,
            config.max_wait(),
            config.poll_interval(),
        )
        .await
        .map_err(|e| match e {
            SessionError::WaitTimeout { selector, waited } => {
                CaptureError::ElementNotFound { selector, waited }
            }
            other => CaptureError::Session(other),
        })?;
    ::log::debug!("Marker {} present on {}", config.marker_selector, url);

    // Best effort only: dependent rendering may still be running after this
    let settle = config.settle_delay();
    if !settle.is_zero() {
        ::log::debug!("Waiting {:?} for the page to settle", settle);
        tokio::time::sleep(settle).await;
    }

    let markup = session.content().await.map_err(CaptureError::Session)?;
    let page = RenderedPage::new(url.to_string(), markup);
    ::log::debug!("Page source preview:\n{}", page.preview(config.preview_chars));

    tokio::fs::write(output_path, &page.markup)
        .await
        .map_err(|source| CaptureError::WriteFailed {
            path: output_path.to_path_buf(),
            source,
        })?;
    ::log::info!("HTML content persisted to {}", output_path.display());

    Ok(page)
}
