use crate::browsers::BrowserSession;
use crate::config::SnapshotConfig;
use crate::error::SessionError;
use fantoccini::error::CmdError;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;

/// Browser session backed by a WebDriver server (e.g. ChromeDriver)
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    /// Connects to the WebDriver server named in `config` and opens a new
    /// browser with the configured launch flags
    pub async fn launch(config: &SnapshotConfig) -> Result<Self, SessionError> {
        let capabilities = chrome_capabilities(&config.flags.args());

        let mut builder = ClientBuilder::native();
        builder.capabilities(capabilities);

        match builder.connect(&config.webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", config.webdriver_url);
                Ok(Self { client })
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    config.webdriver_url,
                    e
                );
                Err(SessionError::Launch(e.to_string()))
            }
        }
    }
}

/// Builds the capabilities object carrying Chrome launch arguments
fn chrome_capabilities(args: &[&str]) -> Capabilities {
    let mut capabilities = Capabilities::new();
    capabilities.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    capabilities
}

fn command_error(error: CmdError) -> SessionError {
    SessionError::Command(error.to_string())
}

impl BrowserSession for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        self.client.goto(url).await.map_err(command_error)
    }

    async fn wait_for_element(
        &mut self,
        selector: &str,
        timeout: Duration,
        poll: Duration,
    ) -> Result<(), SessionError> {
        let result = self
            .client
            .wait()
            .at_most(timeout)
            .every(poll)
            .for_element(Locator::Css(selector))
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(CmdError::WaitTimeout) => Err(SessionError::WaitTimeout {
                selector: selector.to_string(),
                waited: timeout,
            }),
            Err(e) => Err(command_error(e)),
        }
    }

    async fn content(&mut self) -> Result<String, SessionError> {
        self.client.source().await.map_err(command_error)
    }

    async fn close(self) -> Result<(), SessionError> {
        self.client.close().await.map_err(command_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrowserFlags;

    #[test]
    fn test_chrome_capabilities_carry_flags() {
        let flags = BrowserFlags {
            no_sandbox: true,
            headless: true,
            disable_gpu: false,
        };
        let capabilities = chrome_capabilities(&flags.args());
        assert_eq!(
            capabilities["goog:chromeOptions"],
            json!({ "args": ["--no-sandbox", "--headless"] })
        );
    }

    #[test]
    fn test_chrome_capabilities_without_flags() {
        let capabilities = chrome_capabilities(&[]);
        assert_eq!(capabilities["goog:chromeOptions"], json!({ "args": [] }));
    }
}
