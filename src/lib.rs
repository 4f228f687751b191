//! Two-step scraper for the PSA price guide: render the sets page in a
//! browser and save its markup, then pull the set detail links out of the
//! saved file.

pub mod browsers;
pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod snapshot;
pub mod utils;

// Re-export commonly used types for convenience
pub use browsers::{BrowserSession, WebDriverSession};
pub use config::{ExtractConfig, SnapshotConfig};
pub use error::{CaptureError, ConfigError, ExtractError, SessionError};
pub use extractor::{extract, extract_with_config};
pub use filter::LinkFilter;
pub use results::{LinkRecord, RenderedPage};
pub use snapshot::{capture, capture_with_config, capture_with_session};
