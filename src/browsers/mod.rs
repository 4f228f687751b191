pub mod session;
pub mod webdriver;

pub use session::BrowserSession;
pub use webdriver::WebDriverSession;
