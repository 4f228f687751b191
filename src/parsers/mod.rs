pub mod html;


pub use html::{anchor_hrefs, parse_set_links};
