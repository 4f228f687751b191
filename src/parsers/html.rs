use crate::filter::LinkFilter;
use crate::results::LinkRecord;
use scraper::{Html, Selector};

/// Collects the href of every anchor carrying one, in document order.
///
/// Parsing is tolerant: malformed markup is recovered the way browsers do
/// and never rejected.
pub fn anchor_hrefs(doc: &Html) -> Vec<&str> {
    let link_selector = Selector::parse("a[href]").unwrap();
    doc.select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .collect()
}

/// Parses markup and returns the absolute URL of every set link, keeping
/// document order and duplicates
pub fn parse_set_links(markup: &str, filter: &LinkFilter) -> Vec<LinkRecord> {
    let doc = Html::parse_document(markup);
    let hrefs = anchor_hrefs(&doc);

    let links = hrefs
        .iter()
        .filter_map(|href| filter.apply(href))
        .map(LinkRecord::new)
        .collect::<Vec<_>>();

    ::log::debug!(
        "HTML parser found {} anchors, {} set links",
        hrefs.len(),
        links.len()
    );
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).map(LinkRecord::as_str).collect::<Vec<_>>()
        );
    }

    links
}
