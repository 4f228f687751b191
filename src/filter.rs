use crate::config::ExtractConfig;
use crate::error::ExtractError;
use url::Url;

/// Decides which hrefs point at set pages and turns them into absolute URLs
#[derive(Debug, Clone)]
pub struct LinkFilter {
    base_origin: String,
    marker: String,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self::from_config(&ExtractConfig::default()).expect("Default base origin should be valid")
    }
}

impl LinkFilter {
    /// Create a filter; `base_origin` must be an absolute URL
    pub fn new(base_origin: &str, marker: &str) -> Result<Self, ExtractError> {
        Url::parse(base_origin).map_err(|source| ExtractError::InvalidOrigin {
            origin: base_origin.to_string(),
            source,
        })?;

        Ok(Self {
            base_origin: base_origin.to_string(),
            marker: marker.to_string(),
        })
    }

    pub fn from_config(config: &ExtractConfig) -> Result<Self, ExtractError> {
        Self::new(&config.base_origin, &config.link_marker)
    }

    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Whether the href contains the set page marker
    pub fn matches(&self, href: &str) -> bool {
        href.contains(&self.marker)
    }

    /// Prefix the href with the base origin
    pub fn absolutize(&self, href: &str) -> String {
        let origin = if href.starts_with('/') {
            self.base_origin.trim_end_matches('/')
        } else {
            self.base_origin.as_str()
        };
        format!("{}{}", origin, href)
    }

    /// Absolute URL for a matching href, `None` otherwise
    pub fn apply(&self, href: &str) -> Option<String> {
        if self.matches(href) {
            Some(self.absolutize(href))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = LinkFilter::default();
        assert_eq!(filter.base_origin(), "https://www.psacard.com");
        assert_eq!(filter.marker(), "poke-mon");

        assert!(filter.matches("/priceguide/non-sports-tcg-card-values/poke-mon-base-set/1"));
        assert!(!filter.matches("/other/2"));
    }

    #[test]
    fn test_absolutize() {
        let filter = LinkFilter::default();
        assert_eq!(
            filter.absolutize("/priceguide/non-sports-tcg-card-values/poke-mon-jungle/2"),
            "https://www.psacard.com/priceguide/non-sports-tcg-card-values/poke-mon-jungle/2"
        );
    }

    #[test]
    fn test_trailing_slash_on_origin() {
        let filter = LinkFilter::new("https://www.psacard.com/", "poke-mon").unwrap();
        assert_eq!(
            filter.absolutize("/poke-mon-fossil/3"),
            "https://www.psacard.com/poke-mon-fossil/3"
        );
        // Relative hrefs without a leading slash are concatenated as-is
        assert_eq!(
            filter.absolutize("poke-mon-fossil/3"),
            "https://www.psacard.com/poke-mon-fossil/3"
        );
    }

    #[test]
    fn test_apply() {
        let filter = LinkFilter::new("https://example.com", "set").unwrap();
        assert_eq!(
            filter.apply("/sets/1").as_deref(),
            Some("https://example.com/sets/1")
        );
        assert_eq!(filter.apply("/cards/1"), None);
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let filter = LinkFilter::default();
        assert!(!filter.matches("/Poke-Mon-base-set/1"));
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let err = LinkFilter::new("www.psacard.com", "poke-mon").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidOrigin { ref origin, .. } if origin == "www.psacard.com"));
    }
}
