//! Host denylist applied while normalizing provider records

use crate::error::ConfigError;
use crate::results::Photo;
use regex::Regex;

/// Host patterns whose photos are dropped from a provider's results
///
/// Patterns are regular expressions matched anywhere in the host of the
/// photo's image URL.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    patterns: Vec<Regex>,
}

impl Denylist {
    /// Compile a denylist from patterns
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Compile a provider's denylist, reporting bad patterns as config errors
    pub fn for_provider<S: AsRef<str>>(
        provider: &str,
        patterns: &[S],
    ) -> Result<Self, ConfigError> {
        Self::new(patterns).map_err(|e| ConfigError::InvalidDenylist {
            provider: provider.to_string(),
            message: e.to_string(),
        })
    }

    /// Check a host against the patterns
    pub fn is_denied(&self, host: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(host))
    }

    /// Whether a photo survives the denylist; unparseable URLs have no host
    pub fn allows(&self, photo: &Photo) -> bool {
        match photo.hostname() {
            Some(host) => !self.is_denied(&host),
            None => true,
        }
    }

    /// Drop denied photos, keeping the order of the rest
    pub fn apply(&self, photos: Vec<Photo>) -> Vec<Photo> {
        if self.patterns.is_empty() {
            return photos;
        }
        photos.into_iter().filter(|p| self.allows(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_matching() {
        let denylist = Denylist::new(&[r".*pixabay\.com"]).unwrap();
        assert!(denylist.is_denied("pixabay.com"));
        assert!(denylist.is_denied("cdn.pixabay.com"));
        assert!(!denylist.is_denied("images.example.org"));
    }

    #[test]
    fn test_apply_compacts() {
        let denylist = Denylist::new(&[r"pixabay\.com"]).unwrap();
        let photos = vec![
            Photo::new("bing", "https://cdn.pixabay.com/1.jpg", "denied"),
            Photo::new("bing", "https://example.org/2.jpg", "kept"),
            Photo::new("bing", "not a url", "no host"),
        ];

        let kept = denylist.apply(photos);
        let titles: Vec<_> = kept.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["kept", "no host"]);
    }

    #[test]
    fn test_only_host_is_checked() {
        let denylist = Denylist::new(&[r"pixabay\.com"]).unwrap();
        let photo = Photo::new("bing", "https://example.org/from/pixabay.com/1.jpg", "path");
        assert!(denylist.allows(&photo));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Denylist::for_provider("bing", &["("]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDenylist { provider, .. } if provider == "bing"));
    }
}
