//! Search query model

use crate::error::SearchError;
use crate::query::LicenseFilter;
use serde::{Deserialize, Serialize};

/// A validated aggregate search request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// The search text, never blank
    pub query: String,
    /// License filter passed to every provider
    pub license: LicenseFilter,
    /// Providers to query; empty means the registry's default set
    pub providers: Vec<String>,
}

impl SearchQuery {
    /// Create a query, rejecting blank text
    pub fn new(query: impl Into<String>, license: LicenseFilter) -> Result<Self, SearchError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(Self {
            query,
            license,
            providers: Vec::new(),
        })
    }

    /// Validate raw caller input
    ///
    /// Provider names are trimmed and de-duplicated, keeping the first
    /// occurrence.
    pub fn parse<S: AsRef<str>>(
        query: &str,
        license: &str,
        providers: &[S],
    ) -> Result<Self, SearchError> {
        // Blank text is reported before a bad license
        let mut search_query = Self::new(query, LicenseFilter::Unspecified)?;
        search_query.license = license.parse()?;
        for name in providers {
            search_query.add_provider(name.as_ref());
        }
        Ok(search_query)
    }

    /// Add a provider to the query
    pub fn add_provider(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() && !self.providers.iter().any(|p| p == name) {
            self.providers.push(name.to_string());
        }
    }

}
