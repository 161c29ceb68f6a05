//! Bing Image Search provider

use super::denylist::Denylist;
use super::traits::*;
use crate::error::{ConfigError, ProviderError};
use crate::query::LicenseFilter;
use crate::results::Photo;
use serde::Deserialize;

/// Provider name
pub const NAME: &str = "bing";

/// Default Image Search v7 endpoint
pub const BING_ENDPOINT: &str = "https://api.cognitive.microsoft.com/bing/v7.0/images/search";

/// Header carrying the subscription key
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Stock sites whose images Bing re-indexes
pub const DEFAULT_DENYLIST: [&str; 1] = [r".*pixabay\.com"];

/// Fixed parameters sent with every search
const SEARCH_PARAMS: [(&str, &str); 3] = [
    ("count", "150"),
    ("imageType", "Photo"),
    ("modules", "Tags"),
];

#[derive(Debug, Deserialize)]
struct ImageAnswer {
    value: Vec<BingImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BingImage {
    #[serde(default)]
    name: String,
    #[serde(default)]
    content_url: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    host_page_url: Option<String>,
    #[serde(default)]
    insights_metadata: InsightsMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsightsMetadata {
    #[serde(default)]
    best_representative_query: RepresentativeQuery,
}

#[derive(Debug, Default, Deserialize)]
struct RepresentativeQuery {
    #[serde(default)]
    text: String,
}

/// Bing Image Search via the Cognitive Services API
#[derive(Debug, Clone)]
pub struct Bing {
    base_url: String,
    api_key: String,
    denylist: Denylist,
}

impl Bing {
    /// Create a provider against the public Bing endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_endpoint(api_key, BING_ENDPOINT)
    }

    /// Create a provider against a custom endpoint
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: &str) -> Result<Self, ConfigError> {
        let base_url = parse_endpoint(NAME, endpoint)?;
        Ok(Self {
            base_url: base_url.to_string(),
            api_key: api_key.into(),
            denylist: Denylist::for_provider(NAME, &DEFAULT_DENYLIST)?,
        })
    }

    /// Replace the denylist
    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    /// Bing `license` parameter for a filter
    pub fn license_code(license: LicenseFilter) -> &'static str {
        match license {
            LicenseFilter::Public => "Public",
            LicenseFilter::Share => "Share",
            LicenseFilter::ShareCommercially => "ShareCommercially",
            LicenseFilter::Modify => "Modify",
            LicenseFilter::ModifyCommercially => "ModifyCommercially",
            LicenseFilter::Unspecified | LicenseFilter::Any => "Any",
        }
    }

    /// Records without an image URL are skipped
    fn to_photo(image: BingImage) -> Option<Photo> {
        let url = image.content_url.filter(|u| !u.is_empty())?;
        let mut photo = Photo::new(NAME, url, image.name)
            .with_description(image.insights_metadata.best_representative_query.text);

        if let Some(thumbnail) = image.thumbnail_url.filter(|u| !u.is_empty()) {
            photo = photo.with_thumbnail(thumbnail);
        }
        if let Some(origin) = image.host_page_url.filter(|u| !u.is_empty()) {
            photo = photo.with_origin(origin);
        }
        Some(photo)
    }
}

impl Provider for Bing {
    fn name(&self) -> &str {
        NAME
    }

    fn request(&self, text: &str, license: LicenseFilter) -> ProviderRequest {
        let mut request = ProviderRequest::get(&self.base_url)
            .header(KEY_HEADER, &self.api_key)
            .param("q", text)
            .param("license", Self::license_code(license));

        for (key, value) in SEARCH_PARAMS {
            request = request.param(key, value);
        }

        request
    }

    fn response(&self, response: ProviderResponse) -> Result<Vec<Photo>, ProviderError> {
        let answer: ImageAnswer = response.json()?;
        let photos = answer.value.into_iter().filter_map(Self::to_photo).collect();
        Ok(self.denylist.apply(photos))
    }
}
