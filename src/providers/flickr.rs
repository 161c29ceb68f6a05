//! Flickr photo search provider

use super::denylist::Denylist;
use super::traits::*;
use crate::error::{ConfigError, ProviderError};
use crate::query::LicenseFilter;
use crate::results::{License, Photo};
use serde::Deserialize;

/// Provider name
pub const NAME: &str = "flickr";

/// Default REST endpoint
pub const FLICKR_ENDPOINT: &str = "https://www.flickr.com/services/rest/";

/// License codes appended to every search: no known restrictions,
/// US government work, CC0 and public domain mark
const ALWAYS_INCLUDED: [&str; 4] = ["7", "8", "9", "10"];

/// Fixed parameters sent with every search
const SEARCH_PARAMS: [(&str, &str); 7] = [
    ("media", "photos"),
    ("method", "flickr.photos.search"),
    ("per_page", "30"),
    ("safe_search", "1"),
    ("sort", "relevance"),
    ("content_type", "1"),
    ("extras", "description,license,owner_name"),
];

/// Flickr license codes with their display names and URLs
const LICENSES: [(&str, &str, &str); 11] = [
    ("0", "All Rights Reserved", ""),
    (
        "1",
        "Attribution-NonCommercial-ShareAlike License",
        "https://creativecommons.org/licenses/by-nc-sa/2.0/",
    ),
    (
        "2",
        "Attribution-NonCommercial License",
        "https://creativecommons.org/licenses/by-nc/2.0/",
    ),
    (
        "3",
        "Attribution-NonCommercial-NoDerivs License",
        "https://creativecommons.org/licenses/by-nc-nd/2.0/",
    ),
    (
        "4",
        "Attribution License",
        "https://creativecommons.org/licenses/by/2.0/",
    ),
    (
        "5",
        "Attribution-ShareAlike License",
        "https://creativecommons.org/licenses/by-sa/2.0/",
    ),
    (
        "6",
        "Attribution-NoDerivs License",
        "https://creativecommons.org/licenses/by-nd/2.0/",
    ),
    (
        "7",
        "No known copyright restrictions",
        "https://www.flickr.com/commons/usage/",
    ),
    (
        "8",
        "United States Government Work",
        "http://www.usa.gov/copyright.shtml",
    ),
    (
        "9",
        "Public Domain Dedication (CC0)",
        "https://creativecommons.org/publicdomain/zero/1.0/",
    ),
    (
        "10",
        "Public Domain Mark",
        "https://creativecommons.org/publicdomain/mark/1.0/",
    ),
];

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    stat: Option<String>,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    photos: Option<PhotoPage>,
}

#[derive(Debug, Deserialize)]
struct PhotoPage {
    photo: Vec<FlickrPhoto>,
}

#[derive(Debug, Deserialize)]
struct FlickrPhoto {
    id: String,
    secret: String,
    server: String,
    farm: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    license: String,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    ownername: String,
    #[serde(default)]
    description: Description,
}

#[derive(Debug, Default, Deserialize)]
struct Description {
    #[serde(rename = "_content", default)]
    content: String,
}

/// Flickr photo search via `flickr.photos.search`
#[derive(Debug, Clone)]
pub struct Flickr {
    base_url: String,
    api_key: String,
    denylist: Denylist,
}

impl Flickr {
    /// Create a provider against the public Flickr endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_endpoint(api_key, FLICKR_ENDPOINT)
    }

    /// Create a provider against a custom endpoint
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: &str) -> Result<Self, ConfigError> {
        let base_url = parse_endpoint(NAME, endpoint)?;
        Ok(Self {
            base_url: base_url.to_string(),
            api_key: api_key.into(),
            denylist: Denylist::default(),
        })
    }

    /// Replace the denylist
    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    /// Flickr license codes for a filter, including the always-included ones
    pub fn license_codes(license: LicenseFilter) -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = match license {
            LicenseFilter::Public => vec![],
            LicenseFilter::Share => vec!["1", "2", "3", "4", "5", "6"],
            LicenseFilter::ShareCommercially => vec!["4", "5", "6"],
            LicenseFilter::Modify => vec!["1", "2", "4", "5"],
            LicenseFilter::ModifyCommercially => vec!["4", "5"],
            LicenseFilter::Unspecified | LicenseFilter::Any => vec!["1", "2", "3", "4", "5", "6"],
        };
        codes.extend(ALWAYS_INCLUDED);
        codes
    }

    /// Look up a license code
    pub fn license_info(code: &str) -> Option<License> {
        LICENSES
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(_, name, url)| License::new(*name, *url))
    }

    fn to_photo(&self, p: FlickrPhoto) -> Photo {
        let image_url = format!(
            "https://farm{}.staticflickr.com/{}/{}_{}.jpg",
            p.farm, p.server, p.id, p.secret
        );

        let mut photo = Photo::new(NAME, image_url.clone(), p.title)
            .with_thumbnail(image_url)
            .with_origin(format!("https://flickr.com/{}/{}", p.owner, p.id))
            .with_description(p.description.content);

        if !p.ownername.is_empty() {
            photo = photo.with_owner(p.ownername);
        }
        if let Some(license) = Self::license_info(&p.license) {
            photo = photo.with_license(license);
        }
        photo
    }
}

impl Provider for Flickr {
    fn name(&self) -> &str {
        NAME
    }

    fn request(&self, text: &str, license: LicenseFilter) -> ProviderRequest {
        let mut request = ProviderRequest::get(&self.base_url)
            .param("api_key", &self.api_key)
            .param("format", "json")
            .param("nojsoncallback", "1")
            .param("text", text)
            .param("license", Self::license_codes(license).join(","));

        for (key, value) in SEARCH_PARAMS {
            request = request.param(key, value);
        }

        request
    }

    fn response(&self, response: ProviderResponse) -> Result<Vec<Photo>, ProviderError> {
        let envelope: SearchEnvelope = response.json()?;

        // Flickr reports API failures inside a 200 response
        if envelope.stat.as_deref() == Some("fail") {
            return Err(ProviderError::Upstream(format!(
                "{}: {}",
                envelope.code.unwrap_or_default(),
                envelope.message.unwrap_or_default()
            )));
        }

        let page = envelope
            .photos
            .ok_or_else(|| ProviderError::MalformedResponse("missing field `photos`".to_string()))?;

        let photos = page.photo.into_iter().map(|p| self.to_photo(p)).collect();
        Ok(self.denylist.apply(photos))
    }
}
