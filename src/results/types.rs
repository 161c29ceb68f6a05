//! Result type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// A single normalized photo, whatever provider it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Provider that returned this photo
    pub source: String,
    /// Full-size image URL
    pub url: String,
    /// Thumbnail URL
    #[serde(rename = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Page the photo is published on
    #[serde(rename = "origin", skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    /// Title of the photo
    pub title: String,
    /// Description text
    #[serde(default)]
    pub description: String,
    /// Display name of the owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Usage license, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl Photo {
    /// Create a new photo with only the required fields set
    pub fn new(
        source: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            url: url.into(),
            thumbnail_url: None,
            origin_url: None,
            title: title.into(),
            description: String::new(),
            owner: None,
            license: None,
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_origin(mut self, url: impl Into<String>) -> Self {
        self.origin_url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }

    /// Host of the image URL, if it parses
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }
}

/// Usage license attached to a photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

impl License {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
