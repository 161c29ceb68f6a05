//! Query filters
//!
//! The caller-facing license filter. Each provider translates it into its
//! own license vocabulary when building a request.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// License filter constraining the usage rights of returned photos
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LicenseFilter {
    /// No filter given; each provider applies its own default
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Any,
    Public,
    Share,
    ShareCommercially,
    Modify,
    ModifyCommercially,
}

impl LicenseFilter {
    /// All recognized values, in wire form order
    pub const ALL: [LicenseFilter; 7] = [
        Self::Unspecified,
        Self::Any,
        Self::Public,
        Self::Share,
        Self::ShareCommercially,
        Self::Modify,
        Self::ModifyCommercially,
    ];

    /// Get the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Any => "any",
            Self::Public => "public",
            Self::Share => "share",
            Self::ShareCommercially => "sharecommercially",
            Self::Modify => "modify",
            Self::ModifyCommercially => "modifycommercially",
        }
    }
}

impl FromStr for LicenseFilter {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|license| license.as_str() == s)
            .ok_or_else(|| SearchError::UnknownLicense(s.to_string()))
    }
}

impl std::fmt::Display for LicenseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
