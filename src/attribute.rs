//! Attribute records
//!
//! A short code maps to one `AttributeEntry`. The category says how the
//! resource model treats the attribute.

use crate::error::ResolverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an attribute in the resource model.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AttributeCategory {
    /// Present on every resource (resourceID, parentID, ...)
    Universal,
    /// Shared by many resource types (expirationTime, stateTag, ...)
    Common,
    /// Specific to one resource type, or not recognised at all
    #[default]
    Custom,
    /// Not a resource attribute proper: primitive parameters, type names
    Unspecified,
}

impl AttributeCategory {
    pub const ALL: [AttributeCategory; 4] = [
        AttributeCategory::Universal,
        AttributeCategory::Common,
        AttributeCategory::Custom,
        AttributeCategory::Unspecified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeCategory::Universal => "universal",
            AttributeCategory::Common => "common",
            AttributeCategory::Custom => "custom",
            AttributeCategory::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for AttributeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeCategory {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "universal" => Ok(AttributeCategory::Universal),
            "common" => Ok(AttributeCategory::Common),
            "custom" => Ok(AttributeCategory::Custom),
            "unspecified" => Ok(AttributeCategory::Unspecified),
            other => Err(ResolverError::Overlay(format!(
                "Unknown attribute category: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub short_code: String,
    pub long_name: String,
    pub category: AttributeCategory,
}

impl AttributeEntry {
    pub fn new(
        short_code: impl Into<String>,
        long_name: impl Into<String>,
        category: AttributeCategory,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            long_name: long_name.into(),
            category,
        }
    }
}
