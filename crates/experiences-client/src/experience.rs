//! Listing entries as received from the endpoint.

use serde::{Deserialize, Serialize};

/// One experience with a ready-to-load image URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Opaque unique identifier.
    pub id: String,
    /// Display title, if the record has one.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Latitude in degrees; `None` for records stored without coordinates.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Short-lived image URL; `None` when the experience has no usable image.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Successful response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingEnvelope {
    #[serde(default)]
    pub(crate) data: Option<Vec<Experience>>,
}

/// Error response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub(crate) error: Option<String>,
}
