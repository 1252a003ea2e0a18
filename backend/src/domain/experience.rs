//! Experience records and their client-facing enriched form.
//!
//! Records are owned by the record store; this module only describes the
//! read shape selected by the listing and the shape returned to clients.

use std::fmt;

use crate::domain::ports::ImageSignerError;

/// Opaque storage key of an experience image inside the image bucket.
///
/// ## Invariants
/// - The key is non-empty. Blank keys coming from the store are treated as
///   "no image" by [`ImagePath::from_optional`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath(String);

impl ImagePath {
    /// Normalise an optional raw key, mapping blank values to `None`.
    ///
    /// # Examples
    /// ```
    /// use experiences_backend::domain::ImagePath;
    ///
    /// assert!(ImagePath::from_optional(Some(String::new())).is_none());
    /// let path = ImagePath::from_optional(Some("u1/cafe.jpg".into())).unwrap();
    /// assert_eq!(path.as_str(), "u1/cafe.jpg");
    /// ```
    pub fn from_optional(raw: Option<String>) -> Option<Self> {
        raw.filter(|value| !value.trim().is_empty()).map(Self)
    }

    /// Raw storage key.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Experience row as selected from the record store.
///
/// `created_at` is used by the store for ordering only and is not carried.
/// Nullable columns stay `None` so every stored row is listed as it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Display title.
    pub title: Option<String>,
    /// Free-form category label.
    pub category: Option<String>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
    /// Storage key of the attached image, if any.
    pub image_path: Option<ImagePath>,
}

/// Outcome of resolving one record's image into a signed URL.
///
/// Failures are kept distinct here so they can be logged, but they collapse
/// to the same `null` as a missing image once returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResolution {
    /// The record has no image; the blob store was not called.
    NoImage,
    /// The blob store issued a signed URL.
    Signed(String),
    /// Signing failed or timed out.
    Failed(ImageSignerError),
}

impl ImageResolution {
    /// Client-facing URL, or `None` for both missing and failed images.
    pub fn into_url(self) -> Option<String> {
        match self {
            Self::Signed(url) => Some(url),
            Self::NoImage | Self::Failed(_) => None,
        }
    }
}

/// Experience as returned to clients, with the storage key replaced by a
/// short-lived URL.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedExperience {
    /// Opaque unique identifier.
    pub id: String,
    /// Display title.
    pub title: Option<String>,
    /// Free-form category label.
    pub category: Option<String>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
    /// Signed image URL; `None` when there is no image or signing failed.
    pub image_url: Option<String>,
}

impl EnrichedExperience {
    /// Combine a stored record with the outcome of its image resolution.
    pub fn from_record(record: ExperienceRecord, image: ImageResolution) -> Self {
        let ExperienceRecord {
            id,
            title,
            category,
            latitude,
            longitude,
            image_path: _,
        } = record;
        Self {
            id,
            title,
            category,
            latitude,
            longitude,
            image_url: image.into_url(),
        }
    }
}

/// Complete result of one listing request, in record store order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExperienceListing {
    experiences: Vec<EnrichedExperience>,
}

impl ExperienceListing {
    /// Wrap enriched experiences, preserving their order.
    pub fn new(experiences: Vec<EnrichedExperience>) -> Self {
        Self { experiences }
    }

    /// Number of experiences in the listing.
    pub fn count(&self) -> usize {
        self.experiences.len()
    }

    /// Borrow the experiences.
    pub fn experiences(&self) -> &[EnrichedExperience] {
        &self.experiences
    }

    /// Consume the listing, yielding the experiences.
    pub fn into_experiences(self) -> Vec<EnrichedExperience> {
        self.experiences
    }
}
