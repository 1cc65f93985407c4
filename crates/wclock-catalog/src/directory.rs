//! # Zone Directory
//!
//! The curated list of displayable places — country, optional city, IANA
//! zone, and coordinates. A copy covering every UTC offset family ships
//! embedded in the crate; deployments with their own curation pass JSON to
//! [`ZoneDirectory::from_json`].

use serde::{Deserialize, Serialize};

use wclock_core::ZoneId;

use crate::error::CatalogError;

/// Embedded directory, curated for offset coverage (whole-hour, half-hour,
/// and 45-minute zones; DST and fixed-offset zones; both hemispheres).
const WORLD_ZONES_JSON: &str = include_str!("../data/world_zones.json");

/// One displayable place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneEntry {
    /// Country display name.
    pub country: String,
    /// City display name, when the directory distinguishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// IANA zone for the place.
    #[serde(rename = "timeZone")]
    pub time_zone: ZoneId,
    /// Latitude in degrees, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in degrees, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// An ordered collection of zone entries.
#[derive(Debug, Clone)]
pub struct ZoneDirectory {
    entries: Vec<ZoneEntry>,
}

impl ZoneDirectory {
    /// Load the embedded directory.
    ///
    /// # Errors
    ///
    /// Only if the embedded JSON is corrupt, which a unit test guards.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(WORLD_ZONES_JSON)
    }

    /// Parse a directory from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ZoneEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(CatalogError::Directory("directory has no entries".into()));
        }
        Ok(Self { entries })
    }

    /// Build a directory from already-constructed entries.
    pub fn from_entries(entries: Vec<ZoneEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in directory order.
    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
