//! Marker domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PetMapError, Result};

/// Color used when a record does not carry one.
pub const DEFAULT_MARKER_COLOR: &str = "#A35E49";

/// Title used when a record arrives without a description.
pub const DEFAULT_MARKER_TITLE: &str = "New point";

/// Identifier of a reported point.
///
/// Backends send either numeric or textual ids; both are kept as text so
/// that markers from the remote API and the mock compare the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId")]
pub struct PointId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl From<WireId> for PointId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Signed(n) => Self(n.to_string()),
            WireId::Unsigned(n) => Self(n.to_string()),
            WireId::Text(s) => Self(s),
        }
    }
}

impl PointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    /// Creates a position, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let position = Self { lat, lng };
        position.validate()?;
        Ok(position)
    }

    /// Checks that `lat ∈ [-90, 90]` and `lng ∈ [-180, 180]`.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(PetMapError::validation(format!(
                "latitude {} is outside [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(PetMapError::validation(format!(
                "longitude {} is outside [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {:.4}, Lng: {:.4}", self.lat, self.lng)
    }
}

/// Canonical view-model of one reported pet sighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: PointId,
    pub title: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Hex color, e.g. `#A35E49`.
    pub color: String,
    /// Whether the signed-in user reported this pet.
    pub is_my_pet: bool,
}
