//! Point wire models and the request/payload types used to create points.

use serde::{Deserialize, Serialize};

use crate::error::{PetMapError, Result};
use crate::marker::{DEFAULT_MARKER_COLOR, PointId, Position};

/// A point record as the backend (or the mock) sends it, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoint {
    pub id: PointId,
    #[serde(rename = "descricao", default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, alias = "is_my_pet", skip_serializing_if = "Option::is_none")]
    pub is_my_pet: Option<bool>,
}

impl RawPoint {
    /// Checks the coordinates; a record that fails here is a malformed payload.
    pub fn validate(&self) -> Result<()> {
        Position {
            lat: self.latitude,
            lng: self.longitude,
        }
        .validate()
        .map_err(|e| {
            PetMapError::malformed(format!("point {} has invalid coordinates: {}", self.id, e.user_message()))
        })
    }
}

/// An image picked by the user to attach to a new point.
#[derive(Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

// Image bytes are not useful in logs.
impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What the user filled in on the "new pet" form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPointRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub image: Option<ImageAttachment>,
    pub color: String,
}

impl NewPointRequest {
    /// Creates a request at the given position with the default color and no image.
    pub fn new(position: Position, description: impl Into<String>) -> Self {
        Self {
            latitude: position.lat,
            longitude: position.lng,
            description: description.into(),
            image: None,
            color: DEFAULT_MARKER_COLOR.to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    /// Validates the request and turns it into the payload a gateway sends.
    ///
    /// The description is trimmed and must not be empty; coordinates must be
    /// in range. Nothing is sent when this fails.
    pub fn into_payload(self) -> Result<PointPayload> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(PetMapError::validation("description is required"));
        }
        Position {
            lat: self.latitude,
            lng: self.longitude,
        }
        .validate()?;

        let fields = PointFields {
            latitude: self.latitude,
            longitude: self.longitude,
            description: description.to_string(),
            color: self.color,
        };

        Ok(match self.image {
            Some(image) => PointPayload::WithAttachment(fields, image),
            None => PointPayload::NoAttachment(fields),
        })
    }
}

/// Scalar fields of a new point, shaped like the backend expects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointFields {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "descricao")]
    pub description: String,
    pub color: String,
}

/// Body of a create-point call.
///
/// Only [`NewPointRequest::into_payload`] builds one, so the description is
/// always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub enum PointPayload {
    /// Sent as a JSON document.
    NoAttachment(PointFields),
    /// Sent as multipart form data with an `image` part.
    WithAttachment(PointFields, ImageAttachment),
}

impl PointPayload {
    pub fn fields(&self) -> &PointFields {
        match self {
            Self::NoAttachment(fields) | Self::WithAttachment(fields, _) => fields,
        }
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        match self {
            Self::NoAttachment(_) => None,
            Self::WithAttachment(_, image) => Some(image),
        }
    }
}
