//! Point wire models, the gateway capability, and the normalizer.
//!
//! A point is what the backend stores for a reported sighting. It reaches
//! the UI only after [`normalize`] turns it into a [`Marker`](crate::marker::Marker).

mod gateway;
mod model;
mod normalizer;

pub use gateway::PointsGateway;
pub use model::{ImageAttachment, NewPointRequest, PointFields, PointPayload, RawPoint};
pub use normalizer::{normalize, normalize_all};
