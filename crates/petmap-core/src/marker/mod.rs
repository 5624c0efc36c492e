//! Marker domain models and the in-memory marker store.
//!
//! A marker is the canonical client-side view of one reported pet sighting,
//! ready to be handed to a map widget.

mod model;
mod store;

pub use model::{DEFAULT_MARKER_COLOR, DEFAULT_MARKER_TITLE, Marker, PointId, Position};
pub use store::MarkerStore;
