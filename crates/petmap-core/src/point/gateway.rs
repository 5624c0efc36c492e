//! Points gateway capability.

use async_trait::async_trait;

use super::model::{PointPayload, RawPoint};
use crate::auth::SessionCredentials;
use crate::error::Result;

/// Capability over point persistence.
///
/// Implemented by the remote HTTP gateway and by the in-process mock. Every
/// consumer holds an `Arc<dyn PointsGateway>` and never names the concrete
/// type, so either backend (or a test double) can be swapped in at startup.
#[async_trait]
pub trait PointsGateway: Send + Sync {
    /// Lists every point visible to the given session.
    async fn fetch_points(&self, credentials: &SessionCredentials) -> Result<Vec<RawPoint>>;

    /// Persists a new point and returns the record as stored by the backend.
    async fn create_point(
        &self,
        credentials: &SessionCredentials,
        payload: &PointPayload,
    ) -> Result<RawPoint>;
}
