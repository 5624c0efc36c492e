//! Map use case: keeps the marker store in sync with the points gateway.

use petmap_core::Result;
use petmap_core::auth::SessionCredentials;
use petmap_core::marker::{Marker, MarkerStore};
use petmap_core::point::{NewPointRequest, PointsGateway, normalize, normalize_all};
use std::sync::Arc;

/// Stateless half of the map use case: gateway calls plus normalization.
///
/// Cheap to clone, so callers that fire several creations at once can move a
/// clone into each task and append the markers as they resolve.
#[derive(Clone)]
pub struct PointService {
    gateway: Arc<dyn PointsGateway>,
}

impl PointService {
    pub fn new(gateway: Arc<dyn PointsGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches every point and normalizes it.
    pub async fn fetch_markers(&self, credentials: &SessionCredentials) -> Result<Vec<Marker>> {
        let raws = self.gateway.fetch_points(credentials).await?;
        Ok(normalize_all(raws))
    }

    /// Validates and persists a new point, returning the stored marker.
    ///
    /// Validation failures return before the gateway is called.
    pub async fn create_marker(
        &self,
        credentials: &SessionCredentials,
        request: NewPointRequest,
    ) -> Result<Marker> {
        let payload = request.into_payload()?;
        let raw = self.gateway.create_point(credentials, &payload).await?;
        Ok(normalize(raw))
    }
}

/// The map page's data flow: one marker store fed by one gateway.
///
/// Mutating methods take `&mut self`, so only the task that owns the use
/// case can change the store.
pub struct MapUseCase {
    service: PointService,
    store: MarkerStore,
}

impl MapUseCase {
    pub fn new(gateway: Arc<dyn PointsGateway>) -> Self {
        Self {
            service: PointService::new(gateway),
            store: MarkerStore::new(),
        }
    }

    /// Replaces the store with the backend's current points.
    ///
    /// On failure the error is logged, the store is left empty, and the
    /// error is returned. There is no retry.
    pub async fn load_markers(&mut self, credentials: &SessionCredentials) -> Result<usize> {
        match self.service.fetch_markers(credentials).await {
            Ok(markers) => {
                let count = markers.len();
                self.store.load(markers);
                tracing::info!("[MapUseCase] Loaded {} markers", count);
                Ok(count)
            }
            Err(e) => {
                self.store.load(Vec::new());
                tracing::error!("[MapUseCase] Failed to load markers: {}", e);
                Err(e)
            }
        }
    }

    /// Persists a new point and appends the resulting marker.
    ///
    /// Nothing is appended unless the gateway call succeeds.
    pub async fn save_point(
        &mut self,
        credentials: &SessionCredentials,
        request: NewPointRequest,
    ) -> Result<Marker> {
        let marker = self.service.create_marker(credentials, request).await?;
        self.append_created(marker.clone());
        Ok(marker)
    }

    /// Appends a marker produced by [`PointService::create_marker`].
    ///
    /// Call in the order the creations resolve.
    pub fn append_created(&mut self, marker: Marker) {
        if self.store.contains(&marker.id) {
            tracing::warn!(
                "[MapUseCase] Backend returned duplicate point id {}; appending anyway",
                marker.id
            );
        }
        self.store.append(marker);
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.store
    }

    pub fn my_pets(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.store.my_pets()
    }

    /// A handle for issuing gateway calls outside of `&mut self`.
    pub fn service(&self) -> PointService {
        self.service.clone()
    }
}
