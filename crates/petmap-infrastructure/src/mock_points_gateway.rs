//! Mock points gateway.
//!
//! Serves points from an [`InMemoryPointRepository`] after a fixed simulated
//! latency, so callers suspend exactly as they would on a network call.

use async_trait::async_trait;
use petmap_core::Result;
use petmap_core::auth::SessionCredentials;
use petmap_core::config::DEFAULT_MOCK_LATENCY_MS;
use petmap_core::marker::PointId;
use petmap_core::point::{PointPayload, PointsGateway, RawPoint};
use std::time::Duration;
use uuid::Uuid;

use crate::in_memory_point_repository::InMemoryPointRepository;

const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/300x200?text=";
const PLACEHOLDER_FALLBACK_WORD: &str = "Pet";

/// In-process stand-in for the remote points gateway. Never fails.
#[derive(Debug, Clone)]
pub struct MockPointsGateway {
    repository: InMemoryPointRepository,
    latency: Duration,
}

impl MockPointsGateway {
    pub fn new(repository: InMemoryPointRepository) -> Self {
        Self {
            repository,
            latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }

    /// Gateway over a fresh repository holding the fixture sightings.
    pub fn seeded() -> Self {
        Self::new(InMemoryPointRepository::seeded())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn repository(&self) -> &InMemoryPointRepository {
        &self.repository
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl PointsGateway for MockPointsGateway {
    async fn fetch_points(&self, _credentials: &SessionCredentials) -> Result<Vec<RawPoint>> {
        self.simulate_latency().await;
        let points = self.repository.list().await;
        tracing::debug!("MOCK API: returning {} points", points.len());
        Ok(points)
    }

    async fn create_point(
        &self,
        _credentials: &SessionCredentials,
        payload: &PointPayload,
    ) -> Result<RawPoint> {
        self.simulate_latency().await;

        let fields = payload.fields();
        let point = RawPoint {
            id: PointId::new(Uuid::new_v4().to_string()),
            description: fields.description.clone(),
            latitude: fields.latitude,
            longitude: fields.longitude,
            image_url: Some(placeholder_image_url(&fields.description)),
            color: Some(fields.color.clone()),
            is_my_pet: Some(true),
        };
        self.repository.insert(point.clone()).await;

        tracing::debug!(
            "MOCK API: created point {} (image attached: {})",
            point.id,
            payload.image().is_some()
        );
        Ok(point)
    }
}

/// Placeholder image URL labelled with the first word of the description.
///
/// Only ASCII letters and digits of that word are kept so the label needs no
/// URL encoding.
pub fn placeholder_image_url(description: &str) -> String {
    let word: String = description
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let label = if word.is_empty() {
        PLACEHOLDER_FALLBACK_WORD
    } else {
        word.as_str()
    };
    format!("{}{}", PLACEHOLDER_IMAGE_BASE, label)
}
