//! In-memory point repository backing the mock gateway.

use petmap_core::marker::PointId;
use petmap_core::point::RawPoint;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A list of point records living only in this process.
///
/// Clones share the same list, so a gateway and a test can hold the same
/// repository and observe each other's writes. Separate `new`/`seeded`
/// calls produce independent datasets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPointRepository {
    points: Arc<RwLock<Vec<RawPoint>>>,
}

impl InMemoryPointRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given records.
    pub fn with_points(points: Vec<RawPoint>) -> Self {
        Self {
            points: Arc::new(RwLock::new(points)),
        }
    }

    /// Creates a repository holding the two fixture sightings.
    pub fn seeded() -> Self {
        Self::with_points(fixture_points())
    }

    pub async fn list(&self) -> Vec<RawPoint> {
        self.points.read().await.clone()
    }

    pub async fn insert(&self, point: RawPoint) {
        self.points.write().await.push(point);
    }

    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.points.read().await.is_empty()
    }
}

/// Two sightings around central São Paulo.
pub fn fixture_points() -> Vec<RawPoint> {
    vec![
        RawPoint {
            id: PointId::new("mock-1"),
            description: "Thor - golden retriever, red collar".to_string(),
            latitude: -23.55052,
            longitude: -46.633308,
            image_url: Some("https://placehold.co/300x200?text=Thor".to_string()),
            color: Some("#A35E49".to_string()),
            is_my_pet: Some(false),
        },
        RawPoint {
            id: PointId::new("mock-2"),
            description: "Mia - siamese cat, very shy".to_string(),
            latitude: -23.561414,
            longitude: -46.655881,
            image_url: Some("https://placehold.co/300x200?text=Mia".to_string()),
            color: Some("#2B2B24".to_string()),
            is_my_pet: Some(false),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_has_two_fixtures() {
        let repo = InMemoryPointRepository::seeded();
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let repo = InMemoryPointRepository::new();
        let clone = repo.clone();
        clone.insert(fixture_points().remove(0)).await;
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_separate_instances_are_isolated() {
        let first = InMemoryPointRepository::seeded();
        let second = InMemoryPointRepository::seeded();
        first.insert(fixture_points().remove(0)).await;
        assert_eq!(first.len().await, 3);
        assert_eq!(second.len().await, 2);
    }
}
