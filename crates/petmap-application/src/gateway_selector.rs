//! Gateway selection.
//!
//! The single place that names concrete gateway types. Everything else holds
//! `Arc<dyn PointsGateway>` / `Arc<dyn AuthGateway>`.

use petmap_core::auth::AuthGateway;
use petmap_core::config::{ClientConfig, GatewayMode};
use petmap_core::point::PointsGateway;
use petmap_infrastructure::{InMemoryPointRepository, MockAuthGateway, MockPointsGateway};
use petmap_interaction::{RemoteAuthGateway, RemotePointsGateway};
use std::sync::Arc;

/// The gateways backing every call for one process (or one test).
#[derive(Clone)]
pub struct Gateways {
    mode: GatewayMode,
    points: Arc<dyn PointsGateway>,
    auth: Arc<dyn AuthGateway>,
}

impl Gateways {
    /// Assembles gateways from arbitrary implementations, e.g. test doubles.
    pub fn from_parts(
        mode: GatewayMode,
        points: Arc<dyn PointsGateway>,
        auth: Arc<dyn AuthGateway>,
    ) -> Self {
        Self { mode, points, auth }
    }

    pub fn mode(&self) -> GatewayMode {
        self.mode
    }

    pub fn points(&self) -> Arc<dyn PointsGateway> {
        self.points.clone()
    }

    pub fn auth(&self) -> Arc<dyn AuthGateway> {
        self.auth.clone()
    }
}

impl std::fmt::Debug for Gateways {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateways").field("mode", &self.mode).finish()
    }
}

/// Resolves which gateway implementation backs the points and auth capabilities.
pub struct GatewaySelector;

impl GatewaySelector {
    /// Builds the gateways for `config`.
    ///
    /// Mock mode gets a freshly seeded [`InMemoryPointRepository`], so two
    /// selections never share mock data.
    pub fn select(config: &ClientConfig) -> Gateways {
        Self::select_with_repository(config, InMemoryPointRepository::seeded())
    }

    /// Like [`select`](Self::select), but mock mode serves `repository`.
    pub fn select_with_repository(
        config: &ClientConfig,
        repository: InMemoryPointRepository,
    ) -> Gateways {
        let mode = config.gateway_mode();
        tracing::info!("[GatewaySelector] Using {} gateways", mode);

        match mode {
            GatewayMode::Mock => {
                let latency = config.mock_latency();
                Gateways::from_parts(
                    mode,
                    Arc::new(MockPointsGateway::new(repository).with_latency(latency)),
                    Arc::new(MockAuthGateway::new().with_latency(latency)),
                )
            }
            GatewayMode::Remote => {
                tracing::info!("[GatewaySelector] API base URL: {}", config.base_url());
                Gateways::from_parts(
                    mode,
                    Arc::new(RemotePointsGateway::from_config(config)),
                    Arc::new(RemoteAuthGateway::from_config(config)),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petmap_core::auth::SessionCredentials;

    fn mock_config() -> ClientConfig {
        ClientConfig {
            mock_api: true,
            mock_latency_ms: 0,
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_remote_mode_by_default() {
        let gateways = GatewaySelector::select(&ClientConfig::default());
        assert_eq!(gateways.mode(), GatewayMode::Remote);
    }

    #[tokio::test]
    async fn test_mock_mode_serves_fixtures() {
        let gateways = GatewaySelector::select(&mock_config());
        assert_eq!(gateways.mode(), GatewayMode::Mock);

        let points = gateways
            .points()
            .fetch_points(&SessionCredentials::anonymous())
            .await
            .unwrap();
        assert_eq!(points.len(), 2);
    }

    #[tokio::test]
    async fn test_injected_repository_is_used() {
        let repository = InMemoryPointRepository::new();
        let gateways = GatewaySelector::select_with_repository(&mock_config(), repository.clone());

        let points = gateways
            .points()
            .fetch_points(&SessionCredentials::anonymous())
            .await
            .unwrap();
        assert!(points.is_empty());
        assert!(repository.is_empty().await);
    }
}
