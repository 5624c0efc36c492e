pub mod config_service;
pub mod image_loader;
pub mod in_memory_point_repository;
pub mod mock_auth_gateway;
pub mod mock_points_gateway;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::image_loader::load_image_attachment;
pub use crate::in_memory_point_repository::InMemoryPointRepository;
pub use crate::mock_auth_gateway::MockAuthGateway;
pub use crate::mock_points_gateway::MockPointsGateway;
