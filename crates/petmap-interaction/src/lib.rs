//! HTTP gateways talking to the PetMap backend.

pub mod api_error;
pub mod remote_auth_gateway;
pub mod remote_points_gateway;

pub use remote_auth_gateway::RemoteAuthGateway;
pub use remote_points_gateway::RemotePointsGateway;
