//! Application layer for PetMap.
//!
//! This crate wires the configured gateways together and provides the use
//! cases the UI calls: loading and creating map points, and signing in/out.

pub mod auth_usecase;
pub mod gateway_selector;
pub mod map_usecase;

pub use auth_usecase::AuthUseCase;
pub use gateway_selector::{GatewaySelector, Gateways};
pub use map_usecase::{MapUseCase, PointService};
