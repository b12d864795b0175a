//! HTTP API handlers for salon-api

pub mod appointments;
pub mod clients;
pub mod health;

pub use appointments::appointment_routes;
pub use clients::client_routes;
pub use health::health_routes;
