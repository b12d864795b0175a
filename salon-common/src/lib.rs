//! # Salon Common Library
//!
//! Shared code for the salon API server and the reporting tool:
//! - Configuration loading (TOML, environment, command line)
//! - Database initialization and sample data
//! - Client and appointment models and queries
//! - Common error type

pub mod config;
pub mod db;
pub mod error;

pub use db::models::{Appointment, Client};
pub use error::{Error, Result};
