//! Database models and queries

pub mod appointments;
pub mod clients;
pub mod init;
pub mod models;
pub mod seed;

pub use init::{begin_write, connect_readonly, create_schema, drop_schema, init_database};
pub use models::*;
