//! HTTP surface for the gallery service

pub mod handlers;
pub mod server;
pub mod server_config;
pub mod types;
