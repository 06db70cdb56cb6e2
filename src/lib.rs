pub mod api;
pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
