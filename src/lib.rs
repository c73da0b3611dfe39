//! Redlink - a URL shortener with password-guarded links
//!
//! This library provides the core functionality for the Redlink service:
//! short-identifier allocation, the link registry with credential guards,
//! visit counting, and the HTTP surface.
//!
//! # Architecture
//! - `storage`: storage backends and data access
//! - `services`: identifier generation and link registry business logic
//! - `api`: HTTP services (link CRUD + redirect)
//! - `config`: configuration management
//! - `system`: logging and system utilities

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
