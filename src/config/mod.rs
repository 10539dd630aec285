//! Configuration modules for the Quizbank API.
//!
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables once at startup and carried in [`crate::state::AppState`].
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: Database connection pool settings and refresh policy
//! - [`jwt`]: JWT authentication configuration
//! - [`stats`]: External stats service endpoint configuration

pub mod cors;
pub mod database;
pub mod jwt;
pub mod stats;
