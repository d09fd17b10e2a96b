//! Core module - configuration, state and the HTTP server
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared service references
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_router};
pub use state::ServerState;
