#![warn(missing_docs)]

//! Leadline HTTP API
//!
//! RESTful endpoints for the marketing site backend: contact-form relay,
//! Google business-profile proxy, and health reporting. Every external
//! integration is optional; missing credentials degrade individual
//! endpoints instead of failing startup.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use server::ApiServer;
pub use state::AppState;
