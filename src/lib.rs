//! # memlink
//!
//! A minimal in-memory URL shortener built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the store contract
//! - **Application Layer** ([`application`]) - Shorten, resolve and redirect logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Behavior
//!
//! - Each distinct URL is shortened once; repeat requests get the same short URL
//! - Short codes are the first 12 characters of a random UUID
//! - Mappings live for the lifetime of the process and are never removed
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:9000/"
//! cargo run
//!
//! curl "localhost:9000/short?url=https://www.example.com"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
