//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, code generation and repository calls and
//! expose a small API to the HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Shorten, resolve and redirect
pub mod services;
