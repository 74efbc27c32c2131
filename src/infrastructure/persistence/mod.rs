//! Repository implementations.
//!
//! - [`InMemoryLinkRepository`] - Process-local link store

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
