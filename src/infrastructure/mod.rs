//! Infrastructure layer.
//!
//! Implements the storage interfaces defined by the domain layer.
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
