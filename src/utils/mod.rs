//! Helper functions shared across the application:
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Syntax check for URLs submitted for shortening
//! - [`short_url`] - Short URL composition and code extraction
//! - [`redirect_target`] - `Location` header construction for redirects

pub mod code_generator;
pub mod redirect_target;
pub mod short_url;
pub mod url_validator;
