//! Short code generation.
//!
//! Codes are cut from the textual form of a random v4 UUID. Uniqueness is
//! probabilistic only: nothing here checks a generated code against the store.

use uuid::Uuid;

/// Number of leading characters of the hyphenated UUID kept as the code.
pub const CODE_LENGTH: usize = 12;

/// Generates a new short code.
///
/// The code is the first [`CODE_LENGTH`] characters of a random UUID in its
/// canonical lowercase hyphenated form, so it always looks like
/// `xxxxxxxx-xxx` with hexadecimal `x`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 12);
/// assert_eq!(code.as_bytes()[8], b'-');
/// ```
pub fn generate_code() -> String {
    let mut code = Uuid::new_v4().hyphenated().to_string();
    code.truncate(CODE_LENGTH);
    code
}
