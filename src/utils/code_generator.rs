//! Short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 7;

/// Generates a random short code.
///
/// Draws [`CODE_LENGTH`] characters from `[A-Za-z0-9]` using the thread-local
/// CSPRNG (ChaCha, seeded from the OS), giving 62^7 possible codes.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
