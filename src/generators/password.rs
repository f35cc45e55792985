// src/generators/password.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use thiserror::Error;

use crate::models::GenerationOptions;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("password length must be between {min} and {max} characters")]
    LengthOutOfRange { min: usize, max: usize },

    #[error("at least one character class must be enabled")]
    NoClassesEnabled,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Uniform random source. Injected into generation so tests can
/// substitute a seeded generator for the OS CSPRNG.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `[0, bound)`.
    /// `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Default cryptographically secure RNG.
fn csprng() -> impl CryptoRng + Rng {
    OsRng
}

// Check options coming from an untrusted surface before generating.
// The algorithm itself accepts any length; these bounds belong to the
// CLI contract.
pub fn validate_options(
    options: &GenerationOptions,
    min_length: usize,
    max_length: usize,
) -> Result<()> {
    if options.enabled_classes().is_empty() {
        return Err(GeneratorError::NoClassesEnabled);
    }

    if options.length < min_length || options.length > max_length {
        return Err(GeneratorError::LengthOutOfRange {
            min: min_length,
            max: max_length,
        });
    }

    Ok(())
}

/// Generate a password from the OS CSPRNG.
pub fn generate(options: &GenerationOptions) -> String {
    let mut rng = csprng();
    generate_with(options, &mut rng)
}

/// Generate a password, drawing every random choice from `rng`.
///
/// Returns the empty string when no character class is enabled. When at
/// least one class is enabled and `length` is no smaller than the number
/// of enabled classes, the result contains at least one character from
/// every enabled class.
pub fn generate_with<R: RandomSource>(options: &GenerationOptions, rng: &mut R) -> String {
    let classes = options.enabled_classes();
    if classes.is_empty() {
        return String::new();
    }

    // One guaranteed pick per enabled class, plus the combined alphabet
    // for the random fill.
    let mut alphabet: Vec<u8> = Vec::new();
    let mut password: Vec<u8> = Vec::with_capacity(options.length);
    for class in &classes {
        let chars = class.alphabet();
        alphabet.extend_from_slice(chars);
        password.push(chars[rng.next_index(chars.len())]);
    }

    // One pick per class cannot fit when the requested length is shorter
    // than the number of enabled classes; keep the first `length` picks
    // in class declaration order.
    password.truncate(options.length);

    while password.len() < options.length {
        password.push(alphabet[rng.next_index(alphabet.len())]);
    }

    // Fisher-Yates shuffle so the guaranteed picks do not cluster at the
    // front of the password.
    for i in (1..password.len()).rev() {
        let j = rng.next_index(i + 1);
        password.swap(i, j);
    }

    password.into_iter().map(char::from).collect()
}

/// Password generator backed by the OS CSPRNG, held by the CLI.
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, options: &GenerationOptions) -> String {
        generate(options)
    }

    pub fn analyze_strength(&self, password: &str) -> u8 {
        super::strength::analyze_password_strength(password)
    }
}
