//! Short code generation.

use rand::Rng;
use rand::distr::{Alphanumeric, Distribution};

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 7;

/// Generates a random short code.
///
/// Each of the [`CODE_LENGTH`] characters is drawn uniformly from
/// `[a-zA-Z0-9]`, giving 62^7 possible codes.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a short code from the supplied random source.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(Alphanumeric.sample(rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(
                code.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..2000 {
            seen.extend(generate_code_with(&mut rng).chars());
        }

        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_generate_code_with_seed_is_deterministic() {
        let a = generate_code_with(&mut StdRng::seed_from_u64(42));
        let b = generate_code_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
