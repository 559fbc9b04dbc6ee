use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DEFAULT_LENGTH, IdConfig};
use crate::format::{ALPHABET, verify_len};

/// Generate an identifier of the default length (16).
///
/// Uses the thread-local generator. Identifiers are random but not meant to be
/// unguessable; see [`generate_token`] for that.
#[must_use]
pub fn generate() -> String {
    generate_len(DEFAULT_LENGTH)
}

/// Generate an identifier of `length` characters. A length of 0 gives an empty string.
#[must_use]
pub fn generate_len(length: usize) -> String {
    generate_with_rng(&mut rand::rng(), length)
}

/// Generate an identifier of `length` characters drawn from `rng`.
///
/// Each character is picked independently and uniformly from the 62-symbol alphabet.
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    tracing::trace!(length, "generating identifier");
    (0..length)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

/// Generate an unguessable token of `length` characters over the identifier alphabet.
///
/// Draws from a `StdRng` freshly seeded by the operating system on every call.
/// Each character carries log2(62) ≈ 5.95 bits, so 22 characters exceed 128 bits.
#[must_use]
pub fn generate_token(length: usize) -> String {
    let mut rng = StdRng::from_os_rng();
    generate_with_rng(&mut rng, length)
}

/// Identifier generator bound to a fixed length.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    config: IdConfig,
}

impl IdGenerator {
    /// Create a new generator with the given config.
    #[must_use]
    pub const fn new(config: IdConfig) -> Self {
        Self { config }
    }

    /// Get the identifier length for this generator.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.config.length
    }

    /// Generate an identifier using the thread-local generator.
    #[must_use]
    pub fn generate(&self) -> String {
        generate_len(self.config.length)
    }

    /// Generate an identifier drawn from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        generate_with_rng(rng, self.config.length)
    }

    /// Returns true if `id` has this generator's length and only alphabet characters.
    #[must_use]
    pub fn verify(&self, id: &str) -> bool {
        verify_len(self.config.length, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::verify;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn all_in_alphabet(id: &str) -> bool {
        id.bytes().all(|b| ALPHABET.contains(&b))
    }

    // ========== Free functions ==========

    #[test]
    fn test_generate_default_length() {
        let id = generate();
        assert_eq!(id.len(), 16);
        assert!(all_in_alphabet(&id));
        assert!(verify(&id));
    }

    #[test]
    fn test_generate_len_zero_is_empty() {
        assert_eq!(generate_len(0), "");
        assert!(verify_len(0, &generate_len(0)));
    }

    #[test]
    fn test_generate_len_various() {
        for length in [1, 2, 8, 16, 32, 100] {
            let id = generate_len(length);
            assert_eq!(id.len(), length);
            assert!(all_in_alphabet(&id));
        }
    }

    #[test]
    fn test_generate_not_repeated() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_len(8)).collect();
        // 62^8 ≈ 2.2e14, so 1000 samples should never collide in practice
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_with_rng_deterministic() {
        let a = generate_with_rng(&mut StdRng::seed_from_u64(42), 20);
        let b = generate_with_rng(&mut StdRng::seed_from_u64(42), 20);
        let c = generate_with_rng(&mut StdRng::seed_from_u64(43), 20);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = generate_with_rng(&mut rng, 20_000);
        let seen: HashSet<u8> = sample.bytes().collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_generate_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let sample = generate_with_rng(&mut rng, 62_000);
        let mut counts = [0usize; 128];
        for b in sample.bytes() {
            counts[usize::from(b)] += 1;
        }
        // Expected 1000 per symbol; allow a generous band
        for &b in ALPHABET {
            let n = counts[usize::from(b)];
            assert!((700..1300).contains(&n), "{} seen {} times", b as char, n);
        }
    }

    #[test]
    fn test_generate_token_format() {
        let token = generate_token(32);
        assert_eq!(token.len(), 32);
        assert!(verify_len(32, &token));
        assert_ne!(generate_token(32), token);
    }

    // ========== IdGenerator ==========

    #[test]
    fn test_id_generator_default() {
        let generator = IdGenerator::default();
        assert_eq!(generator.length(), 16);
        let id = generator.generate();
        assert!(generator.verify(&id));
        assert!(verify(&id));
    }

    #[test]
    fn test_id_generator_custom_length() {
        let generator = IdGenerator::new(IdConfig::new().length(10));
        assert_eq!(generator.length(), 10);
        let id = generator.generate();
        assert_eq!(id.len(), 10);
        assert!(generator.verify(&id));
        assert!(!verify(&id));
    }

    #[test]
    fn test_id_generator_generate_with() {
        let generator = IdGenerator::new(IdConfig::new().length(12));
        let mut rng = StdRng::seed_from_u64(99);
        let id = generator.generate_with(&mut rng);
        assert_eq!(id, generate_with_rng(&mut StdRng::seed_from_u64(99), 12));
    }

    #[test]
    fn test_id_generator_across_threads() {
        let generator = IdGenerator::new(IdConfig::new().length(24));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(move || {
                    (0..50).map(|_| generator.generate()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(generator.verify(&id));
                all.insert(id);
            }
        }
        assert_eq!(all.len(), 200);
    }

    proptest! {
        #[test]
        fn prop_generate_len_exact_length(length in 0usize..200) {
            let id = generate_len(length);
            prop_assert_eq!(id.chars().count(), length);
            prop_assert!(all_in_alphabet(&id));
        }

        #[test]
        fn prop_generate_then_verify(length in 0usize..200, seed in any::<u64>()) {
            let id = generate_with_rng(&mut StdRng::seed_from_u64(seed), length);
            prop_assert!(verify_len(length, &id));
        }
    }
}
