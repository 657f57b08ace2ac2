//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Drives random color generation. The same seed always produces the same
//! colors on every platform, which keeps `random --seed` reproducible.

/// Xorshift64 deterministic PRNG with the standard (13, 7, 17) shifts.
///
/// A seed of 0 is replaced with a non-zero fallback, since all-zeros is a
/// fixed point of the algorithm.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Seeds from the system clock, for interactive "Random" actions.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos)
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
