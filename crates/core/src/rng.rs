//! RNG module - seeded linear congruential generator
//!
//! The generator is a pure function of its seed: `seed' = (A * seed + C) mod M`
//! with `M = 2^31`, `A = 123123`, `C = 12345`. Nothing is retained outside the
//! seed value, so any holder of a seed can replay the exact same sequence.
//!
//! `next_int(seed, lo, hi)` scales the successor seed into `[lo, hi)` as
//! `floor(lo + (seed' / M) * (hi - lo))`. Because `M` is a power of two the
//! scaling is done exactly in integer arithmetic.

/// Modulus (2^31)
pub const LCG_MODULUS: u64 = 1 << 31;

/// Multiplier
pub const LCG_MULTIPLIER: u64 = 123_123;

/// Increment
pub const LCG_INCREMENT: u64 = 12_345;

/// Advance a seed by one step, returning the successor seed.
///
/// The successor is also the raw random value of the step.
pub fn next(seed: u32) -> (u32, u32) {
    let succ = (LCG_MULTIPLIER * (seed as u64 % LCG_MODULUS) + LCG_INCREMENT) % LCG_MODULUS;
    // succ < 2^31, always fits
    let succ = succ as u32;
    (succ, succ)
}

/// Advance a seed and derive an integer in `[lo, hi)`.
///
/// If `hi <= lo` the range is empty and `lo` is returned (the seed still advances).
pub fn next_int(seed: u32, lo: i32, hi: i32) -> (u32, i32) {
    let (succ, _) = next(seed);
    if hi <= lo {
        return (succ, lo);
    }
    let span = (hi as i64 - lo as i64) as u64;
    let scaled = (succ as u64 * span) >> 31;
    (succ, (lo as i64 + scaled as i64) as i32)
}

/// Seed holder with a method-style API over [`next`] / [`next_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    /// Create a generator. The seed is reduced modulo 2^31.
    pub fn new(seed: u32) -> Self {
        Self {
            seed: (seed as u64 % LCG_MODULUS) as u32,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Next raw value; the generator moves to the successor seed.
    pub fn next_u32(&mut self) -> u32 {
        let (succ, value) = next(self.seed);
        self.seed = succ;
        value
    }

    /// Next integer in `[lo, hi)`.
    pub fn next_int(&mut self, lo: i32, hi: i32) -> i32 {
        let (succ, value) = next_int(self.seed, lo, hi);
        self.seed = succ;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_sequence() {
        // Reference values for seed 47583, shared with other implementations.
        let (s1, v1) = next_int(47583, 0, 7);
        assert_eq!(s1, 1_563_606_758);
        assert_eq!(v1, 5);

        let (s2, v2) = next_int(s1, 0, 7);
        assert_eq!(s2, 488_285_323);
        assert_eq!(v2, 1);
    }

    #[test]
    fn test_next_from_one() {
        assert_eq!(next(1), (135_468, 135_468));
    }

    #[test]
    fn test_deterministic() {
        let mut a = Lcg::new(12345);
        let mut b = Lcg::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_values_stay_below_modulus() {
        let mut rng = Lcg::new(u32::MAX);
        assert!((rng.seed() as u64) < LCG_MODULUS);
        for _ in 0..1000 {
            assert!((rng.next_u32() as u64) < LCG_MODULUS);
        }
    }

    #[test]
    fn test_next_int_range() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            let v = rng.next_int(-3, 4);
            assert!((-3..4).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_next_int_empty_range_returns_lo() {
        let (succ, v) = next_int(99, 5, 5);
        assert_eq!(v, 5);
        assert_eq!(succ, next(99).0);
    }

    #[test]
    fn test_lcg_matches_free_functions() {
        let mut rng = Lcg::new(47583);
        assert_eq!(rng.next_int(0, 7), 5);
        assert_eq!(rng.seed(), 1_563_606_758);
    }
}
