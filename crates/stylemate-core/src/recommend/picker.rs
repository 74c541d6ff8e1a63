//! Random source used for slot selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index uniformly from `0..len`.
///
/// Callers never pass `len == 0`.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

/// [`Picker`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Picker seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible picker: the same seed yields the same picks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let mut a = RngPicker::seeded(7);
        let mut b = RngPicker::seeded(7);
        let left: Vec<usize> = (0..32).map(|_| a.pick(5)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.pick(5)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_picks_stay_in_range() {
        let mut picker = RngPicker::from_entropy();
        for len in 1..20 {
            assert!(picker.pick(len) < len);
        }
        assert_eq!(picker.pick(1), 0);
    }
}
