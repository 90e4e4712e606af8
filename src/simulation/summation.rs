//! Compensated (Kahan) summation for 2D vectors
//!
//! Plain sequential `+=` loses the low bits of every small term once the
//! running total is large. `KahanSum2` carries the lost part in `c` and feeds
//! it back into the next addition.

use super::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KahanSum2 {
    sum: NVec2, // running total
    c: NVec2, // compensation for lost low-order bits
}

impl Default for KahanSum2 {
    fn default() -> Self {
        Self::new()
    }
}

impl KahanSum2 {
    pub fn new() -> Self {
        Self {
            sum: NVec2::zeros(),
            c: NVec2::zeros(),
        }
    }

    /// Sum a short fixed sequence of terms, e.g. `[v, a * dt]`
    pub fn from_terms<I>(terms: I) -> NVec2
    where
        I: IntoIterator<Item = NVec2>,
    {
        let mut acc = Self::new();
        for term in terms {
            acc.add(term);
        }
        acc.sum()
    }

    /// Add one term
    pub fn add(&mut self, value: NVec2) {
        let y = value - self.c;
        let t = self.sum + y;
        // (t - sum) is what actually got added; subtracting y leaves the rounding error
        self.c = (t - self.sum) - y;
        self.sum = t;
    }

    pub fn sum(&self) -> NVec2 {
        self.sum
    }
}
