//! Perfect-square detection for the running sum of squares.
//!
//! Two strategies, chosen by the odometer's carry flag. After a carry the sum
//! of squares jumps, so the root is re-located by binary search between the
//! largest entry (its square is one term of the sum) and the sum of all
//! entries (whose square dominates the sum for non-negative terms). Without a
//! carry only the lowest entry moved, the sum grew by a small amount, and the
//! previous root is stepped forward until its square catches up.
//!
//! u64 values, u128 intermediates: interior binary-search guesses square the
//! midpoint, which can exceed the sum itself before the window narrows.

fn square(x: u64) -> u128 {
    x as u128 * x as u128
}

/// Integer-square-root state carried across odometer steps.
///
/// `a10` is kept equal to `a1 * a1` whenever it is read. Both only move
/// forward: the enumeration never shrinks its sum of squares between carries,
/// so the stepping path amortizes to O(1) per tuple over the whole run.
#[derive(Debug)]
pub struct RootResolver {
    a1: u64,
    a10: u128,
}

impl RootResolver {
    pub fn new() -> Self {
        RootResolver { a1: 0, a10: 0 }
    }

    /// Decide whether `a2` is a perfect square and return its root if so.
    ///
    /// `nums` is the current tuple (non-decreasing), `a2` its sum of squares,
    /// `carried` the flag from the last odometer advance. A `None` is the
    /// common case, not a failure.
    pub fn resolve(&mut self, nums: &[u64], a2: u64, carried: bool) -> Option<u64> {
        if carried {
            self.resolve_carry(nums, a2)
        } else {
            self.resolve_step(a2)
        }
    }

    /// Binary search between the largest entry and the sum of entries.
    ///
    /// `low` starts at `nums[last]` and `high` at the entry sum; the search
    /// ends on an exact hit or when the window has no interior integer left.
    /// On a miss the final candidate equals `low`, whose square is below
    /// `a2`, so the stored state remains a valid floor for the stepping path.
    fn resolve_carry(&mut self, nums: &[u64], a2: u64) -> Option<u64> {
        let target = a2 as u128;
        let mut low = nums[nums.len() - 1];
        let mut high: u64 = nums.iter().sum();
        let mut candidate;
        loop {
            candidate = (low + high) >> 1;
            let guess = square(candidate);
            if guess == target || high - low < 2 {
                break;
            }
            if guess > target {
                high = candidate;
            } else {
                low = candidate;
            }
        }
        self.a1 = candidate;
        self.a10 = square(candidate);
        if self.a10 == target {
            Some(self.a1)
        } else {
            None
        }
    }

    /// Step the previous root forward until its square reaches `a2`.
    fn resolve_step(&mut self, a2: u64) -> Option<u64> {
        let target = a2 as u128;
        while self.a10 < target {
            self.a1 += 1;
            self.a10 = square(self.a1);
        }
        if self.a10 == target {
            Some(self.a1)
        } else {
            None
        }
    }
}

impl Default for RootResolver {
    fn default() -> Self {
        Self::new()
    }
}
