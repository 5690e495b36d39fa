//! Non-decreasing tuple enumeration.
//!
//! The odometer walks every non-decreasing tuple of a fixed length with
//! entries in [0, max_entry], each exactly once. It increments like a
//! mixed-radix counter, except the "radix" at each position is the current
//! value of the next position: carrying into position i+1 happens exactly
//! when incrementing position i would break `nums[i] <= nums[i+1]`.

/// Outcome of one odometer advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Lowest index that was not reset to zero. Every entry below it is zero,
    /// so a square-sum recomputation can start here.
    pub stop: usize,
    /// True iff the increment propagated past index 0.
    pub carried: bool,
}

/// Counter over non-decreasing tuples. Owns its buffer; sized once, mutated
/// in place for the whole run.
#[derive(Debug)]
pub struct Odometer {
    nums: Vec<u64>,
    max_entry: u64,
}

impl Odometer {
    /// Start at the all-zero tuple. `tuple_len` must be positive
    /// (see `SearchConfig::validate`).
    pub fn new(tuple_len: usize, max_entry: u64) -> Self {
        assert!(tuple_len > 0, "tuple length must be positive");
        Odometer {
            nums: vec![0; tuple_len],
            max_entry,
        }
    }

    /// The current tuple, always non-decreasing.
    pub fn entries(&self) -> &[u64] {
        &self.nums
    }

    /// Advance to the next non-decreasing tuple.
    ///
    /// Increments position 0; while the incremented position exceeds its
    /// successor, resets it to zero and carries into the next position. Stops
    /// at the first position whose new value keeps the tuple non-decreasing,
    /// or at the last position.
    pub fn advance(&mut self) -> Step {
        let last = self.nums.len() - 1;
        let mut carried = false;
        let mut stop = last;
        for i in 0..=last {
            self.nums[i] += 1;
            if i != last && self.nums[i] > self.nums[i + 1] {
                self.nums[i] = 0;
                carried = true;
                continue;
            }
            stop = i;
            break;
        }
        Step { stop, carried }
    }

    /// True once the last entry has carried past `max_entry`; the tuple is no
    /// longer in range and the sweep is over.
    pub fn exhausted(&self) -> bool {
        self.nums[self.nums.len() - 1] > self.max_entry
    }
}

/// Sum of squares over the suffix `nums[stop..]`.
///
/// After a carry every entry below `stop` is zero and contributes nothing, so
/// this fresh partial sum equals the full sum of squares of the tuple.
/// Precondition (caller-checked at config time): `tuple_len * max_entry^2`
/// fits in u64.
pub fn suffix_square_sum(nums: &[u64], stop: usize) -> u64 {
    nums[stop..].iter().map(|&v| v * v).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn visit_all(tuple_len: usize, max_entry: u64) -> Vec<Vec<u64>> {
        let mut od = Odometer::new(tuple_len, max_entry);
        let mut seen = Vec::new();
        loop {
            seen.push(od.entries().to_vec());
            od.advance();
            if od.exhausted() {
                break;
            }
        }
        seen
    }

    /// C(n, k) for small arguments.
    fn binomial(n: u64, k: u64) -> u64 {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_pair_enumeration_order() {
        let seen = visit_all(2, 2);
        let expected: Vec<Vec<u64>> = vec![
            vec![0, 0],
            vec![0, 1],
            vec![1, 1],
            vec![0, 2],
            vec![1, 2],
            vec![2, 2],
        ];
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_every_tuple_once() {
        let seen = visit_all(3, 4);
        // Number of non-decreasing length-3 tuples over [0,4] is C(7,3)
        assert_eq!(seen.len() as u64, binomial(7, 3));
        let unique: HashSet<Vec<u64>> = seen.iter().cloned().collect();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn test_invariants_hold_throughout() {
        for tuple in visit_all(4, 3) {
            for pair in tuple.windows(2) {
                assert!(pair[0] <= pair[1], "not non-decreasing: {:?}", tuple);
            }
            assert!(tuple.iter().all(|&v| v <= 3));
        }
    }

    #[test]
    fn test_step_reports_carry_boundary() {
        let mut od = Odometer::new(2, 5);
        // (0,0) -> (0,1): index 0 resets, propagation stops at index 1
        let step = od.advance();
        assert_eq!(step, Step { stop: 1, carried: true });
        assert_eq!(od.entries(), &[0, 1]);
        // (0,1) -> (1,1): index 0 absorbs the increment
        let step = od.advance();
        assert_eq!(step, Step { stop: 0, carried: false });
        assert_eq!(od.entries(), &[1, 1]);
    }

    #[test]
    fn test_single_entry_never_carries() {
        let mut od = Odometer::new(1, 3);
        for expected in 1..=4u64 {
            let step = od.advance();
            assert_eq!(step, Step { stop: 0, carried: false });
            assert_eq!(od.entries(), &[expected]);
        }
        assert!(od.exhausted());
    }

    #[test]
    fn test_suffix_square_sum() {
        assert_eq!(suffix_square_sum(&[0, 0, 3, 4], 2), 25);
        assert_eq!(suffix_square_sum(&[1, 2, 3], 0), 14);
        assert_eq!(suffix_square_sum(&[0, 0, 0], 0), 0);
        assert_eq!(suffix_square_sum(&[5], 0), 25);
    }
}
