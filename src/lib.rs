//! Square-sum tuple search.
//!
//! Exhaustive sweep over every non-decreasing tuple of a fixed length with
//! entries in [0, max_entry], reporting each tuple whose sum of squares is a
//! perfect square together with the integer root — a generalization of
//! Pythagorean n-tuples. One sequential pass, no allocation in the hot loop:
//! the odometer mutates a single buffer and the resolver carries its previous
//! root between steps.

pub mod odometer;
pub mod root;

use num_integer::Roots;
use serde::Serialize;
use std::fmt;

use crate::odometer::{suffix_square_sum, Odometer, Step};
use crate::root::RootResolver;

/// Bounds of one run, fixed for its duration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchConfig {
    /// Inclusive upper bound for each tuple entry.
    pub max_entry: u64,
    /// Number of entries per tuple.
    pub tuple_len: usize,
}

/// Rejected configurations. The core assumes a validated config; callers
/// check before driving the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero-length tuple has nothing to sum.
    EmptyTuple,
    /// `tuple_len * max_entry^2` exceeds u64, so the running sum of squares
    /// could wrap mid-sweep.
    SumOverflow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyTuple => write!(f, "tuple length must be positive"),
            ConfigError::SumOverflow => {
                write!(f, "tuple_len * max_entry^2 must fit in 64 bits")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SearchConfig {
    /// Check the driver-side preconditions: a positive tuple length and a
    /// worst-case sum of squares that fits u64.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tuple_len == 0 {
            return Err(ConfigError::EmptyTuple);
        }
        let worst = self.tuple_len as u128 * (self.max_entry as u128 * self.max_entry as u128);
        if worst > u64::MAX as u128 {
            return Err(ConfigError::SumOverflow);
        }
        Ok(())
    }
}

/// A tuple whose sum of squares is a perfect square, with its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub entries: Vec<u64>,
    pub root: u64,
}

impl fmt::Display for Match {
    /// `(e0,e1,...,en-1): root`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "): {}", self.root)
    }
}

/// Counters from one full sweep.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SearchStats {
    pub tuples_visited: u64,
    pub matches: u64,
}

/// Run the full sweep, invoking `sink` once per match.
///
/// Evaluates the current tuple, then advances, stopping once the last entry
/// carries past `max_entry`. The all-zero tuple is evaluated first, before
/// any advance, and reports root 0. The config must already be validated.
pub fn search<F: FnMut(&Match)>(config: &SearchConfig, mut sink: F) -> SearchStats {
    let mut od = Odometer::new(config.tuple_len, config.max_entry);
    let mut resolver = RootResolver::new();
    let mut stats = SearchStats::default();

    // The initial all-zero tuple counts as a no-carry step from nothing.
    let mut step = Step {
        stop: 0,
        carried: false,
    };

    loop {
        let a2 = suffix_square_sum(od.entries(), step.stop);
        stats.tuples_visited += 1;

        if let Some(root) = resolver.resolve(od.entries(), a2, step.carried) {
            debug_assert_eq!(root, a2.sqrt());
            stats.matches += 1;
            let m = Match {
                entries: od.entries().to_vec(),
                root,
            };
            sink(&m);
        }

        step = od.advance();
        if od.exhausted() {
            break;
        }
    }

    stats
}

/// Sweep and collect every match. Convenience for tests and report writers;
/// long sweeps should prefer `search` with a streaming sink.
pub fn collect_matches(config: &SearchConfig) -> Vec<Match> {
    let mut found = Vec::new();
    search(config, |m| found.push(m.clone()));
    found
}
