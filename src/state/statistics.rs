// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the context itself as the search assigns and undoes colors.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, Display, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Colors considered for a region.
    ColorAttempts,
    /// Colors rejected because a neighbor already holds them.
    Conflicts,
    /// Colors assigned.
    Assignments,
    /// Assignments undone on backtrack.
    Backtracks,
    /// Complete colorings reached.
    Solutions,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext<'_>) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Counters::iter()
            .map(|counter| format!("{}={}", counter, self.get(counter)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

struct CountingPredicate {
    filter: fn(&SearchContext<'_>) -> bool,
    counter: Counters,
}

impl fmt::Debug for CountingPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingPredicate")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
