//! Efficiency ranking over diagnosed runs.
//!
//! Converged runs are ordered by iteration count (fewest first, ties keep
//! input order). Diverged runs are not ranked; they are kept apart in
//! input order.

use std::time::Duration;

use super::diagnostics::Diagnosis;


/// One labelled run to rank.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub label     : String,
    pub diagnosis : Diagnosis,
    pub elapsed   : Option<Duration>,
}

impl RankingEntry {
    pub fn new(label: impl Into<String>, diagnosis: Diagnosis) -> Self {
        Self { label: label.into(), diagnosis, elapsed: None }
    }

    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    pub fn iterations(&self) -> usize {
        self.diagnosis.iterations
    }
}


#[derive(Debug, Clone, Default)]
pub struct Ranking {
    converged: Vec<RankingEntry>,
    diverged:  Vec<RankingEntry>,
}

impl Ranking {
    pub fn new(entries: impl IntoIterator<Item = RankingEntry>) -> Self {
        let (mut converged, diverged): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|e| e.diagnosis.is_converged());

        // stable
        converged.sort_by_key(RankingEntry::iterations);

        Self { converged, diverged }
    }

    /// Converged entries, best first.
    pub fn converged(&self) -> &[RankingEntry] { &self.converged }

    /// Diverged entries in input order.
    pub fn diverged(&self) -> &[RankingEntry] { &self.diverged }

    pub fn best(&self) -> Option<&RankingEntry> {
        self.converged.first()
    }

    /// Converged entries with their 1-based position.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &RankingEntry)> + '_ {
        self.converged.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn is_empty(&self) -> bool {
        self.converged.is_empty() && self.diverged.is_empty()
    }
}
