//! Explicit memoization of ranking results
//!
//! Every input to a ranking pass is an immutable snapshot, so results can
//! be reused for as long as the caller knows the snapshots have not
//! changed. The cache is plain owned state: the caller decides where it
//! lives and when it is invalidated.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use faceoff_core::{Candidate, TeamProfile};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::rank::{self, AvailabilityFilter, RankedResult};

/// Cache of ranking passes keyed by a fingerprint of their inputs
#[derive(Debug, Default)]
pub struct RankCache {
    entries: HashMap<u64, Arc<Vec<RankedResult>>>,
}

impl RankCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of one ranking request. Set-typed filter fields are
    /// folded in sorted order so their iteration order cannot change the
    /// key.
    pub fn fingerprint(
        team: &TeamProfile,
        roster: &[Candidate],
        filter: Option<&AvailabilityFilter>,
        top_n: usize,
        config: &ScoringConfig,
    ) -> u64 {
        let mut hasher = DefaultHasher::new();
        team.hash(&mut hasher);
        roster.hash(&mut hasher);
        match filter {
            Some(filter) => {
                true.hash(&mut hasher);
                hash_sorted(&mut hasher, filter.candidates.as_ref());
                hash_sorted(&mut hasher, filter.machine_moves.as_ref());
            }
            None => false.hash(&mut hasher),
        }
        top_n.hash(&mut hasher);
        config.hash(&mut hasher);
        hasher.finish()
    }

    /// Return the cached ranking for these inputs, computing and storing
    /// it on a miss.
    pub fn get_or_rank(
        &mut self,
        team: &TeamProfile,
        roster: &[Candidate],
        filter: Option<&AvailabilityFilter>,
        top_n: usize,
        config: &ScoringConfig,
    ) -> Arc<Vec<RankedResult>> {
        let key = Self::fingerprint(team, roster, filter, top_n, config);
        if let Some(cached) = self.entries.get(&key) {
            debug!(key, "ranking cache hit");
            return Arc::clone(cached);
        }
        let results = Arc::new(rank::rank_roster(team, roster, filter, top_n, config));
        self.entries.insert(key, Arc::clone(&results));
        debug!(key, entries = self.entries.len(), "ranking cache miss");
        results
    }

    /// Drop every cached result. Call after the opposing team, the
    /// roster snapshot, or the availability filter changes upstream.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn hash_sorted<H: Hasher>(hasher: &mut H, set: Option<&std::collections::HashSet<String>>) {
    match set {
        Some(set) => {
            let mut items: Vec<&String> = set.iter().collect();
            items.sort();
            items.hash(hasher);
        }
        None => {
            false.hash(hasher);
        }
    }
}
