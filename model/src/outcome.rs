use std::collections::HashMap;

use crate::face::{Face, PowerTotal};

/// Lists the totals of all joint outcomes of the given dice, one entry per combination of faces.
/// Each element of `face_sets` holds the faces one die may show: a single face if it is fixed, the
/// full face table if it is rolled. The result has `∏ |face_sets[i]|` entries in a deterministic
/// order, where the faces of later dice vary slowest.
pub fn combine_outcomes<S: AsRef<[Face]>>(face_sets: &[S]) -> Vec<PowerTotal> {
    let mut outcomes = vec![PowerTotal::ZERO];

    for face_set in face_sets {
        let next_outcomes = face_set
            .as_ref()
            .iter()
            .flat_map(|&face| outcomes.iter().map(move |&prior| prior + face))
            .collect();

        outcomes = next_outcomes;
    }

    outcomes
}

/// The same multiset of totals [combine_outcomes] produces, stored as multiplicities. Equal totals
/// are merged while folding in dice, so the size stays bounded by the number of distinct totals
/// instead of growing exponentially with the number of rolled dice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutcomeDistribution {
    counts: HashMap<PowerTotal, u64>,
    outcome_count: u64,
}

impl OutcomeDistribution {

    /// The distribution of zero dice: a single outcome with total zero.
    pub fn new() -> OutcomeDistribution {
        OutcomeDistribution {
            counts: [(PowerTotal::ZERO, 1)].into(),
            outcome_count: 1,
        }
    }

    pub fn from_face_sets<S: AsRef<[Face]>>(face_sets: &[S]) -> OutcomeDistribution {
        let mut distribution = OutcomeDistribution::new();

        for face_set in face_sets {
            distribution.add_die(face_set.as_ref());
        }

        distribution
    }

    pub fn from_totals(totals: impl IntoIterator<Item = PowerTotal>) -> OutcomeDistribution {
        let mut counts = HashMap::new();
        let mut outcome_count = 0;

        for total in totals {
            *counts.entry(total).or_insert(0) += 1;
            outcome_count += 1;
        }

        OutcomeDistribution {
            counts,
            outcome_count,
        }
    }

    /// Adds a die which shows each of the given faces with equal probability.
    pub fn add_die(&mut self, faces: &[Face]) {
        let mut counts = HashMap::with_capacity(self.counts.len() * faces.len());

        for (&prior, &count) in &self.counts {
            for &face in faces {
                *counts.entry(prior + face).or_insert(0) += count;
            }
        }

        self.counts = counts;
        self.outcome_count *= faces.len() as u64;
    }

    /// The number of equally likely joint outcomes, counting duplicates.
    pub fn outcome_count(&self) -> u64 {
        self.outcome_count
    }

    pub fn totals(&self) -> impl Iterator<Item = (PowerTotal, u64)> + use<'_> {
        self.counts.iter().map(|(&total, &count)| (total, count))
    }

    pub fn count_where(&self, mut predicate: impl FnMut(PowerTotal) -> bool) -> u64 {
        self.totals()
            .filter(|&(total, _)| predicate(total))
            .map(|(_, count)| count)
            .sum()
    }
}

impl Default for OutcomeDistribution {
    fn default() -> OutcomeDistribution {
        OutcomeDistribution::new()
    }
}
