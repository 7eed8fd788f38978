use crate::budget::Tokens;
use crate::face::PowerTotal;
use crate::outcome::OutcomeDistribution;
use crate::rate::SuccessRate;

/// The condition a pool has to meet: reach `threshold` power after spending `tokens`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PowerCheck {
    pub threshold: u32,
    pub tokens: Tokens,
}

impl PowerCheck {
    pub const fn new(threshold: u32, tokens: Tokens) -> PowerCheck {
        PowerCheck { threshold, tokens }
    }

    pub fn is_met_by(&self, total: PowerTotal) -> bool {
        total.effective_power(self.tokens) >= self.threshold
    }

    // Nothing to roll: fine as long as there is nothing to overcome.
    fn rate_without_outcomes(&self) -> SuccessRate {
        if self.threshold > 0 {
            SuccessRate::ZERO
        }
        else {
            SuccessRate::CERTAIN
        }
    }
}

/// The percentage of `totals` which meet the check.
pub fn success_rate(check: &PowerCheck, totals: &[PowerTotal]) -> SuccessRate {
    if totals.is_empty() {
        return check.rate_without_outcomes();
    }

    let successes = totals.iter().filter(|&&total| check.is_met_by(total)).count();

    SuccessRate::from_counts(successes as u64, totals.len() as u64)
}

/// Same as [success_rate] for the totals listed by the distribution.
pub fn success_rate_of_distribution(
    check: &PowerCheck,
    distribution: &OutcomeDistribution,
) -> SuccessRate {
    if distribution.outcome_count() == 0 {
        return check.rate_without_outcomes();
    }

    let successes = distribution.count_where(|total| check.is_met_by(total));

    SuccessRate::from_counts(successes, distribution.outcome_count())
}

/// The mean power of `totals` after spending `tokens`, or `None` if there are no totals.
pub fn average_power(totals: &[PowerTotal], tokens: Tokens) -> Option<f64> {
    if totals.is_empty() {
        return None;
    }

    let power_sum = totals
        .iter()
        .map(|&total| total.effective_power(tokens) as u64)
        .sum::<u64>();

    Some(power_sum as f64 / totals.len() as f64)
}
