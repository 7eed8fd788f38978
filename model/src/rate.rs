use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A chance of success in percent, always within `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SuccessRate(f64);

impl SuccessRate {
    pub const ZERO: SuccessRate = SuccessRate(0.0);
    pub const CERTAIN: SuccessRate = SuccessRate(100.0);

    pub const fn new(percent: f64) -> Option<SuccessRate> {
        if percent.is_nan() || percent > 100.0 || percent < 0.0 {
            return None;
        }

        Some(SuccessRate(percent))
    }

    /// The rate of `successes` among `outcomes` equally likely outcomes. Equal ratios always map to
    /// the same rate, since both operands are exact integers and the division is correctly rounded.
    pub fn from_counts(successes: u64, outcomes: u64) -> SuccessRate {
        debug_assert!(successes <= outcomes);

        if outcomes == 0 {
            return SuccessRate::ZERO;
        }

        SuccessRate((100 * successes) as f64 / outcomes as f64)
    }

    /// Clamps accumulated floating point error back into the legal range.
    pub fn saturating_new(percent: f64) -> SuccessRate {
        if percent.is_nan() {
            SuccessRate::ZERO
        }
        else {
            SuccessRate(percent.clamp(0.0, 100.0))
        }
    }

    pub fn is_certain(self) -> bool {
        self.0 >= 100.0
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl Eq for SuccessRate {}

impl Ord for SuccessRate {
    fn cmp(&self, other: &SuccessRate) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SuccessRate {
    fn partial_cmp(&self, other: &SuccessRate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for SuccessRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}%", precision, self.0),
            None => write!(f, "{}%", self.0),
        }
    }
}
