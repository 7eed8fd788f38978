/// Tokens that turn conditional face values into power: breaks (or fire) for potentials and hope
/// for dots.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Tokens {
    pub breaks: u32,
    pub hope: u32,
}

impl Tokens {
    pub const fn new(breaks: u32, hope: u32) -> Tokens {
        Tokens { breaks, hope }
    }

    pub const fn breaks_only(breaks: u32) -> Tokens {
        Tokens { breaks, hope: 0 }
    }
}

/// The rerolls available to a player. Both kinds redraw a die from its full face table, a premium
/// reroll additionally converts one potential of the redrawn face into power.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RerollBudget {
    pub regular: usize,
    pub premium: usize,
}

impl RerollBudget {
    pub const NONE: RerollBudget = RerollBudget {
        regular: 0,
        premium: 0,
    };

    pub const fn new(regular: usize, premium: usize) -> RerollBudget {
        RerollBudget { regular, premium }
    }

    pub fn total(self) -> usize {
        self.regular + self.premium
    }

    pub fn is_empty(self) -> bool {
        self.total() == 0
    }

    /// Restricts the budget to at most `dice` rerolls. Regular rerolls are given up before premium
    /// ones.
    pub fn clamp_to(self, dice: usize) -> RerollBudget {
        let excess = self.total().saturating_sub(dice);
        let dropped_regular = excess.min(self.regular);
        let dropped_premium = excess - dropped_regular;

        RerollBudget {
            regular: self.regular - dropped_regular,
            premium: self.premium - dropped_premium,
        }
    }

    /// The budget with one reroll fewer, giving up a regular reroll if there is one left. `None` if
    /// the budget is already empty.
    pub fn without_one(self) -> Option<RerollBudget> {
        if self.regular > 0 {
            Some(RerollBudget {
                regular: self.regular - 1,
                ..self
            })
        }
        else if self.premium > 0 {
            Some(RerollBudget {
                premium: self.premium - 1,
                ..self
            })
        }
        else {
            None
        }
    }
}
