use std::ops::{Add, AddAssign};

use crate::budget::Tokens;

/// One side of a power die. `power` always counts, `potential` counts up to the available breaks
/// and `dot` counts up to the available hope.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Face {
    pub power: u32,
    pub potential: u32,
    pub dot: u32,
}

impl Face {
    pub const fn new(power: u32, potential: u32, dot: u32) -> Face {
        Face {
            power,
            potential,
            dot,
        }
    }

    /// Whether this face is at least as good as `other` for every amount of breaks and hope. A unit
    /// of power is worth at least a potential, which is worth at least a dot, so the face needs at
    /// least as much power, power plus potential and power plus potential plus dot.
    pub fn dominates(self, other: Face) -> bool {
        self.cumulative_values()
            .iter()
            .zip(other.cumulative_values())
            .all(|(&own, other)| own >= other)
    }

    fn cumulative_values(self) -> [u64; 3] {
        let power = u64::from(self.power);
        let with_potential = power + u64::from(self.potential);

        [power, with_potential, with_potential + u64::from(self.dot)]
    }

    pub fn is_comparable_to(self, other: Face) -> bool {
        self.dominates(other) || other.dominates(self)
    }

    /// The face as it counts when drawn by a premium reroll: one potential, if present, is turned
    /// into power.
    pub fn premium_draw(self) -> Face {
        if self.potential >= 1 {
            Face {
                power: self.power.saturating_add(1),
                potential: self.potential - 1,
                dot: self.dot,
            }
        }
        else {
            self
        }
    }
}

pub fn apply_premium_draw(faces: &[Face]) -> Vec<Face> {
    faces.iter().copied().map(Face::premium_draw).collect()
}

/// The component-wise sum of the faces of several dice. Sums saturate at `u32::MAX`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PowerTotal {
    pub power: u32,
    pub potential: u32,
    pub dot: u32,
}

impl PowerTotal {
    pub const ZERO: PowerTotal = PowerTotal {
        power: 0,
        potential: 0,
        dot: 0,
    };

    pub fn effective_power(self, tokens: Tokens) -> u32 {
        effective_power(self, tokens)
    }
}

impl From<Face> for PowerTotal {
    fn from(face: Face) -> PowerTotal {
        PowerTotal {
            power: face.power,
            potential: face.potential,
            dot: face.dot,
        }
    }
}

impl AddAssign<Face> for PowerTotal {
    fn add_assign(&mut self, face: Face) {
        self.power = self.power.saturating_add(face.power);
        self.potential = self.potential.saturating_add(face.potential);
        self.dot = self.dot.saturating_add(face.dot);
    }
}

impl Add<Face> for PowerTotal {
    type Output = PowerTotal;

    fn add(mut self, face: Face) -> PowerTotal {
        self += face;
        self
    }
}

/// Computes the power of `total` after spending as many tokens as useful. Hope goes to dots first,
/// whatever hope is left over joins the breaks on potentials.
pub fn effective_power(total: PowerTotal, tokens: Tokens) -> u32 {
    let used_hope = total.dot.min(tokens.hope);
    let remaining_hope = tokens.hope - used_hope;
    let used_breaks = total.potential.min(tokens.breaks.saturating_add(remaining_hope));

    total.power.saturating_add(used_hope).saturating_add(used_breaks)
}
