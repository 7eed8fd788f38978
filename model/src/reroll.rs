use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::slice;

use crate::budget::RerollBudget;
use crate::combination::index_combinations;
use crate::die::{ClassId, DieCatalog, DieClass, DieId, DieInstance, FaceOrder};
use crate::error::{ModelError, ModelResult};
use crate::face::{Face, apply_premium_draw};
use crate::outcome::{OutcomeDistribution, combine_outcomes};
use crate::rate::SuccessRate;
use crate::threshold::{PowerCheck, success_rate, success_rate_of_distribution};

/// The dice to reroll, split by the kind of reroll to spend on them.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RerollChoice {
    pub regular: Vec<DieId>,
    pub premium: Vec<DieId>,
}

impl RerollChoice {
    pub fn len(&self) -> usize {
        self.regular.len() + self.premium.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> impl Iterator<Item = DieId> + use<'_> {
        self.regular.iter().chain(self.premium.iter()).copied()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BestReroll {
    pub success_rate: SuccessRate,
    pub choice: RerollChoice,
}

/// The chance that the faces currently shown by `dice` pass the check.
pub fn pool_success_rate(check: &PowerCheck, dice: &[DieInstance]) -> SuccessRate {
    let face_sets = dice
        .iter()
        .map(|die| slice::from_ref(&die.face))
        .collect::<Vec<_>>();

    success_rate(check, &combine_outcomes(&face_sets))
}

/// Finds the dice which should be rerolled to maximize the chance of passing the check, spending
/// no more than `budget`. Among allocations with equal chance, ones using fewer rerolls are
/// preferred.
pub fn best_reroll(
    catalog: &DieCatalog,
    check: &PowerCheck,
    budget: RerollBudget,
    dice: &[DieInstance],
) -> ModelResult<BestReroll> {
    catalog.validate_pool(dice)?;

    let current_rate = pool_success_rate(check, dice);

    if current_rate.is_certain() || budget.is_empty() || dice.is_empty() {
        return Ok(BestReroll {
            success_rate: current_rate,
            choice: RerollChoice::default(),
        });
    }

    let search = RerollSearch::new(catalog, check, dice);
    let allocation = search.best_allocation(budget.clamp_to(dice.len()), current_rate);
    let choice = search.choice_of(&allocation);

    if choice.len() > budget.total() {
        tracing::error!(
            chosen = choice.len(),
            budget = budget.total(),
            "reroll search proposed more dice than the budget allows"
        );

        return Err(ModelError::RerollBudgetExceeded {
            chosen: choice.len(),
            budget: budget.total(),
        });
    }

    tracing::debug!(
        rate = %allocation.rate,
        regular = choice.regular.len(),
        premium = choice.premium.len(),
        "found best reroll"
    );

    Ok(BestReroll {
        success_rate: allocation.rate,
        choice,
    })
}

/// All dice of one class in the pool. For orderable classes, the dice are sorted worst first, which
/// is the derived order of [Face] since dominance is total on their faces.
struct ClassGroup<'catalog> {
    class_id: ClassId,
    class: &'catalog DieClass,
    premium_faces: Vec<Face>,
    dice: Vec<DieInstance>,
}

impl ClassGroup<'_> {

    /// The sets of dice (as indices into `dice`) worth trying when rerolling `count` of them.
    fn candidate_subsets(&self, count: usize) -> Vec<Vec<usize>> {
        match self.class.order() {
            FaceOrder::Orderable => vec![(0..count).collect()],
            FaceOrder::Unorderable => index_combinations(self.dice.len(), count),
        }
    }
}

#[derive(Clone, Debug, Default)]
struct GroupReroll {
    indices: Vec<usize>,
    premium: usize,
}

#[derive(Clone, Debug)]
struct Allocation {
    rate: SuccessRate,
    rerolls: Vec<GroupReroll>,
}

struct RerollSearch<'catalog> {
    check: PowerCheck,

    // Ordered by descending premium priority, so premium rerolls go to the first groups.
    groups: Vec<ClassGroup<'catalog>>,
}

impl<'catalog> RerollSearch<'catalog> {
    fn new(
        catalog: &'catalog DieCatalog,
        check: &PowerCheck,
        dice: &[DieInstance],
    ) -> RerollSearch<'catalog> {
        let mut dice_by_class = BTreeMap::<ClassId, Vec<DieInstance>>::new();

        for &die in dice {
            dice_by_class.entry(die.class).or_default().push(die);
        }

        let mut groups = dice_by_class
            .into_iter()
            .map(|(class_id, mut dice)| {
                let class = catalog.validated_class(class_id);

                if class.order() == FaceOrder::Orderable {
                    dice.sort_by_key(|die| die.face);
                }

                ClassGroup {
                    class_id,
                    class,
                    premium_faces: apply_premium_draw(class.faces()),
                    dice,
                }
            })
            .collect::<Vec<_>>();

        groups.sort_by_key(|group| (Reverse(group.class.premium_priority()), group.class_id));

        RerollSearch {
            check: *check,
            groups,
        }
    }

    fn best_allocation(&self, budget: RerollBudget, fixed_rate: SuccessRate) -> Allocation {
        let Some(smaller_budget) = budget.without_one()
        else {
            return Allocation {
                rate: fixed_rate,
                rerolls: vec![GroupReroll::default(); self.groups.len()],
            };
        };

        let mut best: Option<Allocation> = None;

        for counts in self.splits(budget.total()) {
            let premium_counts = assign_premium(&counts, budget.premium);
            let subset_options = self
                .groups
                .iter()
                .zip(&counts)
                .map(|(group, &count)| group.candidate_subsets(count))
                .collect::<Vec<_>>();

            for_each_product(&subset_options, &mut Vec::new(), &mut |subsets| {
                let rate = self.evaluate(subsets, &premium_counts);

                tracing::trace!(?subsets, ?premium_counts, %rate, "evaluated reroll");

                if best.as_ref().is_none_or(|best| rate > best.rate) {
                    best = Some(Allocation {
                        rate,
                        rerolls: subsets
                            .iter()
                            .zip(&premium_counts)
                            .map(|(&indices, &premium)| GroupReroll {
                                indices: indices.to_vec(),
                                premium,
                            })
                            .collect(),
                    });
                }
            });
        }

        let with_fewer_rerolls = self.best_allocation(smaller_budget, fixed_rate);

        match best {
            Some(best) if best.rate > with_fewer_rerolls.rate => best,
            _ => with_fewer_rerolls,
        }
    }

    /// Every way to distribute `total` rerolls over the groups without exceeding any group's size.
    fn splits(&self, total: usize) -> Vec<Vec<usize>> {
        let capacities = self
            .groups
            .iter()
            .map(|group| group.dice.len())
            .collect::<Vec<_>>();
        let mut splits = Vec::new();
        collect_splits(&capacities, total, &mut Vec::new(), &mut splits);
        splits
    }

    fn evaluate(&self, subsets: &[&[usize]], premium_counts: &[usize]) -> SuccessRate {
        let mut distribution = OutcomeDistribution::new();

        for ((group, subset), &premium) in self.groups.iter().zip(subsets).zip(premium_counts) {
            for (index, die) in group.dice.iter().enumerate() {
                match subset.iter().position(|&chosen| chosen == index) {
                    Some(rank) if rank < premium => distribution.add_die(&group.premium_faces),
                    Some(_) => distribution.add_die(group.class.faces()),
                    None => distribution.add_die(slice::from_ref(&die.face)),
                }
            }
        }

        success_rate_of_distribution(&self.check, &distribution)
    }

    fn choice_of(&self, allocation: &Allocation) -> RerollChoice {
        let mut choice = RerollChoice::default();

        for (group, reroll) in self.groups.iter().zip(&allocation.rerolls) {
            for (rank, &index) in reroll.indices.iter().enumerate() {
                let id = group.dice[index].id;

                if rank < reroll.premium {
                    choice.premium.push(id);
                }
                else {
                    choice.regular.push(id);
                }
            }
        }

        choice
    }
}

/// Hands out premium rerolls greedily, front to back.
fn assign_premium(counts: &[usize], premium: usize) -> Vec<usize> {
    let mut remaining = premium;

    counts
        .iter()
        .map(|&count| {
            let assigned = count.min(remaining);
            remaining -= assigned;
            assigned
        })
        .collect()
}

fn collect_splits(
    capacities: &[usize],
    remaining: usize,
    current: &mut Vec<usize>,
    splits: &mut Vec<Vec<usize>>,
) {
    let Some((&capacity, rest)) = capacities.split_first()
    else {
        if remaining == 0 {
            splits.push(current.clone());
        }

        return;
    };

    let rest_capacity = rest.iter().sum::<usize>();
    let min_count = remaining.saturating_sub(rest_capacity);
    let max_count = capacity.min(remaining);

    for count in min_count..=max_count {
        current.push(count);
        collect_splits(rest, remaining - count, current, splits);
        current.pop();
    }
}

fn for_each_product<'options>(
    options: &'options [Vec<Vec<usize>>],
    chosen: &mut Vec<&'options [usize]>,
    consumer: &mut impl FnMut(&[&'options [usize]]),
) {
    match options.split_first() {
        None => consumer(chosen),
        Some((group_options, rest)) => {
            for option in group_options {
                chosen.push(option);
                for_each_product(rest, chosen, consumer);
                chosen.pop();
            }
        },
    }
}
