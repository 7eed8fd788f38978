use std::cmp::Reverse;

use model::budget::{RerollBudget, Tokens};
use model::die::{DieCatalog, DieInstance};
use model::outcome::OutcomeDistribution;
use model::rate::SuccessRate;
use model::reroll::RerollChoice;
use model::threshold::{PowerCheck, success_rate_of_distribution};

mod properties;
mod scenarios;

pub fn check(threshold: u32, breaks: u32) -> PowerCheck {
    PowerCheck::new(threshold, Tokens::breaks_only(breaks))
}

pub fn hope_check(threshold: u32, breaks: u32, hope: u32) -> PowerCheck {
    PowerCheck::new(threshold, Tokens::new(breaks, hope))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DieTreatment {
    Keep,
    Regular,
    Premium,
}

const TREATMENTS: [DieTreatment; 3] =
    [DieTreatment::Keep, DieTreatment::Regular, DieTreatment::Premium];

fn rate_of_treatments(
    catalog: &DieCatalog,
    check: &PowerCheck,
    dice: &[DieInstance],
    treatments: &[DieTreatment],
) -> SuccessRate {
    let mut distribution = OutcomeDistribution::new();

    for (die, treatment) in dice.iter().zip(treatments) {
        let class = catalog.class(die.class).unwrap();

        match treatment {
            DieTreatment::Keep => distribution.add_die(&[die.face]),
            DieTreatment::Regular => distribution.add_die(class.faces()),
            DieTreatment::Premium =>
                distribution.add_die(&model::face::apply_premium_draw(class.faces())),
        }
    }

    success_rate_of_distribution(check, &distribution)
}

/// The best rate over every way of treating each die as kept, regularly rerolled or rerolled with
/// premium, within the budget.
pub fn brute_force_best_rate(
    catalog: &DieCatalog,
    check: &PowerCheck,
    budget: RerollBudget,
    dice: &[DieInstance],
) -> SuccessRate {
    let mut best = SuccessRate::ZERO;
    let mut treatments = vec![DieTreatment::Keep; dice.len()];

    for code in 0..3usize.pow(dice.len() as u32) {
        let mut rest = code;

        for treatment in treatments.iter_mut() {
            *treatment = TREATMENTS[rest % 3];
            rest /= 3;
        }

        let regular = treatments.iter().filter(|&&t| t == DieTreatment::Regular).count();
        let premium = treatments.iter().filter(|&&t| t == DieTreatment::Premium).count();

        if regular <= budget.regular && premium <= budget.premium {
            best = best.max(rate_of_treatments(catalog, check, dice, &treatments));
        }
    }

    best
}

/// The rate of rerolling exactly the dice named by `choice`.
pub fn rate_of_choice(
    catalog: &DieCatalog,
    check: &PowerCheck,
    dice: &[DieInstance],
    choice: &RerollChoice,
) -> SuccessRate {
    let treatments = dice
        .iter()
        .map(|die| {
            if choice.premium.contains(&die.id) {
                DieTreatment::Premium
            }
            else if choice.regular.contains(&die.id) {
                DieTreatment::Regular
            }
            else {
                DieTreatment::Keep
            }
        })
        .collect::<Vec<_>>();

    rate_of_treatments(catalog, check, dice, &treatments)
}

/// The best rate over every set of dice to reroll within the budget, where as many of them as
/// possible get premium rerolls, handed out to classes of higher premium priority first.
pub fn greedy_premium_best_rate(
    catalog: &DieCatalog,
    check: &PowerCheck,
    budget: RerollBudget,
    dice: &[DieInstance],
) -> SuccessRate {
    let mut best = SuccessRate::ZERO;

    for mask in 0..1usize << dice.len() {
        let mut rerolled = (0..dice.len())
            .filter(|&index| mask & (1 << index) != 0)
            .collect::<Vec<_>>();

        if rerolled.len() > budget.total() {
            continue;
        }

        rerolled.sort_by_key(|&index| {
            let class = dice[index].class;
            (Reverse(catalog.class(class).unwrap().premium_priority()), class)
        });

        let mut treatments = vec![DieTreatment::Keep; dice.len()];

        for (rank, &index) in rerolled.iter().enumerate() {
            treatments[index] = if rank < budget.premium {
                DieTreatment::Premium
            }
            else {
                DieTreatment::Regular
            };
        }

        best = best.max(rate_of_treatments(catalog, check, dice, &treatments));
    }

    best
}
