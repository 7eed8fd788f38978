use model::budget::{RerollBudget, Tokens};
use model::combination::{multiset_combinations, total_weight};
use model::die::{ClassId, DieInstance};
use model::face::{Face, PowerTotal, effective_power};
use model::outcome::combine_outcomes;
use model::reroll::{best_reroll, pool_success_rate};
use model::test_util::{self, BLACK_FACES, MORTAL_FACES, RED_FACES, WHITE_FACES};
use model::threshold::success_rate;
use proptest::prelude::*;

use crate::*;

const TABLES: [[Face; 6]; 4] = [RED_FACES, BLACK_FACES, WHITE_FACES, MORTAL_FACES];

fn face_strategy() -> impl Strategy<Value = Face> {
    (0..4u32, 0..4u32, 0..2u32).prop_map(|(power, potential, dot)| Face::new(power, potential, dot))
}

fn totals_strategy() -> impl Strategy<Value = Vec<PowerTotal>> {
    prop::collection::vec(
        (0..12u32, 0..8u32, 0..4u32).prop_map(|(power, potential, dot)| PowerTotal {
            power,
            potential,
            dot,
        }),
        0..40,
    )
}

/// Pools of up to `max_dice` dice of the reference classes, with ids in pool order.
fn pool_strategy(max_dice: usize) -> impl Strategy<Value = Vec<DieInstance>> {
    prop::collection::vec((0..4usize, 0..6usize), 0..=max_dice).prop_map(|dice| {
        dice.into_iter()
            .enumerate()
            .map(|(id, (class, face))| {
                DieInstance::new(id as u32, ClassId::from_index(class), TABLES[class][face])
            })
            .collect()
    })
}

/// Pools of dice of a single reference class.
fn single_class_pool_strategy(max_dice: usize) -> impl Strategy<Value = Vec<DieInstance>> {
    (0..4usize, prop::collection::vec(0..6usize, 0..=max_dice)).prop_map(|(class, faces)| {
        faces
            .into_iter()
            .enumerate()
            .map(|(id, face)| {
                DieInstance::new(id as u32, ClassId::from_index(class), TABLES[class][face])
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn combined_outcome_count_is_product_of_table_sizes(
        sizes in prop::collection::vec(1..=6usize, 0..5)
    ) {
        let face_sets = sizes.iter().map(|&size| &RED_FACES[..size]).collect::<Vec<_>>();
        let expected = sizes.iter().product::<usize>();

        prop_assert_eq!(combine_outcomes(&face_sets).len(), expected);
    }

    #[test]
    fn success_rate_is_monotone_in_threshold_and_breaks(
        totals in totals_strategy(),
        threshold in 0..15u32,
        breaks in 0..6u32,
    ) {
        let base = success_rate(&check(threshold, breaks), &totals);

        prop_assert!(success_rate(&check(threshold + 1, breaks), &totals) <= base);
        prop_assert!(success_rate(&check(threshold, breaks + 1), &totals) >= base);
    }

    #[test]
    fn weights_sum_to_all_rolls(dice in 0..7usize, sides in 1..9usize) {
        let weight_sum = multiset_combinations(dice, sides)
            .map(|combination| combination.weight)
            .sum::<u64>();

        prop_assert_eq!(weight_sum, total_weight(dice, sides));
    }

    #[test]
    fn premium_draw_never_lowers_effective_power(
        face in face_strategy(),
        breaks in 0..6u32,
        hope in 0..3u32,
    ) {
        let tokens = Tokens::new(breaks, hope);
        let regular = effective_power(PowerTotal::from(face), tokens);
        let premium = effective_power(PowerTotal::from(face.premium_draw()), tokens);

        prop_assert!(premium >= regular);
    }

    #[test]
    fn best_reroll_without_budget_is_idempotent(
        dice in pool_strategy(4),
        threshold in 0..12u32,
        breaks in 0..4u32,
        hope in 0..3u32,
    ) {
        let catalog = test_util::catalog();
        let check = hope_check(threshold, breaks, hope);

        let best = best_reroll(&catalog, &check, RerollBudget::NONE, &dice).unwrap();

        prop_assert_eq!(best.success_rate, pool_success_rate(&check, &dice));
        prop_assert!(best.choice.is_empty());
    }

    #[test]
    fn best_reroll_stays_within_budget(
        dice in pool_strategy(4),
        threshold in 0..12u32,
        breaks in 0..4u32,
        hope in 0..3u32,
        regular in 0..4usize,
        premium in 0..4usize,
    ) {
        let catalog = test_util::catalog();
        let best = best_reroll(
            &catalog,
            &hope_check(threshold, breaks, hope),
            RerollBudget::new(regular, premium),
            &dice,
        )
        .unwrap();

        prop_assert!(best.choice.len() <= regular + premium);
        prop_assert!(best.choice.len() <= dice.len());
        prop_assert!(best.choice.premium.len() <= premium);
        prop_assert!(best.choice.ids().all(|id| dice.iter().any(|die| die.id == id)));
    }

    #[test]
    fn best_reroll_is_monotone_in_budget(
        dice in pool_strategy(3),
        threshold in 0..12u32,
        breaks in 0..4u32,
        hope in 0..3u32,
        regular in 0..3usize,
        premium in 0..3usize,
    ) {
        let catalog = test_util::catalog();
        let check = hope_check(threshold, breaks, hope);
        let rate = |budget| best_reroll(&catalog, &check, budget, &dice).unwrap().success_rate;
        let base = rate(RerollBudget::new(regular, premium));

        prop_assert!(rate(RerollBudget::new(regular + 1, premium)) >= base);
        prop_assert!(rate(RerollBudget::new(regular, premium + 1)) >= base);
    }

    #[test]
    fn best_reroll_finds_maximum_for_single_class(
        dice in single_class_pool_strategy(3),
        threshold in 0..10u32,
        breaks in 0..4u32,
        hope in 0..3u32,
        regular in 0..3usize,
        premium in 0..3usize,
    ) {
        let catalog = test_util::catalog();
        let check = hope_check(threshold, breaks, hope);
        let budget = RerollBudget::new(regular, premium);

        let best = best_reroll(&catalog, &check, budget, &dice).unwrap();

        prop_assert_eq!(best.success_rate, brute_force_best_rate(&catalog, &check, budget, &dice));
    }

    #[test]
    fn best_reroll_finds_maximum_with_regular_rerolls(
        dice in pool_strategy(4),
        threshold in 0..12u32,
        breaks in 0..4u32,
        hope in 0..3u32,
        regular in 0..3usize,
    ) {
        let catalog = test_util::catalog();
        let check = hope_check(threshold, breaks, hope);
        let budget = RerollBudget::new(regular, 0);

        let best = best_reroll(&catalog, &check, budget, &dice).unwrap();

        prop_assert_eq!(best.success_rate, brute_force_best_rate(&catalog, &check, budget, &dice));
    }

    #[test]
    fn best_reroll_finds_maximum_with_premium_rerolls_on_mixed_pool(
        dice in pool_strategy(4),
        threshold in 0..12u32,
        breaks in 0..4u32,
        hope in 0..3u32,
        regular in 0..3usize,
        premium in 1..3usize,
    ) {
        let catalog = test_util::catalog();
        let check = hope_check(threshold, breaks, hope);
        let budget = RerollBudget::new(regular, premium);

        let best = best_reroll(&catalog, &check, budget, &dice).unwrap();

        prop_assert_eq!(
            best.success_rate,
            greedy_premium_best_rate(&catalog, &check, budget, &dice)
        );
        prop_assert_eq!(rate_of_choice(&catalog, &check, &dice, &best.choice), best.success_rate);
    }
}
