use kernal::prelude::*;
use model::budget::{RerollBudget, Tokens};
use model::expectation::expected_best_success_rate;
use model::face::Face;
use model::outcome::combine_outcomes;
use model::rate::SuccessRate;
use model::reroll::{best_reroll, pool_success_rate};
use model::test_util::{
    self,
    BLACK_FACES,
    MORTAL_FACES,
    RED_FACES,
    WHITE_FACES,
    black,
    mortal,
    red,
    white,
};
use model::threshold::{PowerCheck, success_rate};

use crate::*;

#[test]
fn single_red_die_with_four_breaks() {
    let totals = combine_outcomes(&[RED_FACES]);

    assert_that!(success_rate(&check(2, 4), &totals)).is_equal_to(test_util::rate(50.0));
}

#[test]
fn two_red_dice_without_breaks() {
    let totals = combine_outcomes(&[RED_FACES, RED_FACES]);

    // 20 of the 36 pairs have at least 2 power
    assert_that!(&totals).has_length(36);
    assert_that!(success_rate(&check(2, 0), &totals)).is_equal_to(SuccessRate::from_counts(20, 36));
}

#[test]
fn no_dice() {
    let no_faces: [&[Face]; 0] = [];
    let totals = combine_outcomes(&no_faces);

    assert_that!(success_rate(&check(0, 0), &totals)).is_equal_to(SuccessRate::CERTAIN);
    assert_that!(success_rate(&check(1, 0), &totals)).is_equal_to(SuccessRate::ZERO);
}

#[test]
fn best_reroll_without_budget_is_current_rate() {
    let catalog = test_util::catalog();
    let dice = [
        red(1, RED_FACES[1]),
        black(2, BLACK_FACES[3]),
        white(3, WHITE_FACES[4]),
        mortal(4, MORTAL_FACES[5]),
    ];
    let check = PowerCheck::new(8, Tokens::new(2, 1));

    let best = best_reroll(&catalog, &check, RerollBudget::NONE, &dice).unwrap();

    assert_that!(best.success_rate).is_equal_to(pool_success_rate(&check, &dice));
    assert_that!(best.choice.is_empty()).is_true();
}

#[test]
fn best_reroll_matches_brute_force_on_mixed_pool() {
    let catalog = test_util::catalog();
    let dice = [
        red(1, RED_FACES[0]),
        black(2, BLACK_FACES[1]),
        white(3, WHITE_FACES[3]),
        mortal(4, MORTAL_FACES[1]),
    ];
    let check = check(7, 2);
    let budget = RerollBudget::new(2, 0);

    let best = best_reroll(&catalog, &check, budget, &dice).unwrap();

    assert_that!(best.success_rate)
        .is_equal_to(brute_force_best_rate(&catalog, &check, budget, &dice));
    assert_that!(best.choice.len()).is_less_than_or_equal_to(2);
}

#[test]
fn reported_choice_achieves_reported_rate() {
    let catalog = test_util::catalog();
    let dice = [
        red(1, RED_FACES[0]),
        red(2, RED_FACES[3]),
        black(3, BLACK_FACES[0]),
        white(4, WHITE_FACES[3]),
    ];
    let check = check(7, 1);

    let best = best_reroll(&catalog, &check, RerollBudget::new(1, 1), &dice).unwrap();
    let mut face_sets = Vec::new();

    for die in &dice {
        let faces = catalog.class(die.class).unwrap().faces();

        if best.choice.premium.contains(&die.id) {
            face_sets.push(model::face::apply_premium_draw(faces));
        }
        else if best.choice.regular.contains(&die.id) {
            face_sets.push(faces.to_vec());
        }
        else {
            face_sets.push(vec![die.face]);
        }
    }

    assert_that!(success_rate(&check, &combine_outcomes(&face_sets)))
        .is_equal_to(best.success_rate);
}

#[test]
fn expectation_is_at_least_plain_roll() {
    let catalog = test_util::catalog();
    let dice = [red(1, RED_FACES[0]), black(2, BLACK_FACES[0]), mortal(3, MORTAL_FACES[0])];
    let check = check(4, 1);
    let plain = success_rate(&check, &combine_outcomes(&[RED_FACES, BLACK_FACES, MORTAL_FACES]));

    let expected = expected_best_success_rate(&catalog, &check, RerollBudget::new(1, 1), &dice)
        .unwrap();

    assert_that!(expected).is_greater_than_or_equal_to(plain);
    assert_that!(expected).is_less_than_or_equal_to(SuccessRate::CERTAIN);
}
