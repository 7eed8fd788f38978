use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::budget::RerollBudget;
use crate::combination::{WeightedCombination, multiset_combinations, total_weight};
use crate::die::{ClassId, DieCatalog, DieClass, DieId, DieInstance};
use crate::error::{ModelError, ModelResult};
use crate::rate::SuccessRate;
use crate::reroll::best_reroll;
use crate::threshold::PowerCheck;

/// Computes the chance of passing the check if the whole pool is rolled from scratch and the
/// rerolls are then spent optimally on whatever came up. The faces currently shown by `dice` are
/// irrelevant, only their classes and ids are used.
pub fn expected_best_success_rate(
    catalog: &DieCatalog,
    check: &PowerCheck,
    budget: RerollBudget,
    dice: &[DieInstance],
) -> ModelResult<SuccessRate> {
    let never_cancelled = AtomicBool::new(false);

    expected_best_success_rate_until(catalog, check, budget, dice, &never_cancelled)?
        .ok_or(ModelError::WorkerLost)
}

/// Same as [expected_best_success_rate], but gives up as soon as `cancelled` is set. Returns
/// `Ok(None)` in that case.
pub fn expected_best_success_rate_until(
    catalog: &DieCatalog,
    check: &PowerCheck,
    budget: RerollBudget,
    dice: &[DieInstance],
    cancelled: &AtomicBool,
) -> ModelResult<Option<SuccessRate>> {
    catalog.validate_pool(dice)?;

    let classes = ClassOutcomes::of_pool(catalog, dice)?;
    let joint_count = classes
        .iter()
        .map(|class| class.combinations.len())
        .product::<usize>();
    let total_weight = classes
        .iter()
        .map(|class| class.total_weight as f64)
        .product::<f64>();

    let weighted_rates = (0..joint_count)
        .into_par_iter()
        .map(|joint_index| {
            if cancelled.load(Ordering::Relaxed) {
                return Ok(None);
            }

            let (pool, weight) = joint_outcome(&classes, joint_index);
            let best = best_reroll(catalog, check, budget, &pool)?;

            Ok(Some(best.success_rate.as_f64() * weight as f64))
        })
        .collect::<ModelResult<Vec<_>>>()?;

    let Some(weighted_rates) = weighted_rates.into_iter().collect::<Option<Vec<_>>>()
    else {
        tracing::debug!("expectation cancelled");
        return Ok(None);
    };

    // summed in enumeration order so the result does not depend on scheduling
    let weighted_sum = weighted_rates.into_iter().sum::<f64>();
    let rate = SuccessRate::saturating_new(weighted_sum / total_weight);

    tracing::debug!(outcomes = joint_count, %rate, "computed expected best success rate");

    Ok(Some(rate))
}

/// The unique unordered outcomes of rolling all dice of one class in the pool.
struct ClassOutcomes<'catalog> {
    class_id: ClassId,
    class: &'catalog DieClass,
    ids: Vec<DieId>,
    combinations: Vec<WeightedCombination>,
    total_weight: u64,
}

impl<'catalog> ClassOutcomes<'catalog> {
    fn of_pool(
        catalog: &'catalog DieCatalog,
        dice: &[DieInstance],
    ) -> ModelResult<Vec<ClassOutcomes<'catalog>>> {
        let mut ids_by_class = BTreeMap::<ClassId, Vec<DieId>>::new();

        for die in dice {
            ids_by_class.entry(die.class).or_default().push(die.id);
        }

        ids_by_class
            .into_iter()
            .map(|(class_id, ids)| {
                ClassOutcomes::new(catalog.validated_class(class_id), class_id, ids)
            })
            .collect()
    }

    fn new(
        class: &'catalog DieClass,
        class_id: ClassId,
        ids: Vec<DieId>,
    ) -> ModelResult<ClassOutcomes<'catalog>> {
        let combinations = multiset_combinations(ids.len(), class.side_count()).collect::<Vec<_>>();
        let actual = combinations.iter().map(|combination| combination.weight).sum::<u64>();
        let expected = total_weight(ids.len(), class.side_count());

        if actual != expected {
            tracing::error!(
                class = class.name(),
                dice = ids.len(),
                actual,
                expected,
                "combination weights do not cover all rolls"
            );

            return Err(ModelError::WeightMismatch {
                class_name: class.name().to_owned(),
                dice: ids.len(),
                actual,
                expected,
            });
        }

        Ok(ClassOutcomes {
            class_id,
            class,
            ids,
            combinations,
            total_weight: expected,
        })
    }
}

/// Decodes `joint_index` into one combination per class, the first class varying slowest, and
/// builds the pool showing those faces together with its weight.
fn joint_outcome(
    classes: &[ClassOutcomes<'_>],
    mut joint_index: usize,
) -> (Vec<DieInstance>, u64) {
    let mut combination_indices = vec![0; classes.len()];

    for (class, combination_index) in classes.iter().zip(&mut combination_indices).rev() {
        *combination_index = joint_index % class.combinations.len();
        joint_index /= class.combinations.len();
    }

    let mut pool = Vec::new();
    let mut weight = 1;

    for (class, &combination_index) in classes.iter().zip(&combination_indices) {
        let combination = &class.combinations[combination_index];
        let faces = class.class.faces();

        pool.extend(
            class
                .ids
                .iter()
                .zip(&combination.face_indices)
                .map(|(&id, &face_index)| DieInstance {
                    id,
                    class: class.class_id,
                    face: faces[face_index],
                }),
        );
        weight *= combination.weight;
    }

    (pool, weight)
}
