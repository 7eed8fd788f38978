use std::path::Path;

use model::budget::RerollBudget;
use model::die::DieId;
use model::reroll::{best_reroll, pool_success_rate};
use model::threshold::PowerCheck;

use crate::error::CliResult;

fn format_ids(ids: &[DieId]) -> String {
    if ids.is_empty() {
        return "none".to_owned();
    }

    ids.iter().map(DieId::to_string).collect::<Vec<_>>().join(", ")
}

pub fn run(
    settings: &super::Settings,
    pool_path: &Path,
    check: &PowerCheck,
    budget: RerollBudget,
) -> CliResult<()> {
    let (catalog, dice) = super::load(settings, pool_path)?;
    let best = best_reroll(&catalog, check, budget, &dice)?;

    println!("chance: {:.2}", pool_success_rate(check, &dice));
    println!("best chance: {:.2}", best.success_rate);
    println!("reroll: {}", format_ids(&best.choice.regular));
    println!("premium reroll: {}", format_ids(&best.choice.premium));

    Ok(())
}
