use std::path::Path;
use std::sync::Arc;

use model::budget::RerollBudget;
use model::preview::spawn_expected_best;
use model::threshold::PowerCheck;

use crate::error::CliResult;

pub fn run(
    settings: &super::Settings,
    pool_path: &Path,
    check: &PowerCheck,
    budget: RerollBudget,
) -> CliResult<()> {
    let (catalog, dice) = super::load(settings, pool_path)?;
    let rate = spawn_expected_best(Arc::new(catalog), *check, budget, dice).wait()?;

    println!("expected best chance: {rate:.2}");

    Ok(())
}
