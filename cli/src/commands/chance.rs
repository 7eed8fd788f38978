use std::path::Path;

use model::outcome::combine_outcomes;
use model::threshold::{PowerCheck, average_power, success_rate};

use crate::error::CliResult;

pub fn run(settings: &super::Settings, pool_path: &Path, check: &PowerCheck) -> CliResult<()> {
    let (_, dice) = super::load(settings, pool_path)?;
    let face_sets = dice.iter().map(|die| [die.face]).collect::<Vec<_>>();
    let totals = combine_outcomes(&face_sets);

    println!("chance: {:.2}", success_rate(check, &totals));

    if let Some(power) = average_power(&totals, check.tokens) {
        println!("power: {power}");
    }

    Ok(())
}
