use std::fs;
use std::path::{Path, PathBuf};

use model::die::{DieCatalog, DieInstance};

use crate::error::{CliError, CliResult};

pub mod chance;
pub mod expect;
pub mod reroll;

pub struct Settings {
    pub tables: Option<PathBuf>,
    pub max_dice: usize,
}

fn read(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}

fn load_catalog(settings: &Settings) -> CliResult<DieCatalog> {
    match &settings.tables {
        Some(path) => tables::parse_catalog(&read(path)?).map_err(|source| CliError::Table {
            path: path.clone(),
            source,
        }),
        None => tables::reference_catalog().map_err(CliError::BundledTable),
    }
}

/// Loads the catalog and the pool at `pool_path`, refusing pools larger than the configured
/// maximum.
pub fn load(settings: &Settings, pool_path: &Path) -> CliResult<(DieCatalog, Vec<DieInstance>)> {
    let catalog = load_catalog(settings)?;
    let dice = tables::parse_pool(&catalog, &read(pool_path)?).map_err(|source| {
        CliError::Table {
            path: pool_path.to_owned(),
            source,
        }
    })?;

    if dice.len() > settings.max_dice {
        return Err(CliError::PoolTooLarge {
            dice: dice.len(),
            max: settings.max_dice,
        });
    }

    tracing::debug!(dice = dice.len(), classes = catalog.len(), "loaded pool");

    Ok((catalog, dice))
}
