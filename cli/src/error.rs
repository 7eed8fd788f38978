use std::io;
use std::path::PathBuf;

use model::error::ModelError;
use tables::error::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("invalid '{path}': {source}")]
    Table {
        path: PathBuf,
        source: TableError,
    },

    #[error(transparent)]
    BundledTable(TableError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("the pool has {dice} dice, but at most {max} are supported")]
    PoolTooLarge { dice: usize, max: usize },
}

pub type CliResult<T> = Result<T, CliError>;
