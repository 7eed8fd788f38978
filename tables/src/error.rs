use model::die::DieId;
use model::error::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("die {id} has unknown color '{color}'")]
    UnknownColor { id: DieId, color: String },

    #[error("die {0} gives neither a face nor a face index")]
    MissingFace(DieId),

    #[error("die {0} gives both a face and a face index")]
    AmbiguousFace(DieId),

    #[error("face index {index} of die {id} is out of range for the {sides} faces of '{color}'")]
    FaceIndexOutOfRange {
        id: DieId,
        color: String,
        index: usize,
        sides: usize,
    },
}

pub type TableResult<T> = Result<T, TableError>;
