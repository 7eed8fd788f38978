use thiserror::Error;

use crate::die::{ClassId, DieId};
use crate::face::Face;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("die class '{0}' has an empty face table")]
    EmptyFaceTable(String),

    #[error("die class '{name}' is declared orderable, but faces {first:?} and {second:?} are not \
        comparable")]
    UnorderableFaces {
        name: String,
        first: Face,
        second: Face,
    },

    #[error("die class name '{0}' is used more than once")]
    DuplicateClassName(String),

    #[error("unknown die class '{0}'")]
    UnknownClass(String),

    #[error("die {id} refers to class {class}, which is not part of the catalog")]
    ForeignClass { id: DieId, class: ClassId },

    #[error("face {face:?} of die {id} is not on the face table of class '{class_name}'")]
    FaceNotInTable {
        id: DieId,
        class_name: String,
        face: Face,
    },

    #[error("die id {0} occurs more than once in the pool")]
    DuplicateDieId(DieId),

    #[error("reroll choice uses {chosen} dice, but the budget only allows {budget}")]
    RerollBudgetExceeded { chosen: usize, budget: usize },

    #[error("combination weights for {dice} dice of class '{class_name}' sum to {actual}, \
        expected {expected}")]
    WeightMismatch {
        class_name: String,
        dice: usize,
        actual: u64,
        expected: u64,
    },

    #[error("background evaluation terminated without producing a result")]
    WorkerLost,
}

impl ModelError {

    /// Whether this error indicates a bug in the search rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            ModelError::UnorderableFaces { .. }
                | ModelError::RerollBudgetExceeded { .. }
                | ModelError::WeightMismatch { .. }
        )
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
