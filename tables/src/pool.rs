use model::die::{DieCatalog, DieId, DieInstance};
use model::face::Face;
use serde::Deserialize;

use crate::catalog::FaceEntry;
use crate::error::{TableError, TableResult};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DieEntry {
    id: u32,
    color: String,
    #[serde(default)]
    face: Option<FaceEntry>,
    #[serde(default)]
    face_index: Option<usize>,
}

impl DieEntry {
    fn into_instance(self, catalog: &DieCatalog) -> TableResult<DieInstance> {
        let id = DieId(self.id);
        let class_id = catalog
            .class_id(&self.color)
            .map_err(|_| TableError::UnknownColor {
                id,
                color: self.color.clone(),
            })?;

        let face = match (self.face, self.face_index) {
            (Some(face), None) => Face::from(face),
            (None, Some(index)) => {
                // class_id was just handed out by the catalog
                let faces = catalog
                    .class(class_id)
                    .map(|class| class.faces())
                    .unwrap_or_default();

                *faces.get(index).ok_or_else(|| TableError::FaceIndexOutOfRange {
                    id,
                    color: self.color.clone(),
                    index,
                    sides: faces.len(),
                })?
            },
            (None, None) => return Err(TableError::MissingFace(id)),
            (Some(_), Some(_)) => return Err(TableError::AmbiguousFace(id)),
        };

        Ok(DieInstance {
            id,
            class: class_id,
            face,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PoolFile {
    dice: Vec<DieEntry>,
}

/// Parses a dice pool from JSON of the form
/// `{ "dice": [ { "id": 1, "color": "red", "face": { "power": 1 } } ] }`, where a die may give
/// `face_index` into its class's face table instead of `face`. The pool is validated against the
/// catalog.
pub fn parse_pool(catalog: &DieCatalog, json: &str) -> TableResult<Vec<DieInstance>> {
    let file = serde_json::from_str::<PoolFile>(json)?;
    let dice = file
        .dice
        .into_iter()
        .map(|entry| entry.into_instance(catalog))
        .collect::<TableResult<Vec<_>>>()?;

    catalog.validate_pool(&dice)?;

    Ok(dice)
}
