use model::die::{DieCatalog, DieClass, FaceOrder};
use model::face::Face;
use serde::Deserialize;

use crate::error::TableResult;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct FaceEntry {
    pub power: u32,
    #[serde(default)]
    pub potential: u32,
    #[serde(default)]
    pub dot: u32,
}

impl From<FaceEntry> for Face {
    fn from(entry: FaceEntry) -> Face {
        Face::new(entry.power, entry.potential, entry.dot)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
enum OrderEntry {
    Orderable,
    Unorderable,
}

impl From<OrderEntry> for FaceOrder {
    fn from(entry: OrderEntry) -> FaceOrder {
        match entry {
            OrderEntry::Orderable => FaceOrder::Orderable,
            OrderEntry::Unorderable => FaceOrder::Unorderable,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassEntry {
    color: String,
    #[serde(default)]
    order: Option<OrderEntry>,
    #[serde(default)]
    premium_priority: u8,
    faces: Vec<FaceEntry>,
}

impl ClassEntry {
    fn into_class(self) -> TableResult<DieClass> {
        let faces = self.faces.into_iter().map(Face::from).collect::<Vec<_>>();
        let class = match self.order {
            Some(order) => DieClass::new(self.color, faces, order.into(), self.premium_priority)?,
            None => DieClass::inferred(self.color, faces, self.premium_priority)?,
        };

        tracing::debug!(
            color = class.name(),
            sides = class.side_count(),
            order = ?class.order(),
            premium_priority = class.premium_priority(),
            "loaded die class"
        );

        Ok(class)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    classes: Vec<ClassEntry>,
}

/// Parses die classes from JSON of the form
/// `{ "classes": [ { "color": "red", "order": "orderable", "faces": [..] } ] }`. If `order` is
/// missing, the strongest order the faces admit is used.
pub fn parse_catalog(json: &str) -> TableResult<DieCatalog> {
    let file = serde_json::from_str::<TableFile>(json)?;
    let classes = file
        .classes
        .into_iter()
        .map(ClassEntry::into_class)
        .collect::<TableResult<Vec<_>>>()?;

    Ok(DieCatalog::new(classes)?)
}
