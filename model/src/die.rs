use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use crate::error::{ModelError, ModelResult};
use crate::face::Face;

/// Whether the faces of a die class can be totally ordered by [Face::dominates]. For orderable
/// classes, rerolling `k` dice always means rerolling the `k` worst ones. Unorderable classes have
/// faces which are only better than others depending on the available breaks and hope, so every
/// subset of their dice has to be considered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FaceOrder {
    Orderable,
    Unorderable,
}

impl FaceOrder {

    /// The strongest order the given faces admit.
    pub fn of_faces(faces: &[Face]) -> FaceOrder {
        match find_incomparable_pair(faces) {
            Some(_) => FaceOrder::Unorderable,
            None => FaceOrder::Orderable,
        }
    }
}

fn find_incomparable_pair(faces: &[Face]) -> Option<(Face, Face)> {
    faces.iter().enumerate().find_map(|(index, &first)| {
        faces[(index + 1)..]
            .iter()
            .find(|&&second| !first.is_comparable_to(second))
            .map(|&second| (first, second))
    })
}

/// A color of power dice with its complete face table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DieClass {
    name: String,
    faces: Vec<Face>,
    order: FaceOrder,
    premium_priority: u8,
}

impl DieClass {

    /// Creates a new die class. `premium_priority` decides which classes receive premium rerolls
    /// first when a reroll mixes both kinds; higher values are served first.
    pub fn new(
        name: impl Into<String>,
        faces: Vec<Face>,
        order: FaceOrder,
        premium_priority: u8,
    ) -> ModelResult<DieClass> {
        let name = name.into();

        if faces.is_empty() {
            return Err(ModelError::EmptyFaceTable(name));
        }

        if order == FaceOrder::Orderable {
            if let Some((first, second)) = find_incomparable_pair(&faces) {
                tracing::error!(
                    class = %name,
                    ?first,
                    ?second,
                    "orderable class with incomparable faces"
                );
                return Err(ModelError::UnorderableFaces {
                    name,
                    first,
                    second,
                });
            }
        }

        Ok(DieClass {
            name,
            faces,
            order,
            premium_priority,
        })
    }

    /// Creates a new die class, using the strongest order its faces admit.
    pub fn inferred(
        name: impl Into<String>,
        faces: Vec<Face>,
        premium_priority: u8,
    ) -> ModelResult<DieClass> {
        let order = FaceOrder::of_faces(&faces);
        DieClass::new(name, faces, order, premium_priority)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn side_count(&self) -> usize {
        self.faces.len()
    }

    pub fn order(&self) -> FaceOrder {
        self.order
    }

    pub fn premium_priority(&self) -> u8 {
        self.premium_priority
    }

    pub fn has_face(&self, face: Face) -> bool {
        self.faces.contains(&face)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClassId(usize);

impl ClassId {
    pub const fn from_index(index: usize) -> ClassId {
        ClassId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for ClassId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All die classes known to a calculation. Classes are addressed by [ClassId]s handed out by the
/// catalog, names only matter when looking them up.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DieCatalog {
    classes: Vec<DieClass>,
}

impl DieCatalog {
    pub fn new(classes: impl IntoIterator<Item = DieClass>) -> ModelResult<DieCatalog> {
        let classes = classes.into_iter().collect::<Vec<_>>();
        let mut names = HashSet::new();

        for class in &classes {
            if !names.insert(class.name()) {
                return Err(ModelError::DuplicateClassName(class.name().to_owned()));
            }
        }

        Ok(DieCatalog { classes })
    }

    pub fn class_id(&self, name: &str) -> ModelResult<ClassId> {
        self.classes
            .iter()
            .position(|class| class.name() == name)
            .map(ClassId)
            .ok_or_else(|| ModelError::UnknownClass(name.to_owned()))
    }

    pub fn class(&self, id: ClassId) -> Option<&DieClass> {
        self.classes.get(id.0)
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &DieClass)> + use<'_> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, class)| (ClassId(index), class))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Checks that every die belongs to a class of this catalog, shows a face of that class and has
    /// an id not used by any other die.
    pub fn validate_pool(&self, dice: &[DieInstance]) -> ModelResult<()> {
        let mut ids = HashSet::new();

        for die in dice {
            let class = self.class(die.class).ok_or(ModelError::ForeignClass {
                id: die.id,
                class: die.class,
            })?;

            if !class.has_face(die.face) {
                return Err(ModelError::FaceNotInTable {
                    id: die.id,
                    class_name: class.name().to_owned(),
                    face: die.face,
                });
            }

            if !ids.insert(die.id) {
                return Err(ModelError::DuplicateDieId(die.id));
            }
        }

        Ok(())
    }

    /// Only to be used with ids validated by [DieCatalog::validate_pool].
    pub(crate) fn validated_class(&self, id: ClassId) -> &DieClass {
        &self.classes[id.0]
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DieId(pub u32);

impl Display for DieId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A die in the pool together with the face it currently shows.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DieInstance {
    pub id: DieId,
    pub class: ClassId,
    pub face: Face,
}

impl DieInstance {
    pub fn new(id: u32, class: ClassId, face: Face) -> DieInstance {
        DieInstance {
            id: DieId(id),
            class,
            face,
        }
    }
}
