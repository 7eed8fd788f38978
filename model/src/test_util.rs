use kernal::abs_diff::AbsDiff;

use crate::die::{ClassId, DieCatalog, DieClass, DieInstance, FaceOrder};
use crate::face::Face;
use crate::rate::SuccessRate;

const fn face(power: u32, potential: u32, dot: u32) -> Face {
    Face::new(power, potential, dot)
}

pub const RED_FACES: [Face; 6] = [
    face(0, 0, 1),
    face(0, 1, 0),
    face(1, 0, 0),
    face(1, 1, 0),
    face(1, 1, 0),
    face(2, 0, 1),
];

pub const BLACK_FACES: [Face; 6] = [
    face(0, 1, 1),
    face(1, 1, 0),
    face(1, 1, 0),
    face(2, 0, 1),
    face(2, 1, 0),
    face(2, 2, 0),
];

pub const WHITE_FACES: [Face; 6] = [
    face(1, 2, 1),
    face(2, 1, 0),
    face(2, 1, 0),
    face(3, 0, 0),
    face(1, 3, 0),
    face(3, 2, 1),
];

pub const MORTAL_FACES: [Face; 6] = [
    face(0, 0, 0),
    face(0, 2, 0),
    face(1, 0, 1),
    face(1, 1, 0),
    face(2, 0, 0),
    face(0, 3, 1),
];

pub const RED: ClassId = class_id(0);
pub const BLACK: ClassId = class_id(1);
pub const WHITE: ClassId = class_id(2);
pub const MORTAL: ClassId = class_id(3);

const fn class_id(index: usize) -> ClassId {
    ClassId::from_index(index)
}

/// The reference catalog: red and black are orderable, white and mortal are not.
pub fn catalog() -> DieCatalog {
    DieCatalog::new([
        DieClass::new("red", RED_FACES.to_vec(), FaceOrder::Orderable, 0).unwrap(),
        DieClass::new("black", BLACK_FACES.to_vec(), FaceOrder::Orderable, 1).unwrap(),
        DieClass::new("white", WHITE_FACES.to_vec(), FaceOrder::Unorderable, 2).unwrap(),
        DieClass::new("mortal", MORTAL_FACES.to_vec(), FaceOrder::Unorderable, 2).unwrap(),
    ])
    .unwrap()
}

pub fn red(id: u32, face: Face) -> DieInstance {
    DieInstance::new(id, RED, face)
}

pub fn black(id: u32, face: Face) -> DieInstance {
    DieInstance::new(id, BLACK, face)
}

pub fn white(id: u32, face: Face) -> DieInstance {
    DieInstance::new(id, WHITE, face)
}

pub fn mortal(id: u32, face: Face) -> DieInstance {
    DieInstance::new(id, MORTAL, face)
}

pub fn rate(percent: f64) -> SuccessRate {
    SuccessRate::new(percent).unwrap()
}

impl AbsDiff for SuccessRate {
    type ReturnType = f64;

    fn abs_diff(&self, other: &SuccessRate) -> f64 {
        self.as_f64().abs_diff(&other.as_f64())
    }
}
