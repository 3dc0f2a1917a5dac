use facet_math::{Vec2, Vec3};

use crate::Polygon;

/// An indexed polygon mesh.
///
/// Four flat, ordered sequences: vertex positions, texture coordinates,
/// normals, and polygons whose index lists point into the vertex sequence.
/// A model is populated once by a loader and read-only afterwards; the
/// normal-estimation routines never write to it (estimated normals are
/// returned to the caller, who may choose to store them in `normals`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub vertices: Vec<Vec3>,
    pub texture_vertices: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub polygons: Vec<Polygon>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }
}
