//! Hand-built fixture models shared by the facet test suites.
//!
//! The fixtures are constructed in code rather than loaded from files; the
//! kernel has no loader, and tests should not depend on one.

use facet_math::Vec3;
use facet_mesh::{Model, Polygon};

/// A unit cube with 8 shared vertices and 6 outward-wound quad faces.
///
/// Quads exercise the take-the-first-three-indices path of face-normal
/// estimation. Expected face normals are the axis unit vectors; the vertex
/// normal at any corner is the normalized sum of its three face normals.
pub fn cube() -> Model {
    Model {
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ],
        polygons: vec![
            // +z
            Polygon::from_vertex_indices(vec![4, 5, 6, 7]),
            // -z
            Polygon::from_vertex_indices(vec![0, 3, 2, 1]),
            // -y
            Polygon::from_vertex_indices(vec![0, 1, 5, 4]),
            // +y
            Polygon::from_vertex_indices(vec![3, 7, 6, 2]),
            // -x
            Polygon::from_vertex_indices(vec![0, 4, 7, 3]),
            // +x
            Polygon::from_vertex_indices(vec![1, 2, 6, 5]),
        ],
        ..Model::default()
    }
}

/// A square pyramid: 4 base corners, apex last.
///
/// Polygons are ordered side 0..=3 then the base quad, so the base corner 0
/// is shared by polygons 0, 3 and 4, and the apex (vertex 4) by all four
/// sides.
pub fn pyramid() -> Model {
    Model {
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.5, 1.0, 0.5),
        ],
        polygons: vec![
            Polygon::from_vertex_indices(vec![1, 0, 4]),
            Polygon::from_vertex_indices(vec![2, 1, 4]),
            Polygon::from_vertex_indices(vec![3, 2, 4]),
            Polygon::from_vertex_indices(vec![0, 3, 4]),
            Polygon::from_vertex_indices(vec![0, 3, 2, 1]),
        ],
        ..Model::default()
    }
}
