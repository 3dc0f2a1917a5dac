//! Normal estimation over an indexed polygon mesh.
//!
//! Both entry points read the mesh and return new vectors; the mesh itself
//! is never written to. Structural contract violations (too-short polygons,
//! empty collections) fail with [`NormalError`]. Numeric degeneracies do
//! not: a polygon whose first three vertices are collinear yields a zero
//! face normal, and a vertex with no incident polygons yields NaN
//! components. Callers that can encounter those inputs must guard
//! themselves.

use facet_math::{geometry, Vec3, Vector};
use facet_mesh::Polygon;
use thiserror::Error;

/// Structural errors raised by normal estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalError {
    #[error("polygon vertex count must be greater than or equal to 3")]
    ShortPolygon { found: usize },

    #[error("vertices count must be greater than or equal to 3")]
    TooFewVertices { found: usize },

    #[error("vertex array must be not empty")]
    NoVertices,

    #[error("polygon array must be not empty")]
    NoPolygons,
}

/// The unit normal of a polygon's plane.
///
/// Uses the polygon's first three index-referenced positions; indices past
/// the third are ignored, and planarity of higher-order polygons is not
/// validated. The winding order of the indices decides the sign: supply
/// consistent winding to get consistent outward orientation.
pub fn polygon_normal(polygon: &Polygon, vertices: &[Vec3]) -> Result<Vec3, NormalError> {
    let indices = &polygon.vertex_indices;
    if indices.len() < 3 {
        return Err(NormalError::ShortPolygon {
            found: indices.len(),
        });
    }
    if vertices.len() < 3 {
        return Err(NormalError::TooFewVertices {
            found: vertices.len(),
        });
    }

    let p0 = vertices[indices[0]];
    let p1 = vertices[indices[1]];
    let p2 = vertices[indices[2]];

    let mut normal = geometry::cross(p1 - p0, p2 - p0);
    normal.nor();
    Ok(normal)
}

/// The unit normal at a vertex: the averaged face normals of every polygon
/// incident to it.
///
/// A polygon is incident when at least one of its indices references a
/// position equal to `vertex` bit-for-bit; coincident positions stored at
/// different indices count only on exact float equality. The average
/// divides by the incident count unguarded, so a vertex no polygon touches
/// comes back as NaN rather than an error.
pub fn vertex_normal(
    vertex: Vec3,
    vertices: &[Vec3],
    polygons: &[Polygon],
) -> Result<Vec3, NormalError> {
    let surrounding = polygons_surrounding_vertex(vertex, vertices, polygons)?;

    let mut sum = Vec3::ZERO;
    for &polygon in &surrounding {
        sum += polygon_normal(polygon, vertices)?;
    }

    let mut normal = sum / surrounding.len() as f32;
    normal.nor();
    Ok(normal)
}

fn polygons_surrounding_vertex<'a>(
    vertex: Vec3,
    vertices: &[Vec3],
    polygons: &'a [Polygon],
) -> Result<Vec<&'a Polygon>, NormalError> {
    if vertices.is_empty() {
        return Err(NormalError::NoVertices);
    }
    if polygons.is_empty() {
        return Err(NormalError::NoPolygons);
    }

    let mut surrounding = Vec::new();
    for polygon in polygons {
        if polygon
            .vertex_indices
            .iter()
            .any(|&i| vertices[i] == vertex)
        {
            surrounding.push(polygon);
        }
    }
    Ok(surrounding)
}
