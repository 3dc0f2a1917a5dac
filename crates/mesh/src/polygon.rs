/// A single face of a model.
///
/// A polygon does not own its geometry. Each entry in `vertex_indices` is an
/// index into the owning [`Model`](crate::Model)'s vertex list, and likewise
/// for the texture and normal index lists. Storing indices instead of
/// positions keeps shared vertices shared: a cube needs 8 stored positions
/// rather than 24, and moving a vertex moves every face that references it.
///
/// A well-formed polygon carries at least 3 vertex indices, each smaller
/// than the owning model's vertex count. The loader that populates the model
/// is responsible for both; nothing here re-validates on access.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    pub vertex_indices: Vec<usize>,
    pub texture_vertex_indices: Vec<usize>,
    pub normal_indices: Vec<usize>,
}

impl Polygon {
    /// A polygon with vertex indices only.
    pub fn from_vertex_indices(vertex_indices: Vec<usize>) -> Self {
        Self {
            vertex_indices,
            texture_vertex_indices: Vec::new(),
            normal_indices: Vec::new(),
        }
    }
}
