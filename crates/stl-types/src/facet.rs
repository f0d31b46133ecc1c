use serde::{Deserialize, Serialize};

use crate::vector::{Normal, Vertex};

/// The two trailing bytes of a binary facet ("attribute byte count").
/// Carried through unmodified; never interpreted.
pub type Extra = [u8; 2];

/// One triangle of the mesh: the normal as read, three corners in file
/// winding order, and the opaque attribute bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub normal: Normal,
    pub vertices: [Vertex; 3],
    pub extra: Extra,
}

impl Facet {
    pub fn new(normal: Normal, vertices: [Vertex; 3]) -> Self {
        Self {
            normal,
            vertices,
            extra: [0, 0],
        }
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }

    /// The twelve floats in on-disk order: normal, then v0, v1, v2.
    pub fn to_floats(&self) -> [f32; 12] {
        let n = self.normal;
        let [a, b, c] = self.vertices;
        [
            n.x, n.y, n.z, a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z,
        ]
    }

    /// Inverse of [`Facet::to_floats`].
    pub fn from_floats(f: [f32; 12], extra: Extra) -> Self {
        Self {
            normal: Normal::new(f[0], f[1], f[2]),
            vertices: [
                Vertex::new(f[3], f[4], f[5]),
                Vertex::new(f[6], f[7], f[8]),
                Vertex::new(f[9], f[10], f[11]),
            ],
            extra,
        }
    }
}
