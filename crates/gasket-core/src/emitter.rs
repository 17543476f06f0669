//! Leaf emitters: what a leaf simplex turns into in the output buffer.
//!
//! Each emitter is a small value type implementing [`Emitter`] for the
//! simplex kinds it understands. The subdivider calls `emit` once per leaf.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::buffer::GeometryBuffer;
use crate::error::{GeometryError, Result};
use crate::math::{position_color, swirl, FaceColorTable, Rgba};
use crate::simplex::{Coverage, Tetrahedron, Triangle};

/// Strategy invoked once per leaf simplex.
pub trait Emitter<S> {
    /// Vertices appended per leaf.
    fn vertices_per_leaf(&self) -> usize;

    /// Whether this emitter writes a color stream.
    fn emits_color(&self) -> bool;

    fn emit(&self, leaf: &S, out: &mut GeometryBuffer);
}

/// How an emitter colors the vertices it appends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VertexColor {
    /// No color stream.
    #[default]
    None,
    /// The same RGBA on every vertex.
    Fixed(Rgba),
    /// Derived from the emitted vertex position.
    Position,
}

impl VertexColor {
    pub fn is_some(&self) -> bool {
        !matches!(self, VertexColor::None)
    }

    #[inline]
    fn at(&self, p: Vec3) -> Option<Rgba> {
        match *self {
            VertexColor::None => None,
            VertexColor::Fixed(c) => Some(c),
            VertexColor::Position => Some(position_color(p)),
        }
    }
}

/// GPU primitive an emitter's output is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Lines,
}

impl Primitive {
    /// WebGL `drawArrays` mode constant.
    pub const fn gl_mode(self) -> u32 {
        match self {
            Primitive::Triangles => 0x0004,
            Primitive::Lines => 0x0001,
        }
    }
}

/// Selectable emitter family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmitterKind {
    Filled,
    Wireframe,
    DistortedWireframe,
}

impl EmitterKind {
    pub const fn primitive(self) -> Primitive {
        match self {
            EmitterKind::Filled => Primitive::Triangles,
            EmitterKind::Wireframe | EmitterKind::DistortedWireframe => Primitive::Lines,
        }
    }

    /// Triangle coverage used with this emitter. The distorted (tessella)
    /// variant fills the center triangles; the others draw a gasket.
    pub const fn coverage(self) -> Coverage {
        match self {
            EmitterKind::DistortedWireframe => Coverage::Full,
            EmitterKind::Filled | EmitterKind::Wireframe => Coverage::Gasket,
        }
    }

    /// Decode the integer code used across the JS boundary.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(EmitterKind::Filled),
            1 => Ok(EmitterKind::Wireframe),
            2 => Ok(EmitterKind::DistortedWireframe),
            _ => Err(GeometryError::InvalidCode { what: "emitter", value: code }),
        }
    }
}

impl fmt::Display for EmitterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmitterKind::Filled => "filled",
            EmitterKind::Wireframe => "wireframe",
            EmitterKind::DistortedWireframe => "distorted wireframe",
        })
    }
}

// ---------- filled faces ----------

/// Solid triangles. A triangle leaf becomes itself; a tetrahedron leaf
/// becomes its four faces, each tagged with its face color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilledFaceEmitter {
    /// Coloring of triangle leaves.
    pub color: VertexColor,
    pub face_colors: FaceColorTable,
}

impl FilledFaceEmitter {
    pub fn new(color: VertexColor) -> Self {
        Self {
            color,
            face_colors: FaceColorTable::DEFAULT,
        }
    }

    pub fn with_face_colors(mut self, face_colors: FaceColorTable) -> Self {
        self.face_colors = face_colors;
        self
    }
}

impl Emitter<Triangle> for FilledFaceEmitter {
    fn vertices_per_leaf(&self) -> usize {
        3
    }

    fn emits_color(&self) -> bool {
        self.color.is_some()
    }

    fn emit(&self, leaf: &Triangle, out: &mut GeometryBuffer) {
        for &p in &leaf.0 {
            out.push_vertex(p, self.color.at(p));
        }
    }
}

/// Fixed face winding; position `i` is colored with `FaceColorTable[i]`.
const TETRA_FACES: [[usize; 3]; 4] = [[0, 2, 1], [0, 2, 3], [0, 1, 3], [1, 2, 3]];

impl Emitter<Tetrahedron> for FilledFaceEmitter {
    fn vertices_per_leaf(&self) -> usize {
        12
    }

    fn emits_color(&self) -> bool {
        true
    }

    fn emit(&self, leaf: &Tetrahedron, out: &mut GeometryBuffer) {
        for (face, corners) in TETRA_FACES.iter().enumerate() {
            let color = self.face_colors.get(face);
            for &i in corners {
                out.push_vertex(leaf.0[i], Some(color));
            }
        }
    }
}

// ---------- wireframes ----------

#[inline]
fn push_edges(corners: [Vec3; 3], color: VertexColor, out: &mut GeometryBuffer) {
    let [a, b, c] = corners;
    for (p, q) in [(a, b), (b, c), (c, a)] {
        out.push_vertex(p, color.at(p));
        out.push_vertex(q, color.at(q));
    }
}

/// The three edges `(a,b), (b,c), (c,a)` of each leaf triangle as line segments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WireframeEmitter {
    pub color: VertexColor,
}

impl WireframeEmitter {
    pub fn new(color: VertexColor) -> Self {
        Self { color }
    }
}

impl Emitter<Triangle> for WireframeEmitter {
    fn vertices_per_leaf(&self) -> usize {
        6
    }

    fn emits_color(&self) -> bool {
        self.color.is_some()
    }

    fn emit(&self, leaf: &Triangle, out: &mut GeometryBuffer) {
        push_edges(leaf.0, self.color, out);
    }
}

/// Wireframe of the swirled leaf: every vertex goes through [`swirl`]
/// before its edges are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DistortedWireframeEmitter {
    pub color: VertexColor,
}

impl DistortedWireframeEmitter {
    pub fn new(color: VertexColor) -> Self {
        Self { color }
    }
}

impl Emitter<Triangle> for DistortedWireframeEmitter {
    fn vertices_per_leaf(&self) -> usize {
        6
    }

    fn emits_color(&self) -> bool {
        self.color.is_some()
    }

    fn emit(&self, leaf: &Triangle, out: &mut GeometryBuffer) {
        push_edges(leaf.0.map(swirl), self.color, out);
    }
}
