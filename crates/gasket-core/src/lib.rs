//! Recursive simplex subdivision for the fractal WebGL sketches.
//!
//! A base triangle or tetrahedron is split at its edge midpoints down to a
//! target depth, and every leaf is handed to an [`Emitter`] that appends
//! flat positions (and optionally RGBA colors) to a [`GeometryBuffer`].
//! The buffer is what the page uploads with `bufferData` and draws with
//! `TRIANGLES` or `LINES`.

pub mod buffer;
pub mod config;
pub mod demo;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod math;
pub mod simplex;
pub mod subdivide;

pub use buffer::GeometryBuffer;
pub use config::GeneratorConfig;
pub use demo::Demo;
pub use emitter::{
    DistortedWireframeEmitter, Emitter, EmitterKind, FilledFaceEmitter, Primitive, VertexColor,
    WireframeEmitter,
};
pub use error::{GeometryError, Result};
pub use generate::{generate_geometry, GeometryRequest, Generator};
pub use math::{FaceColorTable, Rgba};
pub use simplex::{Coverage, Point3, Simplex, SimplexMode, Tetrahedron, Triangle};
