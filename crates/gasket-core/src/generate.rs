//! Request validation and the single entry point from rendering code.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::buffer::GeometryBuffer;
use crate::config::GeneratorConfig;
use crate::emitter::{
    DistortedWireframeEmitter, Emitter, EmitterKind, FilledFaceEmitter, Primitive, VertexColor,
    WireframeEmitter,
};
use crate::error::{GeometryError, Result};
use crate::math::FaceColorTable;
use crate::simplex::{Coverage, Point3, Simplex, SimplexMode, Tetrahedron, Triangle};
use crate::subdivide;

/// Everything needed to produce one geometry buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryRequest {
    pub mode: SimplexMode,
    pub emitter: EmitterKind,
    pub base_vertices: Vec<Point3>,
    pub depth: u32,
    /// Triangle-leaf coloring. Tetrahedron faces always use `face_colors`.
    #[serde(default)]
    pub color: VertexColor,
    #[serde(default)]
    pub face_colors: Option<[[f32; 4]; 4]>,
}

impl GeometryRequest {
    pub fn new(
        mode: SimplexMode,
        emitter: EmitterKind,
        base_vertices: Vec<Point3>,
        depth: u32,
    ) -> Self {
        Self {
            mode,
            emitter,
            base_vertices,
            depth,
            color: VertexColor::None,
            face_colors: None,
        }
    }

    pub fn with_color(mut self, color: VertexColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_face_colors(mut self, face_colors: FaceColorTable) -> Self {
        self.face_colors = Some(face_colors.0);
        self
    }

    pub fn primitive(&self) -> Primitive {
        self.emitter.primitive()
    }
}

/// Validates requests against a [`GeneratorConfig`] and runs the subdivider.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    pub config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, request: &GeometryRequest) -> Result<GeometryBuffer> {
        let result = self.dispatch(request);
        match &result {
            Ok(buffer) => debug!(
                "generated {} {} {} vertices at depth {} (colors: {})",
                buffer.vertex_count(),
                request.mode,
                request.emitter,
                request.depth,
                buffer.has_colors(),
            ),
            Err(err) => warn!("rejected geometry request: {err}"),
        }
        result
    }

    fn dispatch(&self, request: &GeometryRequest) -> Result<GeometryBuffer> {
        if request.depth > self.config.max_depth {
            return Err(GeometryError::DepthTooLarge {
                depth: request.depth.into(),
                max: self.config.max_depth,
            });
        }

        let coverage = request.emitter.coverage();
        match (request.mode, request.emitter) {
            (SimplexMode::Triangle, EmitterKind::Filled) => {
                let emitter = FilledFaceEmitter::new(request.color);
                self.run::<Triangle, _>(request, coverage, &emitter)
            }
            (SimplexMode::Triangle, EmitterKind::Wireframe) => {
                self.run::<Triangle, _>(request, coverage, &WireframeEmitter::new(request.color))
            }
            (SimplexMode::Triangle, EmitterKind::DistortedWireframe) => self.run::<Triangle, _>(
                request,
                coverage,
                &DistortedWireframeEmitter::new(request.color),
            ),
            (SimplexMode::Tetrahedron, EmitterKind::Filled) => {
                let table = request.face_colors.map(FaceColorTable).unwrap_or_default();
                let emitter = FilledFaceEmitter::new(request.color).with_face_colors(table);
                self.run::<Tetrahedron, _>(request, coverage, &emitter)
            }
            (mode @ SimplexMode::Tetrahedron, emitter) => {
                Err(GeometryError::UnsupportedCombination { mode, emitter })
            }
        }
    }

    fn run<S, E>(
        &self,
        request: &GeometryRequest,
        coverage: Coverage,
        emitter: &E,
    ) -> Result<GeometryBuffer>
    where
        S: Simplex + Send + Sync,
        E: Emitter<S> + Sync,
    {
        let base = S::from_points(&request.base_vertices)?;
        let vertices = self.projected_vertices::<S, E>(request.depth, coverage, emitter)?;

        let mut out = GeometryBuffer::for_emitter::<S, E>(emitter, vertices as usize);
        #[cfg(feature = "parallel")]
        if self.use_parallel(request.depth) {
            subdivide::subdivide_parallel(base, request.depth, coverage, emitter, &mut out)?;
            return Ok(out);
        }
        subdivide::subdivide_into(base, request.depth, coverage, emitter, &mut out)?;
        Ok(out)
    }

    fn projected_vertices<S, E>(&self, depth: u32, coverage: Coverage, emitter: &E) -> Result<u64>
    where
        S: Simplex,
        E: Emitter<S>,
    {
        let max = self.config.max_vertices;
        let per_leaf = emitter.vertices_per_leaf() as u64;
        let projected = S::leaf_count(depth, coverage)
            .map_or(u64::MAX, |leaves| leaves.saturating_mul(per_leaf));
        if projected > max {
            return Err(GeometryError::TooLarge { projected, max });
        }
        Ok(projected)
    }

    #[cfg(feature = "parallel")]
    fn use_parallel(&self, depth: u32) -> bool {
        self.config.parallel && depth >= self.config.parallel_min_depth
    }
}

/// Generate the geometry for `depth` subdivisions of `base_vertices` with
/// the default limits and no vertex coloring (tetrahedron faces still get
/// the default face colors).
pub fn generate_geometry(
    mode: SimplexMode,
    emitter_kind: EmitterKind,
    base_vertices: &[Point3],
    depth: u32,
) -> Result<GeometryBuffer> {
    let request = GeometryRequest::new(mode, emitter_kind, base_vertices.to_vec(), depth);
    Generator::default().generate(&request)
}
