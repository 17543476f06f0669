use glam::Vec3;

use crate::emitter::Emitter;
use crate::error::{GeometryError, Result};
use crate::math::Rgba;

/// Flat vertex output ready for GPU upload.
///
/// `positions` holds 3 floats per vertex. `colors`, when present, holds 4
/// floats per vertex and always covers every vertex. Whether a buffer has a
/// color stream is fixed at construction from the emitter that fills it.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryBuffer {
    positions: Vec<f32>,
    colors: Option<Vec<f32>>,
}

impl GeometryBuffer {
    /// Empty buffer laid out for `emitter`, with room for `vertices` vertices.
    pub fn for_emitter<S, E>(emitter: &E, vertices: usize) -> Self
    where
        E: Emitter<S> + ?Sized,
    {
        Self::with_capacity(emitter.emits_color(), vertices)
    }

    #[cfg(test)]
    pub(crate) fn new(with_colors: bool) -> Self {
        Self::with_capacity(with_colors, 0)
    }

    pub(crate) fn with_capacity(with_colors: bool, vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            colors: with_colors.then(|| Vec::with_capacity(vertices * 4)),
        }
    }

    /// Append one vertex. `color` is ignored by a position-only buffer and
    /// must be `Some` for a colored one.
    #[inline]
    pub fn push_vertex(&mut self, p: Vec3, color: Option<Rgba>) {
        self.positions.extend_from_slice(&[p.x, p.y, p.z]);
        if let Some(colors) = &mut self.colors {
            debug_assert!(color.is_some(), "colored buffer given an uncolored vertex");
            colors.extend_from_slice(&color.unwrap_or([0.0, 0.0, 0.0, 1.0]));
        }
    }

    /// Append another buffer's vertices after this one's. Both buffers must
    /// agree on having a color stream; on mismatch `self` is left untouched.
    pub fn append(&mut self, other: GeometryBuffer) -> Result<()> {
        if self.has_colors() != other.has_colors() {
            return Err(GeometryError::ColorStreamMismatch {
                buffer_colored: self.has_colors(),
                incoming_colored: other.has_colors(),
            });
        }
        self.extend(other);
        Ok(())
    }

    /// Append a buffer known to share this buffer's layout.
    pub(crate) fn extend(&mut self, mut other: GeometryBuffer) {
        debug_assert_eq!(self.has_colors(), other.has_colors());
        self.positions.append(&mut other.positions);
        if let (Some(colors), Some(mut more)) = (&mut self.colors, other.colors) {
            colors.append(&mut more);
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Color stream, absent when the emitter does not color vertices.
    pub fn colors(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }

    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions viewed as points.
    pub fn points(&self) -> &[Vec3] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors viewed per vertex.
    pub fn vertex_colors(&self) -> Option<&[Rgba]> {
        self.colors.as_deref().map(bytemuck::cast_slice)
    }

    pub fn into_parts(self) -> (Vec<f32>, Option<Vec<f32>>) {
        (self.positions, self.colors)
    }
}
