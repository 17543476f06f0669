use crate::buffer::GeometryBuffer;
use crate::emitter::Emitter;
use crate::error::{GeometryError, Result};
use crate::simplex::{Coverage, Simplex};

/// Recursively subdivide `simplex` `depth` times and return every leaf's
/// output in a buffer laid out for `emitter`.
///
/// Leaves are emitted depth-first in child order, so the output is fully
/// determined by the inputs. The recursion is `depth` frames deep.
pub fn subdivide<S, E>(simplex: S, depth: u32, coverage: Coverage, emitter: &E) -> GeometryBuffer
where
    S: Simplex,
    E: Emitter<S> + ?Sized,
{
    let capacity = leaf_capacity::<S, E>(depth, coverage, emitter);
    let mut out = GeometryBuffer::for_emitter::<S, E>(emitter, capacity);
    recurse(simplex, depth, coverage, emitter, &mut out);
    out
}

/// Like [`subdivide`], appending to an existing buffer. The buffer's color
/// stream must match `emitter.emits_color()`; on mismatch nothing is written.
pub fn subdivide_into<S, E>(
    simplex: S,
    depth: u32,
    coverage: Coverage,
    emitter: &E,
    out: &mut GeometryBuffer,
) -> Result<()>
where
    S: Simplex,
    E: Emitter<S> + ?Sized,
{
    check_layout::<S, E>(emitter, out)?;
    recurse(simplex, depth, coverage, emitter, out);
    Ok(())
}

/// Same output as [`subdivide_into`], with the first level's children
/// subdivided on the rayon pool and concatenated in child order.
#[cfg(feature = "parallel")]
pub fn subdivide_parallel<S, E>(
    simplex: S,
    depth: u32,
    coverage: Coverage,
    emitter: &E,
    out: &mut GeometryBuffer,
) -> Result<()>
where
    S: Simplex + Send + Sync,
    E: Emitter<S> + Sync + ?Sized,
{
    use rayon::prelude::*;

    check_layout::<S, E>(emitter, out)?;
    if depth == 0 {
        emitter.emit(&simplex, out);
        return Ok(());
    }

    let mut children = Vec::with_capacity(S::branching(coverage) as usize);
    simplex.split(coverage, |child| children.push(child));

    let parts: Vec<GeometryBuffer> = children
        .into_par_iter()
        .map(|child| subdivide(child, depth - 1, coverage, emitter))
        .collect();

    for part in parts {
        out.extend(part);
    }
    Ok(())
}

fn recurse<S, E>(simplex: S, depth: u32, coverage: Coverage, emitter: &E, out: &mut GeometryBuffer)
where
    S: Simplex,
    E: Emitter<S> + ?Sized,
{
    if depth == 0 {
        emitter.emit(&simplex, out);
        return;
    }
    simplex.split(coverage, |child| recurse(child, depth - 1, coverage, emitter, out));
}

fn check_layout<S, E>(emitter: &E, out: &GeometryBuffer) -> Result<()>
where
    E: Emitter<S> + ?Sized,
{
    if out.has_colors() != emitter.emits_color() {
        return Err(GeometryError::ColorStreamMismatch {
            buffer_colored: out.has_colors(),
            incoming_colored: emitter.emits_color(),
        });
    }
    Ok(())
}

fn leaf_capacity<S, E>(depth: u32, coverage: Coverage, emitter: &E) -> usize
where
    S: Simplex,
    E: Emitter<S> + ?Sized,
{
    S::leaf_count(depth, coverage)
        .and_then(|leaves| leaves.checked_mul(emitter.vertices_per_leaf() as u64))
        .and_then(|vertices| usize::try_from(vertices).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{FilledFaceEmitter, VertexColor, WireframeEmitter};
    use crate::simplex::{Tetrahedron, Triangle};
    use glam::Vec3;

    fn tri() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        )
    }

    #[test]
    fn test_depth_zero_emits_once() {
        let out = subdivide(tri(), 0, Coverage::Gasket, &FilledFaceEmitter::default());
        assert_eq!(out.points(), &tri().0);
    }

    #[test]
    fn test_gasket_leaf_count() {
        for depth in 0..6 {
            let out = subdivide(tri(), depth, Coverage::Gasket, &FilledFaceEmitter::default());
            assert_eq!(out.vertex_count(), 3 * 3usize.pow(depth), "depth {depth}");
        }
    }

    #[test]
    fn test_full_leaf_count() {
        let out = subdivide(tri(), 3, Coverage::Full, &WireframeEmitter::default());
        assert_eq!(out.vertex_count(), 6 * 64);
    }

    #[test]
    fn test_tetra_leaf_count() {
        let tet = Tetrahedron::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
        let out = subdivide(tet, 2, Coverage::Gasket, &FilledFaceEmitter::default());
        assert_eq!(out.vertex_count(), 12 * 16);
        assert_eq!(out.colors().map(<[f32]>::len), Some(4 * 12 * 16));
    }

    #[test]
    fn test_fixed_color_wireframe_keeps_colors() {
        let blue = [0.0, 0.0, 1.0, 1.0];
        let emitter = WireframeEmitter::new(VertexColor::Fixed(blue));
        let out = subdivide(tri(), 2, Coverage::Gasket, &emitter);
        let colors = out.vertex_colors().expect("fixed color should produce a color stream");
        assert_eq!(colors.len(), out.vertex_count());
        assert!(colors.iter().all(|c| *c == blue));
    }

    #[test]
    fn test_subdivide_into_rejects_uncolored_buffer_for_colored_emitter() {
        let emitter = WireframeEmitter::new(VertexColor::Position);
        let mut out = GeometryBuffer::new(false);
        assert_eq!(
            subdivide_into(tri(), 1, Coverage::Gasket, &emitter, &mut out),
            Err(GeometryError::ColorStreamMismatch {
                buffer_colored: false,
                incoming_colored: true,
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_subdivide_into_rejects_colored_buffer_for_uncolored_emitter() {
        let mut out = GeometryBuffer::new(true);
        let emitter = WireframeEmitter::default();
        let result = subdivide_into(tri(), 1, Coverage::Gasket, &emitter, &mut out);
        assert!(matches!(
            result,
            Err(GeometryError::ColorStreamMismatch { buffer_colored: true, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_subdivide_into_appends() {
        let emitter = FilledFaceEmitter::default();
        let mut out = subdivide(tri(), 1, Coverage::Gasket, &emitter);
        subdivide_into(tri(), 1, Coverage::Gasket, &emitter, &mut out).unwrap();
        assert_eq!(out.vertex_count(), 2 * 9);
        assert_eq!(out.points()[..9], out.points()[9..]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let emitter = WireframeEmitter::new(VertexColor::Position);
        let seq = subdivide(tri(), 5, Coverage::Full, &emitter);
        let mut par = GeometryBuffer::for_emitter::<Triangle, _>(&emitter, 0);
        subdivide_parallel(tri(), 5, Coverage::Full, &emitter, &mut par).unwrap();
        assert_eq!(seq, par);
    }
}
