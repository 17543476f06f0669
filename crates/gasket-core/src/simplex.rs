//! Triangles and tetrahedra, and how each one splits at its edge midpoints.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::midpoint;

pub type Point3 = Vec3;

/// Which simplex a call tree subdivides. Fixed for the whole tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimplexMode {
    Triangle,
    Tetrahedron,
}

impl SimplexMode {
    /// Number of vertices a simplex of this mode has.
    pub const fn vertex_count(self) -> usize {
        match self {
            SimplexMode::Triangle => 3,
            SimplexMode::Tetrahedron => 4,
        }
    }

    /// Decode the integer code used across the JS boundary (0 = triangle, 1 = tetrahedron).
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(SimplexMode::Triangle),
            1 => Ok(SimplexMode::Tetrahedron),
            _ => Err(GeometryError::InvalidCode { what: "simplex mode", value: code }),
        }
    }
}

impl fmt::Display for SimplexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SimplexMode::Triangle => "triangle",
            SimplexMode::Tetrahedron => "tetrahedron",
        })
    }
}

/// Whether a triangle's central child is recursed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coverage {
    /// Corner children only: the Sierpinski gasket, with holes.
    #[default]
    Gasket,
    /// Corners plus the center: a hole-free tessellation.
    Full,
}

/// A simplex that can split itself into half-scale children.
pub trait Simplex: Copy + Sized {
    const MODE: SimplexMode;

    /// Children produced by one subdivision level under `coverage`.
    fn branching(coverage: Coverage) -> u64;

    /// Visit each child, in output order.
    fn split(&self, coverage: Coverage, visit: impl FnMut(Self));

    /// Build from exactly `MODE.vertex_count()` points.
    fn from_points(points: &[Point3]) -> Result<Self>;

    /// Number of leaves a `depth`-level subdivision emits, or `None` on overflow.
    fn leaf_count(depth: u32, coverage: Coverage) -> Option<u64> {
        Self::branching(coverage).checked_pow(depth)
    }
}

fn check_points(mode: SimplexMode, points: &[Point3]) -> Result<()> {
    if points.len() != mode.vertex_count() {
        return Err(GeometryError::VertexCount {
            mode,
            expected: mode.vertex_count(),
            found: points.len(),
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(GeometryError::NonFiniteVertex { index });
    }
    Ok(())
}

/// 2-simplex `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Point3; 3]);

impl Triangle {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Triangle([a, b, c])
    }
}

impl Simplex for Triangle {
    const MODE: SimplexMode = SimplexMode::Triangle;

    fn branching(coverage: Coverage) -> u64 {
        match coverage {
            Coverage::Gasket => 3,
            Coverage::Full => 4,
        }
    }

    fn split(&self, coverage: Coverage, mut visit: impl FnMut(Self)) {
        let [a, b, c] = self.0;
        let ab = midpoint(a, b);
        let bc = midpoint(b, c);
        let ca = midpoint(c, a);

        visit(Triangle([a, ab, ca]));
        visit(Triangle([ab, b, bc]));
        visit(Triangle([ca, bc, c]));
        if coverage == Coverage::Full {
            visit(Triangle([ab, bc, ca]));
        }
    }

    fn from_points(points: &[Point3]) -> Result<Self> {
        check_points(Self::MODE, points)?;
        Ok(Triangle([points[0], points[1], points[2]]))
    }
}

/// 3-simplex `(a, b, c, d)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron(pub [Point3; 4]);

impl Tetrahedron {
    pub fn new(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        Tetrahedron([a, b, c, d])
    }
}

impl Simplex for Tetrahedron {
    const MODE: SimplexMode = SimplexMode::Tetrahedron;

    // The central octahedron is never a tetrahedron, so coverage has no effect.
    fn branching(_coverage: Coverage) -> u64 {
        4
    }

    fn split(&self, _coverage: Coverage, mut visit: impl FnMut(Self)) {
        let [a, b, c, d] = self.0;
        let ab = midpoint(a, b);
        let ac = midpoint(a, c);
        let ad = midpoint(a, d);
        let bc = midpoint(b, c);
        let bd = midpoint(b, d);
        let cd = midpoint(c, d);

        visit(Tetrahedron([a, ab, ac, ad]));
        visit(Tetrahedron([ab, b, bc, bd]));
        visit(Tetrahedron([ac, bc, c, cd]));
        visit(Tetrahedron([ad, bd, cd, d]));
    }

    fn from_points(points: &[Point3]) -> Result<Self> {
        check_points(Self::MODE, points)?;
        Ok(Tetrahedron([points[0], points[1], points[2], points[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        )
    }

    #[test]
    fn test_triangle_gasket_split_order() {
        let mut children = Vec::new();
        tri().split(Coverage::Gasket, |t| children.push(t));
        assert_eq!(children.len(), 3);
        assert_eq!(
            children[0],
            Triangle::new(
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(-0.5, 0.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
            )
        );
        assert_eq!(
            children[1],
            Triangle::new(
                Vec3::new(-0.5, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.5, 0.0, 0.0),
            )
        );
    }

    #[test]
    fn test_triangle_full_split_adds_center_last() {
        let mut children = Vec::new();
        tri().split(Coverage::Full, |t| children.push(t));
        assert_eq!(children.len(), 4);
        assert_eq!(
            children[3],
            Triangle::new(
                Vec3::new(-0.5, 0.0, 0.0),
                Vec3::new(0.5, 0.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
            )
        );
    }

    #[test]
    fn test_tetrahedron_ignores_coverage() {
        let tet = Tetrahedron::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
        let mut gasket = Vec::new();
        let mut full = Vec::new();
        tet.split(Coverage::Gasket, |t| gasket.push(t));
        tet.split(Coverage::Full, |t| full.push(t));
        assert_eq!(gasket.len(), 4);
        assert_eq!(gasket, full);
        assert_eq!(gasket[3].0[3], Vec3::Z);
    }

    #[test]
    fn test_from_points_rejects_wrong_arity() {
        let pts = [Vec3::ZERO, Vec3::X, Vec3::Y];
        assert_eq!(
            Tetrahedron::from_points(&pts),
            Err(GeometryError::VertexCount {
                mode: SimplexMode::Tetrahedron,
                expected: 4,
                found: 3,
            })
        );
        assert!(Triangle::from_points(&pts).is_ok());
    }

    #[test]
    fn test_from_points_rejects_nan() {
        let pts = [Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0), Vec3::Y];
        assert_eq!(
            Triangle::from_points(&pts),
            Err(GeometryError::NonFiniteVertex { index: 1 })
        );
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(Triangle::leaf_count(5, Coverage::Gasket), Some(243));
        assert_eq!(Triangle::leaf_count(5, Coverage::Full), Some(1024));
        assert_eq!(Tetrahedron::leaf_count(0, Coverage::Gasket), Some(1));
        assert_eq!(Triangle::leaf_count(64, Coverage::Full), None);
    }
}
