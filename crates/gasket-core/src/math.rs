use glam::Vec3;

/// RGBA color, each channel in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Component-wise midpoint `(p + q) / 2`.
#[inline]
pub fn midpoint(p: Vec3, q: Vec3) -> Vec3 {
    (p + q) * 0.5
}

/// Rotate `p` about the origin by an angle equal to its distance from the
/// origin in the XY plane. Z is flattened to 0.
///
/// `(x, y, z) -> (x·cos r − y·sin r, x·sin r + y·cos r, 0)`, `r = sqrt(x² + y²)`.
#[inline]
pub fn swirl(p: Vec3) -> Vec3 {
    let r = (p.x * p.x + p.y * p.y).sqrt();
    let (sin_r, cos_r) = r.sin_cos();
    Vec3::new(p.x * cos_r - p.y * sin_r, p.x * sin_r + p.y * cos_r, 0.0)
}

/// Map a clip-space position onto an opaque color: each axis in `[-1, 1]`
/// becomes a channel in `[0, 1]`.
#[inline]
pub fn position_color(p: Vec3) -> Rgba {
    let c = ((p + Vec3::ONE) * 0.5).clamp(Vec3::ZERO, Vec3::ONE);
    [c.x, c.y, c.z, 1.0]
}

/// Triangle on a circle of `radius` centered at the origin, with vertices at
/// the given polar angles in degrees (z = 0).
pub fn polar_triangle(radius: f32, angles_deg: [f32; 3]) -> [Vec3; 3] {
    angles_deg.map(|deg| {
        let (s, c) = deg.to_radians().sin_cos();
        Vec3::new(radius * c, radius * s, 0.0)
    })
}

/// Four fixed face colors, indexed by a tetrahedron face's position in the
/// `(a,c,b), (a,c,d), (a,b,d), (b,c,d)` decomposition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceColorTable(pub [Rgba; 4]);

impl FaceColorTable {
    pub const DEFAULT: FaceColorTable = FaceColorTable([
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 1.0],
    ]);

    #[inline]
    pub fn get(&self, face: usize) -> Rgba {
        self.0[face]
    }
}

impl Default for FaceColorTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
