//! Presets for the browser demos: base simplex, depth, emitter and color
//! of each sketch.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::emitter::{EmitterKind, VertexColor};
use crate::error::GeometryError;
use crate::generate::GeometryRequest;
use crate::math::polar_triangle;
use crate::simplex::SimplexMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    /// Filled 2D gasket, 10 levels.
    GasketTriangles,
    /// Sierpinski tetrahedron with per-face colors.
    #[serde(rename = "gasket-3d")]
    Gasket3d,
    /// Blue wireframe gasket.
    TriangleLines,
    /// Black wireframe gasket spun about Z by the page.
    RotatingLines,
    /// Swirled, hole-free wireframe.
    Tessella,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::GasketTriangles,
        Demo::Gasket3d,
        Demo::TriangleLines,
        Demo::RotatingLines,
        Demo::Tessella,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Demo::GasketTriangles => "gasket-triangles",
            Demo::Gasket3d => "gasket-3d",
            Demo::TriangleLines => "triangle-lines",
            Demo::RotatingLines => "rotating-lines",
            Demo::Tessella => "tessella",
        }
    }

    pub fn request(self) -> GeometryRequest {
        let line_triangle = vec![
            Vec3::new(-0.8, -0.8, 0.0),
            Vec3::new(0.0, 0.8, 0.0),
            Vec3::new(0.8, -0.8, 0.0),
        ];
        match self {
            Demo::GasketTriangles => GeometryRequest::new(
                SimplexMode::Triangle,
                EmitterKind::Filled,
                vec![
                    Vec3::new(-1.0, -1.0, 0.0),
                    Vec3::new(0.0, 1.0, 0.0),
                    Vec3::new(1.0, -1.0, 0.0),
                ],
                10,
            ),
            Demo::Gasket3d => GeometryRequest::new(
                SimplexMode::Tetrahedron,
                EmitterKind::Filled,
                vec![
                    Vec3::new(0.0, 0.0, -1.0),
                    Vec3::new(0.0, 0.9428, 0.3333),
                    Vec3::new(-0.8165, -0.4714, 0.3333),
                    Vec3::new(0.8165, -0.4714, 0.3333),
                ],
                5,
            ),
            Demo::TriangleLines => {
                line_request(line_triangle).with_color(VertexColor::Fixed([0.0, 0.0, 1.0, 1.0]))
            }
            Demo::RotatingLines => {
                line_request(line_triangle).with_color(VertexColor::Fixed([0.0, 0.0, 0.0, 1.0]))
            }
            Demo::Tessella => GeometryRequest::new(
                SimplexMode::Triangle,
                EmitterKind::DistortedWireframe,
                polar_triangle(1.0, [90.0, 210.0, -30.0]).to_vec(),
                5,
            ),
        }
    }

    /// Z rotation (radians) the demo starts at.
    pub fn initial_rotation(self) -> f32 {
        match self {
            Demo::RotatingLines => 3.0 * PI,
            _ => 0.0,
        }
    }
}

fn line_request(base: Vec<Vec3>) -> GeometryRequest {
    GeometryRequest::new(SimplexMode::Triangle, EmitterKind::Wireframe, base, 4)
}

/// Model matrix for a rotation of `angle` radians about Z.
pub fn view_rotation(angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle)
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| GeometryError::UnknownDemo(s.to_string()))
    }
}
