use gasket_core::{
    Demo, EmitterKind, GeneratorConfig, GeometryBuffer, GeometryError, GeometryRequest, Generator,
    Primitive, SimplexMode,
};
use glam::Vec3;
use wasm_bindgen::prelude::*;

/// Interleaved vertex: 28 bytes, `position` at offset 0, `color` at offset 12
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3], // 12 bytes
    color: [f32; 4],    // 16 bytes
}

#[wasm_bindgen(start)]
pub fn init() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"[WASM] gasket-wasm loaded".into());
}

fn js_error(err: GeometryError) -> JsError {
    JsError::new(&err.to_string())
}

/// Subdivision output owned on the wasm side. JS reads the buffers in place
/// through `wasm.memory` using the pointer/length pairs.
#[wasm_bindgen]
pub struct FractalGeometry {
    buffer: GeometryBuffer,
    primitive: Primitive,
    gpu_buffer: Vec<GpuVertex>,
    generation_ms: f64,
}

#[wasm_bindgen]
impl FractalGeometry {
    /// `mode`: 0 triangle, 1 tetrahedron. `emitter`: 0 filled, 1 wireframe,
    /// 2 distorted wireframe. `base` holds 3 floats per vertex.
    #[wasm_bindgen(constructor)]
    pub fn new(
        mode: u32,
        emitter: u32,
        base: &[f32],
        depth: i32,
    ) -> Result<FractalGeometry, JsError> {
        let mode = SimplexMode::from_code(mode).map_err(js_error)?;
        let emitter = EmitterKind::from_code(emitter).map_err(js_error)?;
        let depth = GeometryError::check_depth(depth.into()).map_err(js_error)?;
        if base.len() % 3 != 0 {
            return Err(js_error(GeometryError::BaseCoordinates { floats: base.len() }));
        }
        let base_vertices = base.chunks_exact(3).map(Vec3::from_slice).collect();
        let request = GeometryRequest::new(mode, emitter, base_vertices, depth);
        Self::build(&Generator::default(), &request)
    }

    /// Geometry of one of the bundled demos, e.g. `"gasket-3d"`.
    #[wasm_bindgen]
    pub fn demo(name: &str) -> Result<FractalGeometry, JsError> {
        let demo: Demo = name.parse().map_err(js_error)?;
        Self::build(&Generator::default(), &demo.request())
    }

    /// Geometry from a JS request object; `config` may be `undefined`.
    #[wasm_bindgen]
    pub fn from_request(request: JsValue, config: JsValue) -> Result<FractalGeometry, JsError> {
        let request: GeometryRequest = serde_wasm_bindgen::from_value(request)?;
        let config: GeneratorConfig = if config.is_undefined() || config.is_null() {
            GeneratorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Self::build(&Generator::new(config), &request)
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.buffer.positions().as_ptr()
    }

    /// Number of floats behind `positions_ptr`.
    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.buffer.positions().len()
    }

    #[wasm_bindgen]
    pub fn has_colors(&self) -> bool {
        self.buffer.has_colors()
    }

    /// Null when the geometry carries no color stream.
    #[wasm_bindgen]
    pub fn colors_ptr(&self) -> *const f32 {
        self.buffer.colors().map_or(std::ptr::null(), <[f32]>::as_ptr)
    }

    #[wasm_bindgen]
    pub fn colors_len(&self) -> usize {
        self.buffer.colors().map_or(0, <[f32]>::len)
    }

    /// Interleaved position+color buffer (stride 28). Empty without colors.
    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        self.gpu_buffer.len() * std::mem::size_of::<GpuVertex>()
    }

    #[wasm_bindgen]
    pub fn vertex_count(&self) -> usize {
        self.buffer.vertex_count()
    }

    /// `gl.TRIANGLES` or `gl.LINES`.
    #[wasm_bindgen]
    pub fn draw_mode(&self) -> u32 {
        self.primitive.gl_mode()
    }

    #[wasm_bindgen]
    pub fn generation_ms(&self) -> f64 {
        self.generation_ms
    }
}

impl FractalGeometry {
    fn build(generator: &Generator, request: &GeometryRequest) -> Result<FractalGeometry, JsError> {
        let start = js_sys::Date::now();
        let buffer = generator.generate(request).map_err(js_error)?;
        let generation_ms = js_sys::Date::now() - start;

        let mut geometry = FractalGeometry {
            buffer,
            primitive: request.primitive(),
            gpu_buffer: Vec::new(),
            generation_ms,
        };
        geometry.write_gpu_output();
        log::info!(
            "FractalGeometry: {} vertices in {:.1} ms",
            geometry.buffer.vertex_count(),
            generation_ms
        );
        Ok(geometry)
    }

    fn write_gpu_output(&mut self) {
        let Some(colors) = self.buffer.vertex_colors() else {
            return;
        };
        self.gpu_buffer = self
            .buffer
            .points()
            .iter()
            .zip(colors)
            .map(|(p, &color)| GpuVertex {
                position: p.to_array(),
                color,
            })
            .collect();
    }
}

/// Names of the bundled demos.
#[wasm_bindgen]
pub fn demo_names() -> Vec<String> {
    Demo::ALL.iter().map(|d| d.name().to_string()).collect()
}

/// Starting Z rotation of a demo, in radians.
#[wasm_bindgen]
pub fn demo_initial_rotation(name: &str) -> Result<f32, JsError> {
    let demo: Demo = name.parse().map_err(js_error)?;
    Ok(demo.initial_rotation())
}

/// Column-major 4x4 Z rotation for `uniformMatrix4fv`.
#[wasm_bindgen]
pub fn view_rotation(angle: f32) -> Vec<f32> {
    gasket_core::demo::view_rotation(angle).to_cols_array().to_vec()
}
