//! The hero's 3D shape: geometry, transforms, camera and frame timing.
//!
//! Everything in this module is platform-agnostic and tested natively. The
//! WebGL side lives in [`gl`] and only consumes [`FrameUniforms`] and
//! [`SphereMesh`].
//!
//! Matrices are column-major `[f32; 16]`, matching what
//! `uniformMatrix4fv` expects with `transpose = false`.

pub mod gl;

use std::f32::consts::{PI, TAU};

use thiserror::Error;

use crate::config::SceneConfig;

pub use gl::GlRenderer;

/// Errors raised while setting up or drawing the scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("WebGL is not available on this canvas")]
    ContextUnavailable,

    #[error("shader failed to compile: {0}")]
    Shader(String),

    #[error("shader program failed to link: {0}")]
    Link(String),

    #[error("could not allocate {0} buffer")]
    Buffer(&'static str),

    #[error("uniform `{0}` is missing from the shader program")]
    Uniform(&'static str),

    #[error("`{0}` is not a #rrggbb colour")]
    Color(String),
}

/// Column-major 4x4 matrix.
pub type Mat4 = [f32; 16];

/// Parse `#rrggbb` into linear 0..1 RGB components.
pub fn parse_hex_color(hex: &str) -> Result<[f32; 3], SceneError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.is_ascii())
        .ok_or_else(|| SceneError::Color(hex.to_string()))?;
    let mut rgb = [0.0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| SceneError::Color(hex.to_string()))?;
        *channel = f32::from(byte) / 255.0;
    }
    Ok(rgb)
}

pub mod mat4 {
    //! The handful of matrix operations the scene needs.

    use super::Mat4;

    pub const IDENTITY: Mat4 = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
            }
        }
        out
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        let mut m = IDENTITY;
        m[12] = x;
        m[13] = y;
        m[14] = z;
        m
    }

    pub fn scale(s: f32) -> Mat4 {
        let mut m = IDENTITY;
        m[0] = s;
        m[5] = s;
        m[10] = s;
        m
    }

    pub fn rotation_x(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        [
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]
    }

    pub fn rotation_y(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        [
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]
    }

    pub fn rotation_z(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        [
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]
    }

    /// Rotation in x-then-y-then-z Euler order (`Rx * Ry * Rz`).
    pub fn euler_xyz(x: f32, y: f32, z: f32) -> Mat4 {
        mul(&mul(&rotation_x(x), &rotation_y(y)), &rotation_z(z))
    }

    /// OpenGL-style perspective projection.
    pub fn perspective(fovy_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fovy_radians / 2.0).tan();
        let nf = 1.0 / (near - far);
        [
            f / aspect,
            0.0,
            0.0,
            0.0, //
            0.0,
            f,
            0.0,
            0.0, //
            0.0,
            0.0,
            (far + near) * nf,
            -1.0, //
            0.0,
            0.0,
            2.0 * far * near * nf,
            0.0,
        ]
    }

    /// View matrix for a camera at `eye` looking at `target`.
    pub fn look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
        let z = normalize(sub(eye, target));
        let x = normalize(cross(up, z));
        let y = cross(z, x);
        [
            x[0],
            y[0],
            z[0],
            0.0, //
            x[1],
            y[1],
            z[1],
            0.0, //
            x[2],
            y[2],
            z[2],
            0.0, //
            -dot(x, eye),
            -dot(y, eye),
            -dot(z, eye),
            1.0,
        ]
    }

    /// Apply `m` to a point.
    pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
        let w = m[3] * p[0] + m[7] * p[1] + m[11] * p[2] + m[15];
        let w = if w == 0.0 { 1.0 } else { w };
        [
            (m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12]) / w,
            (m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13]) / w,
            (m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14]) / w,
        ]
    }

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn normalize(v: [f32; 3]) -> [f32; 3] {
        let len = dot(v, v).sqrt();
        if len == 0.0 {
            v
        } else {
            [v[0] / len, v[1] / len, v[2] / len]
        }
    }
}

/// Indexed UV sphere with per-vertex normals.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    /// xyz triples
    pub positions: Vec<f32>,
    /// xyz triples, unit length
    pub normals: Vec<f32>,
    pub indices: Vec<u16>,
}

impl SphereMesh {
    /// Build a sphere of `radius` with `segments` slices and stacks.
    ///
    /// `segments` must keep `(segments + 1)^2` within `u16`; see
    /// [`crate::config::MAX_SEGMENTS`].
    pub fn uv(radius: f32, segments: u32) -> Self {
        let segments = segments.clamp(3, crate::config::MAX_SEGMENTS);
        let ring = segments + 1;
        let vertex_count = (ring * ring) as usize;
        let mut positions = Vec::with_capacity(vertex_count * 3);
        let mut normals = Vec::with_capacity(vertex_count * 3);

        for iy in 0..=segments {
            let phi = iy as f32 / segments as f32 * PI;
            for ix in 0..=segments {
                let theta = ix as f32 / segments as f32 * TAU;
                let n = [
                    -theta.cos() * phi.sin(),
                    phi.cos(),
                    theta.sin() * phi.sin(),
                ];
                normals.extend_from_slice(&n);
                positions.extend_from_slice(&[n[0] * radius, n[1] * radius, n[2] * radius]);
            }
        }

        // Pole rows would produce zero-area triangles; skip them.
        let mut indices = Vec::with_capacity((segments * (segments - 1) * 6) as usize);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = (iy * ring + ix + 1) as u16;
                let b = (iy * ring + ix) as u16;
                let c = ((iy + 1) * ring + ix) as u16;
                let d = ((iy + 1) * ring + ix + 1) as u16;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != segments - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Mesh rotation after `elapsed_secs`, as (x, y) radians.
pub fn rotation_at(elapsed_secs: f32, scene: &SceneConfig) -> (f32, f32) {
    (
        elapsed_secs * scene.rotation_rate_x,
        elapsed_secs * scene.rotation_rate_y,
    )
}

/// Gentle bob and tilt applied around the rotating mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatOffset {
    /// Vertical offset, world units
    pub y: f32,
    /// Tilt about x, y, z (radians)
    pub tilt: [f32; 3],
}

impl FloatOffset {
    pub fn at(elapsed_secs: f32, scene: &SceneConfig) -> Self {
        let phase = elapsed_secs / 4.0 * scene.float_speed;
        let (s, c) = phase.sin_cos();
        let ri = scene.rotation_intensity;
        Self {
            y: s / 10.0 * scene.float_intensity,
            tilt: [c / 8.0 * ri, s / 8.0 * ri, s / 20.0 * ri],
        }
    }
}

/// Camera orbiting the origin at a fixed distance.
///
/// Dragging changes azimuth and polar angle only: there is no zoom and no
/// pan, so the distance and target never change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    distance: f32,
    /// Angle around +y, from +z towards +x
    azimuth: f32,
    /// Angle from +y
    polar: f32,
}

/// Keeps the camera off the poles, where `look_at` degenerates.
const POLAR_MARGIN: f32 = 1e-3;

impl OrbitCamera {
    /// Place the camera at `position`, looking at the origin.
    pub fn from_position(position: [f32; 3]) -> Self {
        let [x, y, z] = position;
        let distance = (x * x + y * y + z * z).sqrt().max(f32::EPSILON);
        Self {
            distance,
            azimuth: x.atan2(z),
            polar: (y / distance).clamp(-1.0, 1.0).acos(),
        }
    }

    /// Orbit by a pointer delta, in CSS px.
    ///
    /// A drag across the full viewport height turns the camera by
    /// `2π * rotate_speed`, horizontally and vertically alike.
    pub fn orbit(&mut self, dx: f32, dy: f32, viewport_height: f32, rotate_speed: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let per_px = TAU / viewport_height * rotate_speed;
        self.azimuth -= dx * per_px;
        self.polar = (self.polar - dy * per_px).clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
    }

    pub fn eye(&self) -> [f32; 3] {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        [
            self.distance * sp * sa,
            self.distance * cp,
            self.distance * sp * ca,
        ]
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn view(&self) -> Mat4 {
        mat4::look_at(self.eye(), [0.0; 3], [0.0, 1.0, 0.0])
    }
}

/// Pointer-drag state feeding an [`OrbitCamera`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub camera: OrbitCamera,
    grab: Option<(f32, f32)>,
}

impl OrbitControls {
    pub fn new(camera: OrbitCamera) -> Self {
        Self { camera, grab: None }
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.grab = Some((x, y));
    }

    /// Pointer moved; orbits only while pressed.
    pub fn drag_to(&mut self, x: f32, y: f32, viewport_height: f32, rotate_speed: f32) {
        if let Some((gx, gy)) = self.grab {
            self.camera
                .orbit(x - gx, y - gy, viewport_height, rotate_speed);
            self.grab = Some((x, y));
        }
    }

    pub fn release(&mut self) {
        self.grab = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

/// Converts `requestAnimationFrame` timestamps into seconds since the first
/// frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    origin_ms: Option<f64>,
}

impl FrameClock {
    pub fn elapsed_secs(&mut self, timestamp_ms: f64) -> f32 {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        ((timestamp_ms - origin).max(0.0) / 1000.0) as f32
    }
}

/// Everything the shader needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: [f32; 3],
    /// Distortion phase (elapsed seconds times distortion speed)
    pub phase: f32,
}

impl FrameUniforms {
    pub fn compute(
        elapsed_secs: f32,
        aspect: f32,
        camera: &OrbitCamera,
        scene: &SceneConfig,
    ) -> Self {
        let (rx, ry) = rotation_at(elapsed_secs, scene);
        let float = FloatOffset::at(elapsed_secs, scene);

        let group = mat4::mul(
            &mat4::translation(0.0, float.y, 0.0),
            &mat4::euler_xyz(float.tilt[0], float.tilt[1], float.tilt[2]),
        );
        let mesh = mat4::mul(&mat4::euler_xyz(rx, ry, 0.0), &mat4::scale(scene.scale));
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };

        Self {
            model: mat4::mul(&group, &mesh),
            view: camera.view(),
            projection: mat4::perspective(scene.fov_degrees.to_radians(), aspect, 0.1, 1000.0),
            eye: camera.eye(),
            phase: elapsed_secs * scene.distort_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn close3(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| close(*x, *y))
    }

    #[test]
    fn rotation_starts_at_zero_and_follows_rates() {
        let scene = SceneConfig::default();
        assert_eq!(rotation_at(0.0, &scene), (0.0, 0.0));
        let (x, y) = rotation_at(10.0, &scene);
        assert!(close(x, 2.0));
        assert!(close(y, 3.0));
    }

    #[test]
    fn frame_clock_counts_from_first_frame() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.elapsed_secs(1234.0), 0.0);
        assert!(close(clock.elapsed_secs(2734.0), 1.5));
    }

    #[test]
    fn sphere_has_expected_topology() {
        let mesh = SphereMesh::uv(1.0, 4);
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        // 2n(n-1) triangles once the pole rows are trimmed
        assert_eq!(mesh.indices.len(), 3 * 2 * 4 * 3);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = SphereMesh::uv(2.0, 8);
        for p in mesh.positions.chunks(3) {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!(close(len, 2.0));
        }
    }

    #[test]
    fn default_segments_fit_u16_indices() {
        let mesh = SphereMesh::uv(1.0, SceneConfig::default().segments);
        assert_eq!(mesh.vertex_count(), 101 * 101);
    }

    #[test]
    fn camera_starts_where_configured() {
        let camera = OrbitCamera::from_position([0.0, 0.0, 5.0]);
        assert!(close3(camera.eye(), [0.0, 0.0, 5.0]));
        let origin = mat4::transform_point(&camera.view(), [0.0, 0.0, 0.0]);
        assert!(close3(origin, [0.0, 0.0, -5.0]));
    }

    #[test]
    fn orbit_keeps_distance_and_never_flips() {
        let mut camera = OrbitCamera::from_position([0.0, 0.0, 5.0]);
        camera.orbit(250.0, 0.0, 1000.0, 1.0);
        assert!(close(camera.distance(), 5.0));
        let eye = camera.eye();
        assert!(close((eye[0] * eye[0] + eye[1] * eye[1] + eye[2] * eye[2]).sqrt(), 5.0));
        // quarter turn to the left puts the camera on -x
        assert!(close3(eye, [-5.0, 0.0, 0.0]));

        camera.orbit(0.0, 10_000.0, 1000.0, 1.0);
        assert!(camera.eye()[1] > 4.99);
    }

    #[test]
    fn controls_only_orbit_while_pressed() {
        let start = OrbitCamera::from_position([0.0, 0.0, 5.0]);
        let mut controls = OrbitControls::new(start);
        controls.drag_to(100.0, 0.0, 800.0, 1.0);
        assert_eq!(controls.camera, start);

        controls.press(0.0, 0.0);
        controls.drag_to(100.0, 0.0, 800.0, 1.0);
        assert_ne!(controls.camera, start);
        controls.release();
        let after = controls.camera;
        controls.drag_to(300.0, 50.0, 800.0, 1.0);
        assert_eq!(controls.camera, after);
        assert!(!controls.is_dragging());
    }

    #[test]
    fn float_offset_bobs_within_intensity() {
        let scene = SceneConfig::default();
        for t in [0.0, 1.0, 3.3, 12.5] {
            let f = FloatOffset::at(t, &scene);
            assert!(f.y.abs() <= 0.1 * scene.float_intensity + 1e-6);
            assert!(f.tilt[0].abs() <= 0.125 + 1e-6);
        }
    }

    #[test]
    fn projection_maps_near_plane_to_minus_one() {
        let p = mat4::perspective(75f32.to_radians(), 1.0, 0.1, 1000.0);
        let near = mat4::transform_point(&p, [0.0, 0.0, -0.1]);
        assert!(close(near[2], -1.0));
    }

    #[test]
    fn frame_uniforms_scale_the_mesh() {
        let scene = SceneConfig::default();
        let camera = OrbitCamera::from_position(scene.camera_position);
        let frame = FrameUniforms::compute(0.0, 16.0 / 9.0, &camera, &scene);
        // at t=0 the mesh is unrotated; only the float tilt and scale apply
        let top = mat4::transform_point(&frame.model, [0.0, 1.0, 0.0]);
        let len = (top[0] * top[0] + (top[1] - FloatOffset::at(0.0, &scene).y).powi(2) + top[2] * top[2]).sqrt();
        assert!(close(len, scene.scale));
        assert_eq!(frame.phase, 0.0);
    }

    #[test]
    fn hex_colours() {
        let rgb = parse_hex_color("#4f46e5").unwrap();
        assert!(close(rgb[0], 0x4f as f32 / 255.0));
        assert!(close(rgb[2], 0xe5 as f32 / 255.0));
        assert!(matches!(parse_hex_color("4f46e5"), Err(SceneError::Color(_))));
        assert!(matches!(parse_hex_color("#4f46"), Err(SceneError::Color(_))));
        assert!(matches!(parse_hex_color("#zzzzzz"), Err(SceneError::Color(_))));
    }
}
