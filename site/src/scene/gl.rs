//! WebGL renderer for the hero sphere.
//!
//! Uses WebGL 1 so the shape renders on every browser that can run the page.
//! Geometry and lighting are uploaded once; each frame only sets the
//! transform uniforms and issues one indexed draw call.

use js_sys::{Float32Array, Uint16Array};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader,
    WebGlUniformLocation,
};

use super::{FrameUniforms, SceneError, SphereMesh, parse_hex_color};
use crate::config::SceneConfig;

const VERTEX_SHADER: &str = r#"
attribute vec3 a_position;
attribute vec3 a_normal;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_phase;
uniform float u_distort;

varying vec3 v_normal;
varying vec3 v_world;

void main() {
    vec3 p = a_position;
    float wobble = sin(p.x * 3.0 + u_phase)
        * sin(p.y * 3.0 + u_phase * 1.3)
        * sin(p.z * 3.0 + u_phase * 0.7);
    vec3 displaced = p + a_normal * wobble * u_distort;

    vec4 world = u_model * vec4(displaced, 1.0);
    v_world = world.xyz;
    v_normal = (u_model * vec4(a_normal, 0.0)).xyz;
    gl_Position = u_projection * u_view * world;
}
"#;

// Metal-like Blinn-Phong: weak diffuse, strong specular tinted by the base
// colour. Shininess 48 corresponds to roughness 0.2.
const FRAGMENT_SHADER: &str = r#"
precision mediump float;

uniform vec3 u_color;
uniform vec3 u_eye;
uniform float u_ambient;
uniform vec3 u_dir_position;
uniform vec3 u_dir_color;
uniform float u_dir_intensity;
uniform vec3 u_point_position;
uniform vec3 u_point_color;
uniform float u_point_intensity;

varying vec3 v_normal;
varying vec3 v_world;

const float METALNESS = 0.8;
const float SHININESS = 48.0;

vec3 shade(vec3 n, vec3 v, vec3 l, vec3 light) {
    float diffuse = max(dot(n, l), 0.0);
    float specular = pow(max(dot(n, normalize(l + v)), 0.0), SHININESS);
    vec3 spec_tint = mix(vec3(1.0), u_color, METALNESS);
    return light * (u_color * diffuse * (1.0 - METALNESS * 0.5) + spec_tint * specular);
}

void main() {
    vec3 n = normalize(v_normal);
    vec3 v = normalize(u_eye - v_world);

    vec3 color = u_color * u_ambient;
    color += shade(n, v, normalize(u_dir_position), u_dir_color * u_dir_intensity);
    color += shade(n, v, normalize(u_point_position - v_world), u_point_color * u_point_intensity);

    gl_FragColor = vec4(color, 1.0);
}
"#;

struct Uniforms {
    model: WebGlUniformLocation,
    view: WebGlUniformLocation,
    projection: WebGlUniformLocation,
    phase: WebGlUniformLocation,
    eye: WebGlUniformLocation,
}

/// Owns the GL program and geometry for one canvas.
pub struct GlRenderer {
    gl: Gl,
    canvas: HtmlCanvasElement,
    _program: WebGlProgram,
    _buffers: [WebGlBuffer; 3],
    index_count: i32,
    uniforms: Uniforms,
}

impl GlRenderer {
    /// Compile shaders, upload the sphere and set the static lighting.
    pub fn new(canvas: HtmlCanvasElement, scene: &SceneConfig) -> Result<Self, SceneError> {
        let gl = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<Gl>().ok())
            .ok_or(SceneError::ContextUnavailable)?;

        let vertex = compile_shader(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile_shader(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        gl.use_program(Some(&program));

        let mesh = SphereMesh::uv(scene.radius, scene.segments);
        let positions = upload_attribute(&gl, &program, "a_position", &mesh.positions)?;
        let normals = upload_attribute(&gl, &program, "a_normal", &mesh.normals)?;
        let indices = gl.create_buffer().ok_or(SceneError::Buffer("index"))?;
        gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            Gl::ELEMENT_ARRAY_BUFFER,
            &Uint16Array::from(mesh.indices.as_slice()),
            Gl::STATIC_DRAW,
        );

        let color = parse_hex_color(&scene.color)?;
        let dir_color = parse_hex_color(&scene.directional.color)?;
        let point_color = parse_hex_color(&scene.point.color)?;
        gl.uniform3fv_with_f32_array(Some(&uniform(&gl, &program, "u_color")?), &color);
        gl.uniform1f(
            Some(&uniform(&gl, &program, "u_ambient")?),
            scene.ambient_intensity,
        );
        gl.uniform1f(
            Some(&uniform(&gl, &program, "u_distort")?),
            scene.distort * scene.radius * 0.25,
        );
        gl.uniform3fv_with_f32_array(
            Some(&uniform(&gl, &program, "u_dir_position")?),
            &scene.directional.position,
        );
        gl.uniform3fv_with_f32_array(Some(&uniform(&gl, &program, "u_dir_color")?), &dir_color);
        gl.uniform1f(
            Some(&uniform(&gl, &program, "u_dir_intensity")?),
            scene.directional.intensity,
        );
        gl.uniform3fv_with_f32_array(
            Some(&uniform(&gl, &program, "u_point_position")?),
            &scene.point.position,
        );
        gl.uniform3fv_with_f32_array(
            Some(&uniform(&gl, &program, "u_point_color")?),
            &point_color,
        );
        gl.uniform1f(
            Some(&uniform(&gl, &program, "u_point_intensity")?),
            scene.point.intensity,
        );

        let uniforms = Uniforms {
            model: uniform(&gl, &program, "u_model")?,
            view: uniform(&gl, &program, "u_view")?,
            projection: uniform(&gl, &program, "u_projection")?,
            phase: uniform(&gl, &program, "u_phase")?,
            eye: uniform(&gl, &program, "u_eye")?,
        };

        gl.enable(Gl::DEPTH_TEST);
        gl.enable(Gl::CULL_FACE);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        let index_count = i32::try_from(mesh.indices.len()).map_err(|_| SceneError::Buffer("index"))?;

        Ok(Self {
            gl,
            canvas,
            _program: program,
            _buffers: [positions, normals, indices],
            index_count,
            uniforms,
        })
    }

    /// Match the drawing buffer to the canvas's CSS size. Returns the aspect
    /// ratio to project with.
    pub fn fit_to_display(&self, device_pixel_ratio: f64) -> f32 {
        let css_w = self.canvas.client_width().max(1) as f64;
        let css_h = self.canvas.client_height().max(1) as f64;
        let w = (css_w * device_pixel_ratio).round() as u32;
        let h = (css_h * device_pixel_ratio).round() as u32;
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
        self.gl.viewport(0, 0, w as i32, h as i32);
        (css_w / css_h) as f32
    }

    pub fn draw(&self, frame: &FrameUniforms) {
        let gl = &self.gl;
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
        gl.uniform_matrix4fv_with_f32_array(Some(&self.uniforms.model), false, &frame.model);
        gl.uniform_matrix4fv_with_f32_array(Some(&self.uniforms.view), false, &frame.view);
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.uniforms.projection),
            false,
            &frame.projection,
        );
        gl.uniform1f(Some(&self.uniforms.phase), frame.phase);
        gl.uniform3fv_with_f32_array(Some(&self.uniforms.eye), &frame.eye);
        gl.draw_elements_with_i32(Gl::TRIANGLES, self.index_count, Gl::UNSIGNED_SHORT, 0);
    }
}

fn compile_shader(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, SceneError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SceneError::Shader("could not create shader object".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        Err(SceneError::Shader(
            gl.get_shader_info_log(&shader).unwrap_or_default(),
        ))
    }
}

fn link_program(
    gl: &Gl,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, SceneError> {
    let program = gl
        .create_program()
        .ok_or_else(|| SceneError::Link("could not create program object".into()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    let ok = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        Err(SceneError::Link(
            gl.get_program_info_log(&program).unwrap_or_default(),
        ))
    }
}

fn upload_attribute(
    gl: &Gl,
    program: &WebGlProgram,
    name: &'static str,
    data: &[f32],
) -> Result<WebGlBuffer, SceneError> {
    let buffer = gl.create_buffer().ok_or(SceneError::Buffer(name))?;
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &Float32Array::from(data), Gl::STATIC_DRAW);

    let location = gl.get_attrib_location(program, name);
    let location = u32::try_from(location).map_err(|_| SceneError::Buffer(name))?;
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, 3, Gl::FLOAT, false, 0, 0);
    Ok(buffer)
}

fn uniform(
    gl: &Gl,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, SceneError> {
    gl.get_uniform_location(program, name)
        .ok_or(SceneError::Uniform(name))
}
