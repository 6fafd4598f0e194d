//! Shader compilation and the vignette program.

use wgpu::*;

/// Vignette uniform buffer structure (must match `VignetteUniform` in vignette.rs)
/// Layout: inner_radius, outer_radius, opacity, padding
///
/// Vertex stage:
/// - Input: vertex_index (builtin) - emits one triangle covering the viewport
/// - Output: clip_position (NDC), uv (0,0 top-left to 1,1 bottom-right)
///
/// Fragment stage:
/// - Darkening grows with distance from the center via smoothstep between
///   the inner and outer radius, scaled by opacity
/// - Output is black with that alpha; with premultiplied blending this gives
///   `scene * (1 - opacity * shade)`
pub const VIGNETTE_SHADER: &str = r#"
    struct VignetteUniform {
        inner_radius: f32,
        outer_radius: f32,
        opacity: f32,
        _padding: f32,
    };

    @group(0) @binding(0) var<uniform> vignette: VignetteUniform;

    struct VertexOutput {
        @location(0) uv: vec2<f32>,
        @builtin(position) clip_position: vec4<f32>,
    };

    @vertex
    fn vs_main(@builtin(vertex_index) in_vertex_index: u32) -> VertexOutput {
        var out: VertexOutput;

        // (-1,-1), (3,-1), (-1,3)
        let x = f32((in_vertex_index << 1u) & 2u) * 2.0 - 1.0;
        let y = f32(in_vertex_index & 2u) * 2.0 - 1.0;

        out.clip_position = vec4<f32>(x, y, 0.0, 1.0);
        out.uv = vec2<f32>((x + 1.0) * 0.5, 1.0 - (y + 1.0) * 0.5);
        return out;
    }

    @fragment
    fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
        let dist = length(in.uv - vec2<f32>(0.5, 0.5));
        let shade = smoothstep(vignette.inner_radius, vignette.outer_radius, dist);
        return vec4<f32>(0.0, 0.0, 0.0, vignette.opacity * shade);
    }
"#;

/// Compile a shader module from WGSL source
pub fn compile_shader(device: &Device, label: &str, source: &str) -> ShaderModule {
    device.create_shader_module(ShaderModuleDescriptor {
        label: Some(label),
        source: ShaderSource::Wgsl(source.into()),
    })
}
