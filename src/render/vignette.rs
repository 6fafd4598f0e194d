//! Full-screen vignette composited through an egui-wgpu paint callback.
//! Internal GPU resources are created once at startup and stored in the
//! egui-wgpu callback resource map.

use bytemuck::{Pod, Zeroable};
use egui::Vec2;
use egui_wgpu::{CallbackResources, CallbackTrait, RenderState};
use wgpu::util::DeviceExt;
use wgpu::*;
use crate::render::shader::{compile_shader, VIGNETTE_SHADER};

/// Radial darkening parameters, all in normalized screen units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VignetteParams {
    /// Distance from center where darkening starts
    pub inner_radius: f32,
    /// Distance from center where darkening reaches full strength
    pub outer_radius: f32,
    /// Blend weight of the darkened image over the scene
    pub opacity: f32,
}

impl Default for VignetteParams {
    fn default() -> Self {
        Self {
            inner_radius: 0.3,
            outer_radius: 1.0,
            opacity: 0.5,
        }
    }
}

impl VignetteParams {
    /// Darkening at `uv` (0,0 top-left, 1,1 bottom-right), in [0, opacity].
    /// The scene at `uv` is multiplied by `1 - shade(uv)`.
    pub fn shade(&self, uv: Vec2) -> f32 {
        let dist = (uv - Vec2::splat(0.5)).length();
        self.opacity * smoothstep(self.inner_radius, self.outer_radius, dist)
    }
}

/// GLSL/WGSL smoothstep
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Uniform buffer data (must match VignetteUniform in shader.rs)
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct VignetteUniform {
    inner_radius: f32,
    outer_radius: f32,
    opacity: f32,
    _padding: f32,
}

impl From<VignetteParams> for VignetteUniform {
    fn from(params: VignetteParams) -> Self {
        Self {
            inner_radius: params.inner_radius,
            outer_radius: params.outer_radius,
            opacity: params.opacity,
            _padding: 0.0,
        }
    }
}

/// GPU objects for drawing the vignette
pub struct VignetteResources {
    pipeline: RenderPipeline,
    bind_group: BindGroup,
}

impl VignetteResources {
    /// Build the vignette pipeline for the host's render target
    pub fn new(device: &Device, target_format: TextureFormat, params: VignetteParams) -> Self {
        let shader = compile_shader(device, "Vignette Shader", VIGNETTE_SHADER);

        let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Vignette Bind Group Layout"),
            entries: &[BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Vignette Uniform Buffer"),
            contents: bytemuck::bytes_of(&VignetteUniform::from(params)),
            usage: BufferUsages::UNIFORM,
        });

        let bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Vignette Bind Group"),
            layout: &bind_group_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Vignette Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Vignette Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[],
                compilation_options: PipelineCompilationOptions::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(ColorTargetState {
                    format: target_format,
                    // egui renders with premultiplied alpha
                    blend: Some(BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: PipelineCompilationOptions::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        Self {
            pipeline,
            bind_group,
        }
    }

    /// Create the resources and hand them to egui-wgpu
    pub fn install(render_state: &RenderState, params: VignetteParams) {
        let resources = Self::new(&render_state.device, render_state.target_format, params);
        render_state
            .renderer
            .write()
            .callback_resources
            .insert(resources);
        log::info!("Vignette pipeline installed ({:?})", render_state.target_format);
    }
}

/// Paint callback that draws the installed vignette over the callback rect.
/// Parameters live in the uniform written by `VignetteResources::new`.
pub struct VignetteCallback;

impl CallbackTrait for VignetteCallback {
    fn paint<'a>(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut RenderPass<'a>,
        callback_resources: &'a CallbackResources,
    ) {
        // Not installed on non-wgpu backends
        let Some(resources) = callback_resources.get::<VignetteResources>() else {
            return;
        };
        render_pass.set_pipeline(&resources.pipeline);
        render_pass.set_bind_group(0, &resources.bind_group, &[]);
        render_pass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_default_params() {
        let params = VignetteParams::default();
        assert_eq!(params.inner_radius, 0.3);
        assert_eq!(params.outer_radius, 1.0);
        assert_eq!(params.opacity, 0.5);
    }

    #[test]
    fn test_center_is_untouched() {
        let params = VignetteParams::default();
        assert!(params.shade(vec2(0.5, 0.5)).abs() < EPS);
        // Still inside the inner radius
        assert!(params.shade(vec2(0.5, 0.79)).abs() < EPS);
    }

    #[test]
    fn test_full_strength_beyond_outer_radius() {
        let params = VignetteParams::default();
        assert!((params.shade(vec2(1.5, 0.5)) - 0.5).abs() < EPS);
        assert!((params.shade(vec2(-0.5, 0.5)) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_corners_partially_darkened() {
        let params = VignetteParams::default();
        // Corner distance is ~0.707
        let corner = params.shade(vec2(0.0, 0.0));
        assert!(corner > 0.0 && corner < 0.5, "corner shade {}", corner);
        assert!((corner - params.shade(vec2(1.0, 1.0))).abs() < EPS);
    }

    #[test]
    fn test_shade_grows_with_distance() {
        let params = VignetteParams::default();
        let mut last = 0.0;
        for step in 0..=100 {
            let x = 0.5 + step as f32 * 0.01;
            let shade = params.shade(vec2(x, 0.5));
            assert!(shade >= last);
            last = shade;
        }
    }

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<VignetteUniform>(), 16);
        let uniform = VignetteUniform::from(VignetteParams::default());
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&uniform));
        assert_eq!(floats, &[0.3, 1.0, 0.5, 0.0]);
    }
}
