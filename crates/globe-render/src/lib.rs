//! Draws a [`globe_core::FrameOutput`] with wgpu.
//!
//! The host owns window/canvas creation and hands over a surface; the
//! renderer picks an adapter for it and keeps the swapchain, depth buffer and
//! per-model buffers in sync with the viewport.

mod helpers;
mod mesh;

use globe_core::{
    FrameOutput, MeshData, ModelKind, Models, AMBIENT_INTENSITY, CLEAR_COLOR,
    POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION, POINT_LIGHT_RANGE,
};
use mesh::{GpuMesh, ModelUniforms};

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    light: [f32; 4],
    params: [f32; 4],
}

pub struct Renderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    frame_uniform_buf: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    model_bgl: wgpu::BindGroupLayout,
    #[allow(dead_code)]
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    meshes: Option<Models<GpuMesh>>,
    clear_color: wgpu::Color,
}

impl<'w> Renderer<'w> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[render] adapter={:?} format={:?} size={}x{}",
            adapter.get_info().name,
            format,
            config.width,
            config.height
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let frame_bgl = helpers::uniform_layout(&device, "frame_bgl");
        let model_bgl = helpers::uniform_layout(&device, "model_bgl");
        let frame_uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group =
            helpers::uniform_bind_group(&device, "frame_bg", &frame_bgl, &frame_uniform_buf);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&frame_bgl, &model_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(&device, &pipeline_layout, &shader, format);
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&device, config.width, config.height);

        let [r, g, b] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            frame_uniform_buf,
            frame_bind_group,
            model_bgl,
            depth_tex,
            depth_view,
            meshes: None,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        })
    }

    pub fn upload_models(&mut self, models: &Models<MeshData>) {
        let upload = |kind: ModelKind| {
            GpuMesh::upload(&self.device, &self.model_bgl, kind.id(), models.get(kind))
        };
        self.meshes = Some(Models {
            airplane: upload(ModelKind::Airplane),
            earth: upload(ModelKind::Earth),
        });
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size() {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
        self.depth_tex = tex;
        self.depth_view = view;
    }

    /// Reapplies the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, frame: &FrameOutput) -> Result<(), wgpu::SurfaceError> {
        let [lx, ly, lz] = POINT_LIGHT_POSITION;
        self.queue.write_buffer(
            &self.frame_uniform_buf,
            0,
            bytemuck::bytes_of(&FrameUniforms {
                view_proj: frame.view_proj.to_cols_array_2d(),
                light: [lx, ly, lz, POINT_LIGHT_RANGE],
                params: [AMBIENT_INTENSITY, POINT_LIGHT_INTENSITY, 0.0, 0.0],
            }),
        );
        if let Some(meshes) = &self.meshes {
            for (kind, world) in &frame.draws {
                self.queue.write_buffer(
                    &meshes.get(*kind).uniform_buf,
                    0,
                    bytemuck::bytes_of(&ModelUniforms::from_world(world)),
                );
            }
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(meshes) = &self.meshes {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.frame_bind_group, &[]);
                for (kind, _) in &frame.draws {
                    let mesh = meshes.get(*kind);
                    rpass.set_bind_group(1, &mesh.bind_group, &[]);
                    rpass.set_vertex_buffer(0, mesh.vertex_buf.slice(..));
                    rpass.set_index_buffer(mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
