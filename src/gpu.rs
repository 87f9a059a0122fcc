//! GPU surface and render pipelines.
//!
//! Three passes per frame, all into the same render pass, painter's order:
//! a translucent full-surface fade (the trail effect — prior frames are
//! dimmed, not cleared), instanced particle quads, then connection lines.

use std::sync::Arc;

use winit::window::Window;

use crate::error::GpuError;
use crate::field::ParticleField;
use crate::shader::{LineVertex, ParticleInstance, Uniforms, SHADER_SOURCE};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    fade_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    line_buffer: wgpu::Buffer,
    line_capacity: usize,
    // Reused CPU staging for per-frame vertex data.
    instance_data: Vec<ParticleInstance>,
    line_data: Vec<LineVertex>,
    clear_color: wgpu::Color,
    fade_color: [f32; 4],
    line_color: [f32; 4],
    /// Swapchain contents are undefined right after (re)configuration, so the
    /// next frame clears instead of loading.
    clear_pending: bool,
}

impl GpuState {
    pub async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Field Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Field Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let fade_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "vs_fade",
            "fs_fade",
            &[],
            wgpu::PrimitiveTopology::TriangleList,
            config.format,
        );

        let particle_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "vs_particle",
            "fs_particle",
            &[ParticleInstance::layout()],
            wgpu::PrimitiveTopology::TriangleList,
            config.format,
        );

        let line_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "vs_line",
            "fs_line",
            &[LineVertex::layout()],
            wgpu::PrimitiveTopology::LineList,
            config.format,
        );

        let instance_capacity = 256;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Particle Instance Buffer"),
            size: (instance_capacity * std::mem::size_of::<ParticleInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let line_capacity = 4096;
        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Connection Line Buffer"),
            size: (line_capacity * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            fade_pipeline,
            particle_pipeline,
            line_pipeline,
            uniform_buffer,
            uniform_bind_group,
            instance_buffer,
            instance_capacity,
            line_buffer,
            line_capacity,
            instance_data: Vec::new(),
            line_data: Vec::new(),
            clear_color: wgpu::Color::WHITE,
            fade_color: [1.0; 4],
            line_color: [1.0; 4],
            clear_pending: true,
        })
    }

    /// Apply the field's theme colors. Called once at startup and whenever
    /// the theme changes.
    pub fn set_theme(&mut self, fade: [f32; 4], connection: [f32; 3]) {
        self.fade_color = fade;
        self.line_color = [connection[0], connection[1], connection[2], 1.0];
        self.clear_color = wgpu::Color {
            r: fade[0] as f64,
            g: fade[1] as f64,
            b: fade[2] as f64,
            a: 1.0,
        };
        self.write_uniforms();
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.clear_pending = true;
            self.write_uniforms();
        }
    }

    fn write_uniforms(&self) {
        let uniforms = Uniforms {
            resolution: [self.config.width as f32, self.config.height as f32],
            _pad: [0.0; 2],
            fade_color: self.fade_color,
            line_color: self.line_color,
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Draw the field's current frame.
    pub fn render(&mut self, field: &ParticleField) -> Result<(), wgpu::SurfaceError> {
        self.instance_data.clear();
        self.instance_data.extend(field.particles().iter().map(|p| ParticleInstance {
            position: p.pos.to_array(),
            size: p.size,
            color: [p.color.x, p.color.y, p.color.z, 1.0],
        }));

        self.line_data.clear();
        for c in field.connections() {
            self.line_data.push(LineVertex {
                position: c.a.to_array(),
                alpha: c.alpha,
                _pad: 0.0,
            });
            self.line_data.push(LineVertex {
                position: c.b.to_array(),
                alpha: c.alpha,
                _pad: 0.0,
            });
        }

        self.upload_vertex_data();

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Field Encoder"),
            });

        {
            let load = if self.clear_pending {
                wgpu::LoadOp::Clear(self.clear_color)
            } else {
                wgpu::LoadOp::Load
            };

            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Field Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            render_pass.set_pipeline(&self.fade_pipeline);
            render_pass.draw(0..3, 0..1);

            if !self.instance_data.is_empty() {
                render_pass.set_pipeline(&self.particle_pipeline);
                render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
                render_pass.draw(0..6, 0..self.instance_data.len() as u32);
            }

            if !self.line_data.is_empty() {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
                render_pass.draw(0..self.line_data.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.clear_pending = false;

        Ok(())
    }

    fn upload_vertex_data(&mut self) {
        if self.instance_data.len() > self.instance_capacity {
            self.instance_capacity = self.instance_data.len().next_power_of_two();
            self.instance_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Particle Instance Buffer"),
                size: (self.instance_capacity * std::mem::size_of::<ParticleInstance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        if !self.instance_data.is_empty() {
            self.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instance_data),
            );
        }

        if self.line_data.len() > self.line_capacity {
            self.line_capacity = self.line_data.len().next_power_of_two();
            self.line_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Connection Line Buffer"),
                size: (self.line_capacity * std::mem::size_of::<LineVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        if !self.line_data.is_empty() {
            self.queue
                .write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&self.line_data));
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vs_entry: &str,
    fs_entry: &str,
    buffers: &[wgpu::VertexBufferLayout<'_>],
    topology: wgpu::PrimitiveTopology,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(vs_entry),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
