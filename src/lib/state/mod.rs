use std::sync;

use wgpu::util::DeviceExt as _;

use winit::{dpi, window};

use crate::{pipelines, shaders, vertex};
use crate::scene::camera;

#[derive(Debug)]
pub struct State {
    // WGPU interface
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,

    // Camera uniform, rewritten whenever the view moves
    camera_buffer: wgpu::Buffer,
    camera_group: wgpu::BindGroup,

    // Every line in the scene, uploaded once
    vertices: wgpu::Buffer,
    vertex_count: u32,

    render_pipeline: wgpu::RenderPipeline,
    background: wgpu::Color,

    // Window
    window_size: dpi::PhysicalSize<u32>,
}

impl State {
    pub async fn new(
        window: sync::Arc<window::Window>,
        lines: &[vertex::Vertex],
        camera: camera::CameraUniform,
        background: [f32; 3],
    ) -> anyhow::Result<Self> {
        let window_size = match window.inner_size() {
            // We never want surface dimensions to be 0,
            // so we set it to (1, 1) until the first resize
            dpi::PhysicalSize { width: 0, .. } | //
            dpi::PhysicalSize { height: 0, .. } => dpi::PhysicalSize::new(1, 1),
            window_size => window_size
        };

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(), ..Default::default()
        });

        let surface_target = Box::new(window.clone());
        let surface_target = wgpu::SurfaceTarget::Window(surface_target);

        let surface = instance.create_surface(surface_target)?;

        let adapter = instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }).await.ok_or_else(|| {
            anyhow::anyhow!("No graphics adapter can present to this window")
        })?;

        log::debug!("Using adapter {:?}", adapter.get_info());

        let device_desc = wgpu::DeviceDescriptor {
            label: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
        };

        let (device, queue) = adapter
            .request_device(&device_desc, None)
            .await?;

        let wgpu::SurfaceCapabilities {
            formats,
            present_modes,
            alpha_modes, ..
        } = surface.get_capabilities(&adapter);

        // Prefer an SRGB format so line colours come out as written
        let format = formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .or_else(|| formats.first().copied())
            .ok_or(wgpu::SurfaceError::Lost)?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: window_size.width,
            height: window_size.height,
            present_mode: present_modes
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo),
            alpha_mode: alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);

        let shader_lines = device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: None,
                source: shaders::source(shaders::ShaderStage::Lines),
            },
        );

        let camera_buffer = device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: None,
                contents: bytemuck::cast_slice(&[camera]),
                usage: wgpu::BufferUsages::UNIFORM
                     | wgpu::BufferUsages::COPY_DST,
            }
        );

        let vertices = device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: None,
                contents: bytemuck::cast_slice(lines),
                usage: wgpu::BufferUsages::VERTEX,
            }
        );

        let pipelines::Pipeline {
            inner: render_pipeline,
            group: camera_group,
        } = pipelines::PipelineBuilder {
            device: &device,
            tex_format: format,
            camera: &camera_buffer,
            module: &shader_lines,
        }.into();

        let [r, g, b] = background.map(f64::from);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,

            camera_buffer,
            camera_group,

            vertices,
            vertex_count: lines.len() as u32,

            render_pipeline,
            background: wgpu::Color { r, g, b, a: 1. },

            window_size,
        })
    }

    pub fn resize(&mut self, size: dpi::PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.window_size = size;

            self.surface_config.width = size.width;
            self.surface_config.height = size.height;

            self.surface.configure(&self.device, &self.surface_config);
        }
    }

    // The surface has to be configured again after it is lost
    pub fn reconfigure(&mut self) {
        self.resize(self.window_size);
    }

    pub fn update_camera_buffer(&mut self, camera: camera::CameraUniform) {
        self.queue.write_buffer(
            &self.camera_buffer, 0,
            bytemuck::cast_slice(&[camera])
        );
    }

    pub fn window_size(&self) -> dpi::PhysicalSize<u32> {
        self.window_size
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;

        let view = output.texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder({
            &wgpu::CommandEncoderDescriptor::default()
        });

        {
            let color_attachment = wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.background),
                    store: wgpu::StoreOp::Store,
                },
            };

            let mut render_pass = encoder.begin_render_pass(
                &wgpu::RenderPassDescriptor {
                    label: None,
                    color_attachments: &[Some(color_attachment)],
                    depth_stencil_attachment: None,
                    ..Default::default()
                }
            );

            render_pass.set_pipeline(&self.render_pipeline);

            // Camera matrices
            render_pass.set_bind_group(0, &self.camera_group, &[]);

            render_pass.set_vertex_buffer(0, self.vertices.slice(..));

            render_pass.draw(0..self.vertex_count, 0..1);
        }

        // Submit for execution (async)
        self.queue.submit(Some(encoder.finish()));

        // Schedule for drawing
        output.present();

        Ok(())
    }
}
