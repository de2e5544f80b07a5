use crate::vertex;

pub struct Pipeline<P> {
    pub inner: P,
    pub group: wgpu::BindGroup,
}

#[derive(Clone, Copy)]
pub struct PipelineBuilder<'a> {
    pub device: &'a wgpu::Device,
    pub tex_format: wgpu::TextureFormat,
    pub camera: &'a wgpu::Buffer,
    pub module: &'a wgpu::ShaderModule,
}

#[allow(clippy::from_over_into)]
impl<'a> Into<Pipeline<wgpu::RenderPipeline>> for PipelineBuilder<'a> {
    fn into(self) -> Pipeline<wgpu::RenderPipeline> {
        let Self {
            device,
            tex_format,
            camera,
            module, ..
        } = self;

        let camera_group_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: None,
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        count: None,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        }
                    },
                ],
            }
        );

        let group = device.create_bind_group(
            &wgpu::BindGroupDescriptor {
                label: None,
                layout: &camera_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: camera.as_entire_binding(),
                    },
                ],
            }
        );

        let inner_layout = device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: None,
                push_constant_ranges: &[],
                bind_group_layouts: &[&camera_group_layout],
            }
        );

        let inner = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: None,
                layout: Some(&inner_layout),
                vertex: wgpu::VertexState {
                    module,
                    entry_point: "vs_main",
                    buffers: &[vertex::Vertex::description()],
                },
                fragment: Some(wgpu::FragmentState {
                    module,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: tex_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                // Wireframes only, so no culling and no depth
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
            }
        );

        Pipeline { inner, group }
    }
}
