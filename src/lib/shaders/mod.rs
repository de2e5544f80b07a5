pub enum ShaderStage {
    Lines,
}

pub fn source(stage: ShaderStage) -> wgpu::ShaderSource<'static> {
    let source = match stage {
        ShaderStage::Lines => include_str!("lines.wgsl"),
    };

    wgpu::ShaderSource::Wgsl(source.into())
}
