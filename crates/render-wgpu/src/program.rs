use crate::shaders::{ShaderSource, ShaderStage};
use crate::uniform::{UniformBlock, UniformLayout, UniformValue};
use glam::{Mat3, Mat4, Vec3};
use std::collections::HashSet;
use wgpu::util::DeviceExt;

/// Everything needed to build a [`ShaderProgram`].
pub struct ProgramDescriptor<'a> {
    pub source: &'a ShaderSource,
    pub uniforms: UniformLayout,
    pub vertex_layout: wgpu::VertexBufferLayout<'a>,
    pub color_format: wgpu::TextureFormat,
    pub depth_format: wgpu::TextureFormat,
}

/// A render pipeline plus its uniform block, set by name.
///
/// Build failures and bad uniform names are logged; the program stays usable
/// as a handle so the render loop never has to branch on them.
pub struct ShaderProgram {
    name: String,
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformBlock,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    reported: HashSet<String>,
}

impl ShaderProgram {
    pub fn new(device: &wgpu::Device, desc: ProgramDescriptor<'_>) -> Self {
        let name = desc.source.name.clone();
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let uniforms = UniformBlock::new(desc.uniforms);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name}_uniform_buffer")),
            contents: uniforms.bytes(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{name}_bind_group_layout")),
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

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{name}_bind_group")),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{name}_pipeline_layout")),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{name}_vertex")),
            source: wgpu::ShaderSource::Wgsl(desc.source.vertex.as_str().into()),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{name}_fragment")),
            source: wgpu::ShaderSource::Wgsl(desc.source.fragment.as_str().into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{name}_pipeline")),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(ShaderStage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &[desc.vertex_layout],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(ShaderStage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: desc.color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            // The cube data mixes windings, so nothing is culled.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: desc.depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        match pollster::block_on(device.pop_error_scope()) {
            Some(err) => tracing::error!(program = %name, "shader program failed to build: {err}"),
            None => tracing::debug!(program = %name, "shader program built"),
        }

        Self {
            name,
            pipeline,
            uniforms,
            uniform_buffer,
            bind_group,
            reported: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set(name, UniformValue::Bool(value));
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.set(name, UniformValue::Int(value));
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.set(name, UniformValue::Float(value));
    }

    pub fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.set(name, UniformValue::Vec3(value));
    }

    pub fn set_mat3(&mut self, name: &str, value: Mat3) {
        self.set(name, UniformValue::Mat3(value));
    }

    pub fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.set(name, UniformValue::Mat4(value));
    }

    /// Set a uniform; a bad name or kind is logged once per name and ignored.
    pub fn set(&mut self, name: &str, value: UniformValue) {
        if let Err(e) = self.uniforms.set(name, value) {
            if self.reported.insert(name.to_owned()) {
                tracing::warn!(program = %self.name, "{e}");
            }
        }
    }

    /// Write staged uniforms to the GPU if any changed.
    pub fn upload(&mut self, queue: &wgpu::Queue) {
        if let Some(bytes) = self.uniforms.take_dirty() {
            queue.write_buffer(&self.uniform_buffer, 0, bytes);
        }
    }

    /// Make this the active program for subsequent draws in `pass`.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
    }
}
