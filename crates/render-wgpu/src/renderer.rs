use crate::context::GpuContext;
use crate::mesh::{self, CUBE_VERTEX_COUNT, CUBE_VERTICES};
use crate::program::{ProgramDescriptor, ShaderProgram};
use crate::scene::{self, SceneParams};
use crate::shaders::ShaderSource;
use crate::uniform::{UniformKind, UniformLayout};
use litcube_camera::FlyCamera;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

fn lit_uniforms() -> UniformLayout {
    UniformLayout::new(&[
        ("projection", UniformKind::Mat4),
        ("view", UniformKind::Mat4),
        ("model", UniformKind::Mat4),
        ("normal_matrix", UniformKind::Mat3),
        ("object_color", UniformKind::Vec3),
        ("object_shininess", UniformKind::Float),
        ("light_color", UniformKind::Vec3),
        ("ambient_strength", UniformKind::Float),
        ("light_pos", UniformKind::Vec3),
        ("specular_strength", UniformKind::Float),
        ("view_pos", UniformKind::Vec3),
    ])
}

fn unlit_uniforms() -> UniformLayout {
    UniformLayout::new(&[
        ("projection", UniformKind::Mat4),
        ("view", UniformKind::Mat4),
        ("model", UniformKind::Mat4),
        ("color", UniformKind::Vec3),
    ])
}

/// Draws the lit cube and the light indicator from one shared vertex buffer.
pub struct CubeRenderer {
    lit: ShaderProgram,
    unlit: ShaderProgram,
    vertex_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
}

impl CubeRenderer {
    pub fn new(ctx: &GpuContext, lit_source: &ShaderSource, unlit_source: &ShaderSource) -> Self {
        let lit = ShaderProgram::new(
            &ctx.device,
            ProgramDescriptor {
                source: lit_source,
                uniforms: lit_uniforms(),
                vertex_layout: mesh::position_normal_layout(),
                color_format: ctx.format(),
                depth_format: DEPTH_FORMAT,
            },
        );
        let unlit = ShaderProgram::new(
            &ctx.device,
            ProgramDescriptor {
                source: unlit_source,
                uniforms: unlit_uniforms(),
                vertex_layout: mesh::position_layout(),
                color_format: ctx.format(),
                depth_format: DEPTH_FORMAT,
            },
        );

        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube_vertex_buffer"),
                contents: bytemuck::cast_slice(&CUBE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let (width, height) = ctx.size();
        let depth_view = Self::create_depth_texture(&ctx.device, width, height);

        Self {
            lit,
            unlit,
            vertex_buffer,
            depth_view,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = Self::create_depth_texture(device, width, height);
    }

    /// Stage every uniform of both programs for the current camera.
    pub fn prepare(&mut self, camera: &FlyCamera, scene: &SceneParams, aspect: f32) {
        let projection = camera.projection_matrix(aspect, scene.near, scene.far);
        let view = camera.view_matrix();
        let model = scene.object_model();

        let lit = &mut self.lit;
        lit.set_vec3("object_color", scene.object_color);
        lit.set_float("object_shininess", scene.object_shininess);
        lit.set_vec3("light_color", scene.light_color);
        lit.set_vec3("light_pos", scene.light_position);
        lit.set_vec3("view_pos", camera.position());
        lit.set_float("ambient_strength", scene.ambient_strength);
        lit.set_float("specular_strength", scene.specular_strength);
        lit.set_mat4("projection", projection);
        lit.set_mat4("view", view);
        lit.set_mat4("model", model);
        lit.set_mat3("normal_matrix", scene::normal_matrix(model));

        let unlit = &mut self.unlit;
        unlit.set_mat4("projection", projection);
        unlit.set_mat4("view", view);
        unlit.set_mat4("model", scene.light_model());
        unlit.set_vec3("color", scene.light_color);
    }

    /// Render one frame into `target`: lit cube, then light cube.
    pub fn render(
        &mut self,
        ctx: &GpuContext,
        target: &wgpu::TextureView,
        camera: &FlyCamera,
        scene: &SceneParams,
    ) {
        self.prepare(camera, scene, ctx.aspect());
        self.lit.upload(&ctx.queue);
        self.unlit.upload(&ctx.queue);

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene.wgpu_clear_color()),
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
                ..Default::default()
            });

            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            self.lit.bind(&mut pass);
            pass.draw(0..CUBE_VERTEX_COUNT, 0..1);

            self.unlit.bind(&mut pass);
            pass.draw(0..CUBE_VERTEX_COUNT, 0..1);
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

impl Drop for CubeRenderer {
    fn drop(&mut self) {
        tracing::debug!(
            programs = ?[self.lit.name(), self.unlit.name()],
            "releasing cube renderer resources"
        );
    }
}
