//! wgpu submitter for sprite batches.
//!
//! [`SpriteRenderer`] takes the vertex stream and ranges a
//! [`SpriteBatch`](crate::SpriteBatch) flushes, uploads the stream once into
//! a shared vertex buffer and issues one `draw()` per range with that range's
//! texture bound. Each flush is recorded into its own render pass that loads
//! the target's existing contents, so several flushes in one frame stack up.
//!
//! ```rust,no_run
//! use sprig_core::geometry::Rect;
//! use sprig_core::math::screen_ortho;
//! use sprig_render::{
//!     GraphicsContext, PackedColor, SpriteBatch, SpriteRenderer, SpriteRendererDescriptor,
//! };
//!
//! let ctx = GraphicsContext::new_owned_sync().expect("no GPU");
//! let format = wgpu::TextureFormat::Rgba8UnormSrgb;
//! let mut renderer = SpriteRenderer::new(ctx.clone(), SpriteRendererDescriptor::new(format))?;
//!
//! # let (texture_view, target_view): (wgpu::TextureView, wgpu::TextureView) = todo!();
//! let texture = renderer.register_texture(&texture_view, None);
//! renderer.set_target(target_view);
//!
//! let mut batch = SpriteBatch::new(renderer);
//! batch.set_projection(screen_ortho(800.0, 600.0));
//! batch.begin();
//! let _ = batch.draw(texture, Rect::new(10.0, 10.0, 64.0, 64.0), Rect::UNIT, PackedColor::WHITE);
//! batch.end();
//! # Ok::<(), sprig_render::SpriteRendererError>(())
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Mat4;
use sprig_core::math::to_column_major;
use sprig_core::profiling::{profile_function, profile_scope};

use crate::batch::{RenderBatch, SpriteSubmitter};
use crate::context::GraphicsContext;
use crate::pipeline;
use crate::texture::{SpriteTextures, TextureId};
use crate::vertex::SpriteVertex;
use crate::vertex_buffer::SharedVertexBuffer;

/// Errors raised while building a [`SpriteRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteRendererError {
    /// The shader file could not be read.
    ShaderRead { path: PathBuf, message: String },
    /// The shader or pipeline failed validation.
    ShaderCompile(String),
}

impl std::fmt::Display for SpriteRendererError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShaderRead { path, message } => {
                write!(f, "Failed to read shader {}: {}", path.display(), message)
            }
            Self::ShaderCompile(msg) => write!(f, "Sprite shader failed to compile: {}", msg),
        }
    }
}

impl std::error::Error for SpriteRendererError {}

/// Where the sprite shader's WGSL comes from.
///
/// Custom shaders must keep the built-in interface: vertex inputs at
/// locations 0-2, the texture and sampler in group 0, and the projection
/// uniform in group 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SpriteShader {
    #[default]
    Builtin,
    Wgsl(Cow<'static, str>),
    File(PathBuf),
}

impl SpriteShader {
    /// Resolve the WGSL text, reading it from disk for [`SpriteShader::File`].
    pub fn load(&self) -> Result<Cow<'_, str>, SpriteRendererError> {
        match self {
            SpriteShader::Builtin => Ok(Cow::Borrowed(SPRITE_SHADER)),
            SpriteShader::Wgsl(source) => Ok(Cow::Borrowed(&**source)),
            SpriteShader::File(path) => read_shader_file(path).map(Cow::Owned),
        }
    }
}

/// Read a whole WGSL file into memory.
pub fn read_shader_file(path: &Path) -> Result<String, SpriteRendererError> {
    std::fs::read_to_string(path).map_err(|err| SpriteRendererError::ShaderRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Descriptor for configuring a [`SpriteRenderer`].
#[derive(Debug, Clone)]
pub struct SpriteRendererDescriptor {
    /// Format of the views the renderer draws into.
    pub target_format: wgpu::TextureFormat,
    pub shader: SpriteShader,
    /// Filter of the default sampler used for registered textures.
    pub filter: wgpu::FilterMode,
    /// Initial vertex buffer capacity, in vertices.
    pub initial_vertices: usize,
    pub label: Option<&'static str>,
}

impl SpriteRendererDescriptor {
    pub fn new(target_format: wgpu::TextureFormat) -> Self {
        Self {
            target_format,
            shader: SpriteShader::Builtin,
            filter: wgpu::FilterMode::Nearest,
            initial_vertices: crate::config::DEFAULT_BATCH_CAPACITY * 6,
            label: None,
        }
    }

    pub fn shader(mut self, shader: SpriteShader) -> Self {
        self.shader = shader;
        self
    }

    pub fn filter(mut self, filter: wgpu::FilterMode) -> Self {
        self.filter = filter;
        self
    }

    pub fn initial_vertices(mut self, vertices: usize) -> Self {
        self.initial_vertices = vertices;
        self
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }
}

/// Draws sprite batches with wgpu.
pub struct SpriteRenderer {
    context: Arc<GraphicsContext>,
    pipeline: wgpu::RenderPipeline,
    projection_buffer: wgpu::Buffer,
    projection_bind_group: wgpu::BindGroup,
    vertices: SharedVertexBuffer,
    textures: SpriteTextures,
    target: Option<wgpu::TextureView>,
    label: &'static str,
}

impl SpriteRenderer {
    pub fn new(
        context: Arc<GraphicsContext>,
        descriptor: SpriteRendererDescriptor,
    ) -> Result<Self, SpriteRendererError> {
        profile_function!();
        let label = descriptor.label.unwrap_or("sprite_renderer");
        let source = descriptor.shader.load()?;
        let device = context.device();

        let textures = SpriteTextures::new(device, descriptor.filter);
        let projection_buffer = pipeline::create_projection_buffer(device);
        let projection_layout = pipeline::create_projection_bind_group_layout(device);
        let projection_bind_group =
            pipeline::create_projection_bind_group(device, &projection_layout, &projection_buffer);

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(source),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pipeline_layout"),
            bind_group_layouts: &[textures.layout(), &projection_layout],
            push_constant_ranges: &[],
        });
        let render_pipeline = pipeline::create_sprite_pipeline(
            device,
            &shader,
            &pipeline_layout,
            descriptor.target_format,
            label,
        );
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            tracing::error!("Sprite shader failed validation: {err}");
            return Err(SpriteRendererError::ShaderCompile(err.to_string()));
        }

        context.queue().write_buffer(
            &projection_buffer,
            0,
            bytemuck::cast_slice(&to_column_major(&Mat4::IDENTITY)),
        );

        let adapter = context.info();
        tracing::debug!(
            "Created {label} for {:?} on {} ({:?})",
            descriptor.target_format,
            adapter.name,
            adapter.backend
        );
        let vertices = SharedVertexBuffer::new(descriptor.initial_vertices)
            .with_max_size(context.max_buffer_size());

        Ok(Self {
            context,
            pipeline: render_pipeline,
            projection_buffer,
            projection_bind_group,
            vertices,
            textures,
            target: None,
            label,
        })
    }

    /// Set the view the next submissions render into.
    pub fn set_target(&mut self, view: wgpu::TextureView) {
        self.target = Some(view);
    }

    /// Forget the current target; submissions are skipped until a new one is set.
    pub fn clear_target(&mut self) -> Option<wgpu::TextureView> {
        self.target.take()
    }

    /// Register a texture view for sprites to sample from.
    pub fn register_texture(
        &mut self,
        view: &wgpu::TextureView,
        sampler: Option<&wgpu::Sampler>,
    ) -> TextureId {
        self.textures.register(self.context.device(), view, sampler)
    }

    pub fn remove_texture(&mut self, id: TextureId) -> bool {
        self.textures.remove(id)
    }

    pub fn textures(&self) -> &SpriteTextures {
        &self.textures
    }

    pub fn vertex_buffer(&self) -> &SharedVertexBuffer {
        &self.vertices
    }

    pub fn context(&self) -> &Arc<GraphicsContext> {
        &self.context
    }
}

impl SpriteSubmitter for SpriteRenderer {
    fn set_projection(&mut self, projection: Mat4) {
        self.context.queue().write_buffer(
            &self.projection_buffer,
            0,
            bytemuck::cast_slice(&to_column_major(&projection)),
        );
    }

    fn submit(&mut self, vertices: &[SpriteVertex], batches: &[RenderBatch]) {
        profile_function!();
        let Some(target) = &self.target else {
            tracing::warn!(
                "{} has no render target, dropping {} vertices",
                self.label,
                vertices.len()
            );
            return;
        };

        let Some(buffer) = self.vertices.upload(self.context.as_ref(), vertices) else {
            return;
        };
        let used = vertices.len() as u64 * SpriteVertex::SIZE;

        let mut encoder =
            self.context
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("sprite_encoder"),
                });

        {
            profile_scope!("sprite_draws");
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sprite_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(1, &self.projection_bind_group, &[]);
            pass.set_vertex_buffer(0, buffer.as_wgpu().slice(..used));

            for batch in batches {
                let Some(bind_group) = self.textures.get(batch.texture) else {
                    tracing::warn!(
                        "Skipping {} vertices drawn with unregistered {}",
                        batch.count,
                        batch.texture
                    );
                    continue;
                };
                pass.set_bind_group(0, bind_group, &[]);
                pass.draw(batch.vertices(), 0..1);
            }
        }

        self.context.queue().submit(std::iter::once(encoder.finish()));
    }
}

/// WGSL shader for textured, tinted sprites.
pub const SPRITE_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) uv: vec2<f32>,
    @location(2) color: vec4<f32>,  // Unorm8x4
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) color: vec4<f32>,
}

@group(0) @binding(0)
var sprite_texture: texture_2d<f32>;
@group(0) @binding(1)
var sprite_sampler: sampler;

@group(1) @binding(0)
var<uniform> projection: mat4x4<f32>;

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
    var output: VertexOutput;
    output.clip_position = projection * vec4<f32>(input.position, 0.0, 1.0);
    output.uv = input.uv;
    output.color = input.color;
    return output;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(sprite_texture, sprite_sampler, input.uv) * input.color;
}
"#;
