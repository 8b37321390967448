//! Texture handles and the per-texture bind groups the sprite renderer draws with.

use ahash::HashMap;

/// Opaque handle naming the texture a glyph samples from.
///
/// The batcher only compares and orders handles; what a handle refers to is
/// up to the submitter. [`SpriteTextures`] hands them out for wgpu views, but
/// any `u64` works when driving a custom [`SpriteSubmitter`](crate::SpriteSubmitter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextureId(u64);

impl TextureId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for TextureId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "texture#{}", self.0)
    }
}

/// Create the per-texture bind group layout (group 0).
pub(crate) fn create_texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sprite_texture_layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Registry of textures the sprite renderer can bind.
///
/// Each registered view gets a fresh [`TextureId`] and one bind group, built
/// once at registration. Decoding and uploading texture data is the caller's
/// business; only the view is needed here.
pub struct SpriteTextures {
    layout: wgpu::BindGroupLayout,
    default_sampler: wgpu::Sampler,
    bind_groups: HashMap<TextureId, wgpu::BindGroup>,
    next_id: u64,
}

impl SpriteTextures {
    pub fn new(device: &wgpu::Device, filter: wgpu::FilterMode) -> Self {
        let layout = create_texture_bind_group_layout(device);
        let default_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            ..Default::default()
        });

        Self {
            layout,
            default_sampler,
            bind_groups: HashMap::default(),
            next_id: 1,
        }
    }

    /// Layout every texture bind group is built against.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Register a texture view, sampled with `sampler` or the registry's default.
    pub fn register(
        &mut self,
        device: &wgpu::Device,
        view: &wgpu::TextureView,
        sampler: Option<&wgpu::Sampler>,
    ) -> TextureId {
        let id = TextureId::new(self.next_id);
        self.next_id += 1;

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_texture_bg"),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(
                        sampler.unwrap_or(&self.default_sampler),
                    ),
                },
            ],
        });
        self.bind_groups.insert(id, bind_group);

        tracing::debug!("Registered sprite texture {id}");
        id
    }

    /// Drop the bind group for `id`. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: TextureId) -> bool {
        self.bind_groups.remove(&id).is_some()
    }

    pub fn get(&self, id: TextureId) -> Option<&wgpu::BindGroup> {
        self.bind_groups.get(&id)
    }

    pub fn contains(&self, id: TextureId) -> bool {
        self.bind_groups.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bind_groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bind_groups.is_empty()
    }
}
