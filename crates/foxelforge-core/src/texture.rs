//! Texture registry for the editor's loaded textures
//!
//! Textures are registered once per project and referenced from cube faces
//! by id. Registration order is preserved because the export document's
//! texture table is built by iterating the registry.

use serde::{Deserialize, Serialize};

/// Unique identifier for a registered texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u64);

impl TextureId {
    /// Create a new texture ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TextureId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A texture known to the editor
///
/// `folder` is empty when the texture sits directly in its namespace root.
/// `uv_width`/`uv_height` are the UV-space dimensions faces map against,
/// which may differ from the pixel dimensions of the image on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    /// Display name, also the key in the exported texture table
    pub name: String,
    /// Resource namespace, e.g. `foxel` or a mod id
    pub namespace: String,
    /// Folder path within the namespace, without trailing slash
    pub folder: String,
    /// UV-space width
    pub uv_width: f64,
    /// UV-space height
    pub uv_height: f64,
}

impl Texture {
    /// Create a texture with no folder and the default 16x16 UV space
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            folder: String::new(),
            uv_width: 16.0,
            uv_height: 16.0,
        }
    }

    /// Set the folder path
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Set the UV-space dimensions
    pub fn with_uv_size(mut self, width: f64, height: f64) -> Self {
        self.uv_width = width;
        self.uv_height = height;
        self
    }

    /// Composite resource path: `<namespace>:<folder/><name>`
    ///
    /// The folder segment (and its slash) is omitted when `folder` is empty.
    pub fn resource_path(&self) -> String {
        if self.folder.is_empty() {
            format!("{}:{}", self.namespace, self.name)
        } else {
            format!("{}:{}/{}", self.namespace, self.folder, self.name)
        }
    }
}

/// Registry of all textures loaded for a project
///
/// Ids are handed out in registration order and double as indices into the
/// backing store, so lookup is O(1) without a separate index map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureRegistry {
    textures: Vec<Texture>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture, returning its id
    pub fn add(&mut self, texture: Texture) -> TextureId {
        let id = TextureId::new(self.textures.len() as u64);
        self.textures.push(texture);
        id
    }

    /// Look up a texture by id
    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.value() as usize)
    }

    /// Iterate textures in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Texture> {
        self.textures.iter()
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
