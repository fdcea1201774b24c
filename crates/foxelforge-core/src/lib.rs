//! FoxelForge Core Library
//!
//! This crate provides the editor-side data model shared across all
//! FoxelForge components: the scene graph (cubes, groups, locators),
//! the texture registry, and the grid-space primitives they use.

pub mod scene;
pub mod texture;
pub mod types;

pub use scene::{
    Cube, CubeFaces, Direction, Face, Group, Locator, Project, SceneNode, ensure_unique_names,
};
pub use texture::{Texture, TextureId, TextureRegistry};
pub use types::*;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::scene::{
        Cube, CubeFaces, Direction, Face, Group, Locator, Project, SceneNode, ensure_unique_names,
    };
    pub use crate::texture::{Texture, TextureId, TextureRegistry};
    pub use crate::types::*;
}
