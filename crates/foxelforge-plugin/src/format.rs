//! Format descriptor for the Foxel Engine model format

use serde::{Deserialize, Serialize};

/// Identifier of the Foxel Engine model format
pub const FOXEL_FORMAT_ID: &str = "foxel";

/// Capabilities a model format advertises to the editor
///
/// The host reads these flags to decide which tools and panels apply
/// while the format is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Unique format identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Icon shown in format pickers
    pub icon: String,
    /// Offer the format on the start screen
    pub show_on_start_screen: bool,
    /// Models carry an engine-facing identifier
    pub model_identifier: bool,
    /// Textures may declare a folder within their namespace
    pub texture_folder: bool,
    /// Box UV is available per cube but not forced
    pub optional_box_uv: bool,
    /// Box UV enabled for new cubes
    pub box_uv: bool,
    /// All cubes share a single texture
    pub single_texture: bool,
    /// Each texture declares its own UV-space size
    pub per_texture_uv_size: bool,
    /// Animated texture support
    pub animated_textures: bool,
    /// Arbitrary mesh support
    pub meshes: bool,
    /// Cubes may carry rotations
    pub rotate_cubes: bool,
    /// Cubes may be stretched independently of their UV size
    pub stretch_cubes: bool,
    /// Grid centered on the origin instead of a corner
    pub centered_grid: bool,
    /// Locator nodes are allowed in the outliner
    pub locators: bool,
    /// Faces may declare a culling side
    pub face_culling: bool,
}

/// Build the descriptor for the Foxel Engine model format
pub fn foxel_format() -> FormatDescriptor {
    FormatDescriptor {
        id: FOXEL_FORMAT_ID.to_string(),
        name: "Foxel Engine Model".to_string(),
        icon: "bar_chart".to_string(),
        show_on_start_screen: true,
        model_identifier: true,
        texture_folder: true,
        optional_box_uv: true,
        box_uv: false,
        single_texture: false,
        per_texture_uv_size: true,
        animated_textures: false,
        meshes: false,
        rotate_cubes: true,
        stretch_cubes: false,
        centered_grid: false,
        locators: true,
        face_culling: true,
    }
}
