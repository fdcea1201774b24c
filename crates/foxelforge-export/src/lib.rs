//! FoxelForge Export Pipeline
//!
//! Converts an editor scene graph into the Foxel engine's JSON model
//! format:
//! - `document`: the serialized document structures
//! - `convert`: grid-to-engine geometry conversion
//! - `exporter`: the document compiler and JSON writer

pub mod convert;
pub mod document;
pub mod exporter;

pub use document::{
    CubePart, CullingSide, ListPart, ModelPart, ModelRoot, PlaceholderPart, ReferencePart,
    SideConfig, Sides, TextureMap,
};
pub use exporter::{ExportError, ExportOptions, ExportResult, FoxelExporter};
