//! Foxel model exporter
//!
//! Walks a project's scene graph and produces the engine's JSON document.
//! The whole document is rebuilt from the live scene on every call; nothing
//! is cached between exports.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use foxelforge_core::scene::{Cube, CubeFaces, Face, Group, Project, SceneNode};
use foxelforge_core::texture::{TextureId, TextureRegistry};
use foxelforge_core::types::{GRID_CENTER, IDENTITY_ROTATION, VEC3_ONE, VEC3_ZERO};

use crate::convert;
use crate::document::{
    CubePart, CullingSide, ListPart, ModelPart, ModelRoot, PlaceholderPart, SideConfig, Sides,
    TextureMap,
};

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Texture not found: {0}")]
    TextureNotFound(TextureId),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty-print with 4-space indentation; the compact form is for
    /// machine consumers only
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Scene-graph to Foxel document compiler
pub struct FoxelExporter {
    options: ExportOptions,
}

impl FoxelExporter {
    /// Create an exporter with default options
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Create an exporter with custom options
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Build the document for a project
    ///
    /// The root part is always a synthetic list named `root`, pivoted at the
    /// grid-block center with identity rotation, whose parts mirror the
    /// project's root nodes in order.
    pub fn compile(&self, project: &Project) -> ExportResult<ModelRoot> {
        let mut textures = TextureMap::new();
        for texture in project.textures.iter() {
            textures.insert(texture.name.clone(), texture.resource_path());
        }

        let model = ModelPart::List(ListPart {
            name: "root".to_string(),
            position: VEC3_ZERO,
            size: VEC3_ONE,
            pivot: GRID_CENTER,
            rotation: IDENTITY_ROTATION,
            parts: build_parts(&project.roots, &project.textures)?,
        });

        Ok(ModelRoot { textures, model })
    }

    /// Compile and serialize to JSON text
    pub fn export_string(&self, project: &Project) -> ExportResult<String> {
        let document = self.compile(project)?;
        self.to_json_string(&document)
    }

    /// Serialize an already-compiled document to JSON text
    pub fn to_json_string(&self, document: &ModelRoot) -> ExportResult<String> {
        if self.options.pretty {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut serializer = Serializer::with_formatter(&mut buf, formatter);
            document.serialize(&mut serializer)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        } else {
            Ok(serde_json::to_string(document)?)
        }
    }

    /// Compile and write JSON to a writer
    pub fn write(&self, project: &Project, mut writer: impl Write) -> ExportResult<()> {
        let json = self.export_string(project)?;
        writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

impl Default for FoxelExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an ordered node list, preserving order exactly
fn build_parts(nodes: &[SceneNode], textures: &TextureRegistry) -> ExportResult<Vec<ModelPart>> {
    nodes
        .iter()
        .map(|node| build_part(node, textures))
        .collect()
}

/// Convert one scene node to a model part
///
/// Node kinds the format does not model become an empty placeholder rather
/// than an error, so scenes using newer host node types still export.
fn build_part(node: &SceneNode, textures: &TextureRegistry) -> ExportResult<ModelPart> {
    match node {
        SceneNode::Cube(cube) => Ok(ModelPart::Cube(build_cube(cube, textures)?)),
        SceneNode::Group(group) => Ok(ModelPart::List(build_list(group, textures)?)),
        _ => Ok(ModelPart::Placeholder(PlaceholderPart {})),
    }
}

fn build_cube(cube: &Cube, textures: &TextureRegistry) -> ExportResult<CubePart> {
    Ok(CubePart {
        name: cube.name.clone(),
        position: convert::to_meters(cube.from),
        size: convert::to_meters(convert::box_size(cube.from, cube.to)),
        pivot: convert::to_meters(cube.origin),
        rotation: convert::euler_to_quaternion(cube.rotation),
        sides: build_sides(&cube.faces, textures)?,
    })
}

fn build_list(group: &Group, textures: &TextureRegistry) -> ExportResult<ListPart> {
    Ok(ListPart {
        name: group.name.clone(),
        position: VEC3_ZERO,
        size: VEC3_ONE,
        pivot: convert::to_meters(group.origin),
        rotation: convert::euler_to_quaternion(group.rotation),
        parts: build_parts(&group.children, textures)?,
    })
}

fn build_sides(faces: &CubeFaces, textures: &TextureRegistry) -> ExportResult<Sides> {
    Ok(Sides {
        north: build_side(&faces.north, textures)?,
        south: build_side(&faces.south, textures)?,
        east: build_side(&faces.east, textures)?,
        west: build_side(&faces.west, textures)?,
        up: build_side(&faces.up, textures)?,
        down: build_side(&faces.down, textures)?,
    })
}

fn build_side(face: &Face, textures: &TextureRegistry) -> ExportResult<SideConfig> {
    let texture = face
        .texture
        .map(|id| textures.get(id).ok_or(ExportError::TextureNotFound(id)))
        .transpose()?;

    Ok(SideConfig {
        culling_side: face.cull_face.map_or(CullingSide::None, CullingSide::from),
        texture: texture.map_or_else(|| "all".to_string(), |t| t.name.clone()),
        uv: convert::scale_uv(face.uv, texture),
    })
}
