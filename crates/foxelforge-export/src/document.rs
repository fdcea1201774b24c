//! Foxel model document structures
//!
//! Field declaration order below is serialization order, which the format
//! fixes: every part serializes `type`, `name`, `position`, `size`, `pivot`,
//! `rotation` before its variant payload, and each side serializes
//! `culling_side`, `texture`, `uv`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use foxelforge_core::scene::Direction;
use foxelforge_core::types::{Quaternion, UvRect, Vec3};

/// Top-level document: texture table first, then the part tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRoot {
    pub textures: TextureMap,
    pub model: ModelPart,
}

/// One part of the model tree
///
/// `Reference` is declared for forward format compatibility; the exporter
/// never produces it. `Placeholder` is the serialized form of node kinds
/// the format does not model: an empty object with no `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModelPart {
    List(ListPart),
    Cube(CubePart),
    Reference(ReferencePart),
    #[serde(untagged)]
    Placeholder(PlaceholderPart),
}

/// Container part: the synthetic root and every group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPart {
    pub name: String,
    /// Always `[0, 0, 0]`; lists carry no translation
    pub position: Vec3,
    /// Always `[1, 1, 1]`; lists carry no scale
    pub size: Vec3,
    pub pivot: Vec3,
    pub rotation: Quaternion,
    pub parts: Vec<ModelPart>,
}

/// Box part with per-direction side configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubePart {
    pub name: String,
    pub position: Vec3,
    pub size: Vec3,
    pub pivot: Vec3,
    pub rotation: Quaternion,
    pub sides: Sides,
}

/// Part referencing another model by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePart {
    pub name: String,
    pub position: Vec3,
    pub size: Vec3,
    pub pivot: Vec3,
    pub rotation: Quaternion,
    pub model: String,
}

/// Empty-object stand-in for unmodeled node kinds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderPart {}

/// Side configuration for all six directions of a cube part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub north: SideConfig,
    pub south: SideConfig,
    pub east: SideConfig,
    pub west: SideConfig,
    pub up: SideConfig,
    pub down: SideConfig,
}

/// One face of a cube part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideConfig {
    pub culling_side: CullingSide,
    /// Referenced texture's display name, or `"all"` when the face has no
    /// texture assigned
    pub texture: String,
    pub uv: UvRect,
}

/// Culling direction of a side, or `none` when the side is never culled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CullingSide {
    North,
    South,
    East,
    West,
    Up,
    Down,
    None,
}

impl From<Direction> for CullingSide {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => CullingSide::North,
            Direction::South => CullingSide::South,
            Direction::East => CullingSide::East,
            Direction::West => CullingSide::West,
            Direction::Up => CullingSide::Up,
            Direction::Down => CullingSide::Down,
        }
    }
}

/// Texture table with JSON-object assignment semantics
///
/// Keys keep the position of their first insertion; inserting an existing
/// key overwrites the value in place (last write wins). Serialization order
/// is therefore stable for a fixed registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureMap {
    entries: Vec<(String, String)>,
}

impl TextureMap {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = path.into(),
            None => self.entries.push((name, path.into())),
        }
    }

    /// Look up a resource path by texture name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, path)| path.as_str())
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TextureMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, path) in &self.entries {
            map.serialize_entry(name, path)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TextureMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextureMapVisitor;

        impl<'de> Visitor<'de> for TextureMapVisitor {
            type Value = TextureMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of texture names to resource paths")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = TextureMap::new();
                while let Some((name, path)) = access.next_entry::<String, String>()? {
                    map.insert(name, path);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(TextureMapVisitor)
    }
}
