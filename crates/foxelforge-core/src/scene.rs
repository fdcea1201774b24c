//! The editor's live scene graph
//!
//! A project holds an ordered list of root nodes; each node is a cube, a
//! group of further nodes, or a locator. All coordinates are in editor grid
//! units (16 per meter); rotations are Euler angles in degrees.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::texture::{TextureId, TextureRegistry};
use crate::types::{UvRect, Vec3, VEC3_ZERO};

/// One of the six cardinal face directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order faces are serialized
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];
}

/// One face of a cube
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Referenced texture, if any
    pub texture: Option<TextureId>,
    /// Direction on which this face is culled when occluded; `None` means
    /// the face is never culled
    pub cull_face: Option<Direction>,
    /// UV rectangle in texture space
    pub uv: UvRect,
}

/// The six faces of a cube
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeFaces {
    pub north: Face,
    pub south: Face,
    pub east: Face,
    pub west: Face,
    pub up: Face,
    pub down: Face,
}

impl CubeFaces {
    /// Get the face for a direction
    pub fn get(&self, direction: Direction) -> &Face {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    /// Get the face for a direction, mutably
    pub fn get_mut(&mut self, direction: Direction) -> &mut Face {
        match direction {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    /// Iterate faces in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Face)> {
        Direction::ALL.iter().map(|&d| (d, self.get(d)))
    }
}

/// Axis-aligned box primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Node name, unique among siblings after validation
    pub name: String,
    /// Lower corner in grid units
    pub from: Vec3,
    /// Upper corner in grid units; `from > to` on an axis yields a negative
    /// size downstream and is passed through unvalidated
    pub to: Vec3,
    /// Rotation pivot in grid units
    pub origin: Vec3,
    /// Euler rotation `[roll, pitch, yaw]` in degrees
    pub rotation: Vec3,
    /// Per-direction face data
    pub faces: CubeFaces,
}

impl Cube {
    /// Create a one-block cube at the grid origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: VEC3_ZERO,
            to: [16.0, 16.0, 16.0],
            origin: [8.0, 8.0, 8.0],
            rotation: VEC3_ZERO,
            faces: CubeFaces::default(),
        }
    }
}

/// Named container node with its own pivot and rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Node name, unique among siblings after validation
    pub name: String,
    /// Rotation pivot in grid units
    pub origin: Vec3,
    /// Euler rotation `[roll, pitch, yaw]` in degrees
    pub rotation: Vec3,
    /// Ordered child nodes
    pub children: Vec<SceneNode>,
}

impl Group {
    /// Create an empty group at the grid origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: VEC3_ZERO,
            rotation: VEC3_ZERO,
            children: Vec::new(),
        }
    }

    /// Create a group with the given children
    pub fn with_children(name: impl Into<String>, children: Vec<SceneNode>) -> Self {
        Self {
            children,
            ..Self::new(name)
        }
    }
}

/// Named point node, carrying no geometry of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    /// Node name, unique among siblings after validation
    pub name: String,
    /// Position in grid units
    pub position: Vec3,
}

impl Locator {
    /// Create a locator at the grid origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: VEC3_ZERO,
        }
    }
}

/// A node in the scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    Cube(Cube),
    Group(Group),
    Locator(Locator),
}

impl SceneNode {
    /// Node name
    pub fn name(&self) -> &str {
        match self {
            SceneNode::Cube(cube) => &cube.name,
            SceneNode::Group(group) => &group.name,
            SceneNode::Locator(locator) => &locator.name,
        }
    }

    /// Node name, mutably
    pub fn name_mut(&mut self) -> &mut String {
        match self {
            SceneNode::Cube(cube) => &mut cube.name,
            SceneNode::Group(group) => &mut group.name,
            SceneNode::Locator(locator) => &mut locator.name,
        }
    }

    /// Child nodes, if this node can contain any
    pub fn children(&self) -> Option<&[SceneNode]> {
        match self {
            SceneNode::Group(group) => Some(&group.children),
            _ => None,
        }
    }

    /// Child nodes, mutably
    pub fn children_mut(&mut self) -> Option<&mut Vec<SceneNode>> {
        match self {
            SceneNode::Group(group) => Some(&mut group.children),
            _ => None,
        }
    }
}

impl From<Cube> for SceneNode {
    fn from(cube: Cube) -> Self {
        SceneNode::Cube(cube)
    }
}

impl From<Group> for SceneNode {
    fn from(group: Group) -> Self {
        SceneNode::Group(group)
    }
}

impl From<Locator> for SceneNode {
    fn from(locator: Locator) -> Self {
        SceneNode::Locator(locator)
    }
}

/// An open project: scene graph plus texture registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name, used for default export file naming
    pub name: String,
    /// Ordered root-level nodes
    pub roots: Vec<SceneNode>,
    /// Textures loaded for this project
    pub textures: TextureRegistry,
}

impl Project {
    /// Create an empty project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roots: Vec::new(),
            textures: TextureRegistry::new(),
        }
    }
}

/// Enforce sibling-name uniqueness in place.
///
/// Walks the tree depth-first. Within each sibling list, a node whose name
/// was already taken gets trailing underscores appended until it is unique;
/// group children form an independent sibling list, so the same name may
/// appear in different groups. Idempotent once converged.
pub fn ensure_unique_names(nodes: &mut [SceneNode]) {
    let mut seen = HashSet::new();
    for node in nodes.iter_mut() {
        while seen.contains(node.name()) {
            node.name_mut().push('_');
        }
        seen.insert(node.name().to_owned());

        if let SceneNode::Group(group) = node {
            ensure_unique_names(&mut group.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nodes: &[SceneNode]) -> Vec<&str> {
        nodes.iter().map(SceneNode::name).collect()
    }

    #[test]
    fn test_node_accessors() {
        let mut node = SceneNode::Cube(Cube::new("body"));
        assert_eq!(node.name(), "body");
        assert!(node.children().is_none());

        node.name_mut().push_str("_2");
        assert_eq!(node.name(), "body_2");

        let group = SceneNode::Group(Group::with_children(
            "g",
            vec![Cube::new("a").into(), Cube::new("b").into()],
        ));
        assert_eq!(group.children().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_dedup_appends_underscores() {
        let mut nodes: Vec<SceneNode> = vec![
            Cube::new("a").into(),
            Cube::new("a").into(),
            Cube::new("a").into(),
        ];
        ensure_unique_names(&mut nodes);
        assert_eq!(names(&nodes), vec!["a", "a_", "a__"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let mut nodes: Vec<SceneNode> = vec![
            Cube::new("a").into(),
            Cube::new("a").into(),
            Cube::new("b").into(),
        ];
        ensure_unique_names(&mut nodes);
        let first_pass = nodes.clone();
        ensure_unique_names(&mut nodes);
        assert_eq!(nodes, first_pass);
    }

    #[test]
    fn test_dedup_skips_over_taken_suffix() {
        // "a_" is already taken, so the third node needs two underscores
        let mut nodes: Vec<SceneNode> = vec![
            Cube::new("a").into(),
            Cube::new("a_").into(),
            Cube::new("a").into(),
        ];
        ensure_unique_names(&mut nodes);
        assert_eq!(names(&nodes), vec!["a", "a_", "a__"]);
    }

    #[test]
    fn test_dedup_sibling_groups_are_independent() {
        let mut nodes: Vec<SceneNode> = vec![
            Group::with_children("left", vec![Cube::new("panel").into()]).into(),
            Group::with_children("right", vec![Cube::new("panel").into()]).into(),
        ];
        ensure_unique_names(&mut nodes);

        // Same leaf name in different groups is fine
        assert_eq!(nodes[0].children().map(names), Some(vec!["panel"]));
        assert_eq!(nodes[1].children().map(names), Some(vec!["panel"]));
    }

    #[test]
    fn test_dedup_recurses_into_groups() {
        let mut nodes: Vec<SceneNode> = vec![
            Group::with_children(
                "g",
                vec![
                    Cube::new("x").into(),
                    Cube::new("x").into(),
                    Locator::new("x").into(),
                ],
            )
            .into(),
        ];
        ensure_unique_names(&mut nodes);
        assert_eq!(
            nodes[0].children().map(names),
            Some(vec!["x", "x_", "x__"])
        );
    }
}
