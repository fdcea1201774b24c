//! Integration tests for the Foxel model exporter
//!
//! These tests cover the full scene-to-document pipeline:
//! - Root synthesis and list invariants
//! - Tree shape and ordering preservation
//! - Cube geometry and side conversion
//! - Texture table construction
//! - Output formatting and determinism

use foxelforge_core::scene::{Cube, Direction, Group, Locator, Project};
use foxelforge_core::texture::Texture;
use foxelforge_core::types::{Vec3, IDENTITY_ROTATION, VEC3_ONE, VEC3_ZERO};
use foxelforge_export::{
    CullingSide, FoxelExporter, ListPart, ModelPart, ModelRoot, PlaceholderPart,
};

/// Helper to create a cube spanning the given corners
fn make_cube(name: &str, from: Vec3, to: Vec3) -> Cube {
    let mut cube = Cube::new(name);
    cube.from = from;
    cube.to = to;
    cube.origin = from;
    cube
}

/// Helper to compile a project into a document
fn compile(project: &Project) -> ModelRoot {
    FoxelExporter::new().compile(project).unwrap()
}

/// Unwrap a part known to be a list
fn as_list(part: &ModelPart) -> &ListPart {
    match part {
        ModelPart::List(list) => list,
        other => panic!("expected list part, got {other:?}"),
    }
}

mod root_tests {
    use super::*;

    #[test]
    fn test_empty_scene_synthesizes_bare_root() {
        let document = compile(&Project::new("empty"));

        let root = as_list(&document.model);
        assert_eq!(root.name, "root");
        assert_eq!(root.position, VEC3_ZERO);
        assert_eq!(root.size, VEC3_ONE);
        assert_eq!(root.pivot, [0.5, 0.5, 0.5]);
        assert_eq!(root.rotation, IDENTITY_ROTATION);
        assert!(root.parts.is_empty());
        assert!(document.textures.is_empty());
    }

    #[test]
    fn test_document_key_order_is_textures_then_model() {
        let json = FoxelExporter::new()
            .export_string(&Project::new("empty"))
            .unwrap();
        let textures_at = json.find("\"textures\"").unwrap();
        let model_at = json.find("\"model\"").unwrap();
        assert!(textures_at < model_at);
    }

    #[test]
    fn test_pretty_output_uses_four_space_indent() {
        let json = FoxelExporter::new()
            .export_string(&Project::new("empty"))
            .unwrap();
        assert!(json.starts_with("{\n    \"textures\""));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn test_identity_rotation_serializes_without_negative_zero() {
        let mut project = Project::new("still");
        project.roots.push(make_cube("block", VEC3_ZERO, [16.0, 16.0, 16.0]).into());

        let json = FoxelExporter::new().export_string(&project).unwrap();
        assert!(!json.contains("-0.0"), "{json}");
    }

    #[test]
    fn test_export_is_deterministic() {
        let mut project = Project::new("stable");
        project.textures.add(Texture::new("hull", "foxel").with_folder("ships"));
        project.roots.push(
            Group::with_children(
                "body",
                vec![
                    make_cube("a", [0.0, 0.0, 0.0], [16.0, 8.0, 8.0]).into(),
                    Locator::new("thruster").into(),
                ],
            )
            .into(),
        );

        let exporter = FoxelExporter::new();
        let first = exporter.export_string(&project).unwrap();
        let second = exporter.export_string(&project).unwrap();
        assert_eq!(first, second);
    }
}

mod tree_tests {
    use super::*;

    #[test]
    fn test_parts_mirror_children_count_and_order() {
        let mut project = Project::new("nested");
        project.roots.push(
            Group::with_children(
                "outer",
                vec![
                    make_cube("first", VEC3_ZERO, [16.0, 16.0, 16.0]).into(),
                    Group::with_children(
                        "inner",
                        vec![
                            make_cube("second", VEC3_ZERO, [8.0, 8.0, 8.0]).into(),
                            make_cube("third", VEC3_ZERO, [4.0, 4.0, 4.0]).into(),
                        ],
                    )
                    .into(),
                    make_cube("fourth", VEC3_ZERO, [2.0, 2.0, 2.0]).into(),
                ],
            )
            .into(),
        );
        project.roots.push(make_cube("fifth", VEC3_ZERO, [1.0, 1.0, 1.0]).into());

        let document = compile(&project);
        let root = as_list(&document.model);
        assert_eq!(root.parts.len(), 2);

        let outer = as_list(&root.parts[0]);
        assert_eq!(outer.name, "outer");
        assert_eq!(outer.parts.len(), 3);

        let names: Vec<&str> = outer
            .parts
            .iter()
            .map(|part| match part {
                ModelPart::Cube(cube) => cube.name.as_str(),
                ModelPart::List(list) => list.name.as_str(),
                other => panic!("unexpected part {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["first", "inner", "fourth"]);

        let inner = as_list(&outer.parts[1]);
        assert_eq!(inner.parts.len(), 2);
    }

    #[test]
    fn test_group_part_carries_fixed_position_and_size() {
        let mut group = Group::new("wing");
        group.origin = [8.0, 0.0, 8.0];
        group.rotation = [0.0, 0.0, 90.0];
        let mut project = Project::new("ship");
        project.roots.push(group.into());

        let document = compile(&project);
        let wing = as_list(&as_list(&document.model).parts[0]);
        assert_eq!(wing.position, VEC3_ZERO);
        assert_eq!(wing.size, VEC3_ONE);
        assert_eq!(wing.pivot, [0.5, 0.0, 0.5]);
        // Rotated groups still get a unit quaternion
        let norm: f64 = wing.rotation.iter().map(|c| c * c).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_locator_becomes_empty_placeholder() {
        let mut project = Project::new("points");
        project.roots.push(Locator::new("seat").into());

        let document = compile(&project);
        let root = as_list(&document.model);
        assert_eq!(
            root.parts[0],
            ModelPart::Placeholder(PlaceholderPart {})
        );

        // And it serializes as a bare empty object inside the parts array
        let json = serde_json::to_string(&document).unwrap();
        assert!(json.contains("\"parts\":[{}]"), "{json}");
    }
}

mod cube_tests {
    use super::*;

    fn single_cube_document(cube: Cube) -> ModelRoot {
        let mut project = Project::new("one");
        project.roots.push(cube.into());
        compile(&project)
    }

    fn cube_part(document: &ModelRoot) -> &foxelforge_export::CubePart {
        match &as_list(&document.model).parts[0] {
            ModelPart::Cube(cube) => cube,
            other => panic!("expected cube part, got {other:?}"),
        }
    }

    #[test]
    fn test_cube_geometry_is_rescaled() {
        let mut cube = make_cube("body", [4.0, 0.0, 4.0], [12.0, 16.0, 8.0]);
        cube.origin = [8.0, 8.0, 8.0];

        let document = single_cube_document(cube);
        let part = cube_part(&document);
        assert_eq!(part.position, [0.25, 0.0, 0.25]);
        assert_eq!(part.size, [0.5, 1.0, 0.25]);
        assert_eq!(part.pivot, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_negative_size_passes_through() {
        let cube = make_cube("inverted", [8.0, 8.0, 8.0], [0.0, 16.0, 8.0]);

        let document = single_cube_document(cube);
        assert_eq!(cube_part(&document).size, [-0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_untextured_side_defaults() {
        let cube = make_cube("plain", VEC3_ZERO, [16.0, 16.0, 16.0]);

        let document = single_cube_document(cube);
        let sides = &cube_part(&document).sides;
        for side in [
            &sides.north, &sides.south, &sides.east,
            &sides.west, &sides.up, &sides.down,
        ] {
            assert_eq!(side.texture, "all");
            assert_eq!(side.culling_side, CullingSide::None);
        }
    }

    #[test]
    fn test_cull_face_passes_through() {
        let mut cube = make_cube("culled", VEC3_ZERO, [16.0, 16.0, 16.0]);
        cube.faces.north.cull_face = Some(Direction::North);
        cube.faces.up.cull_face = Some(Direction::Down);

        let document = single_cube_document(cube);
        let sides = &cube_part(&document).sides;
        assert_eq!(sides.north.culling_side, CullingSide::North);
        assert_eq!(sides.up.culling_side, CullingSide::Down);
        assert_eq!(sides.south.culling_side, CullingSide::None);
    }

    #[test]
    fn test_uv_divides_by_grid_without_texture() {
        let mut cube = make_cube("plain", VEC3_ZERO, [16.0, 16.0, 16.0]);
        cube.faces.east.uv = [0.0, 0.0, 16.0, 8.0];

        let document = single_cube_document(cube);
        assert_eq!(
            cube_part(&document).sides.east.uv,
            [0.0, 0.0, 1.0, 0.5]
        );
    }

    #[test]
    fn test_uv_divides_by_texture_dimensions() {
        let mut project = Project::new("textured");
        let id = project.textures.add(
            Texture::new("hull", "foxel").with_uv_size(64.0, 32.0),
        );
        let mut cube = make_cube("body", VEC3_ZERO, [16.0, 16.0, 16.0]);
        cube.faces.west.texture = Some(id);
        cube.faces.west.uv = [16.0, 8.0, 64.0, 32.0];
        project.roots.push(cube.into());

        let document = compile(&project);
        let part = cube_part(&document);
        assert_eq!(part.sides.west.texture, "hull");
        assert_eq!(part.sides.west.uv, [0.25, 0.25, 1.0, 1.0]);
        // Untouched faces still use the grid divisor
        assert_eq!(part.sides.north.texture, "all");
    }

    #[test]
    fn test_rotation_uses_negated_angles() {
        let mut cube = make_cube("spun", VEC3_ZERO, [16.0, 16.0, 16.0]);
        cube.rotation = [0.0, 0.0, 90.0];

        let document = single_cube_document(cube);
        let rotation = cube_part(&document).rotation;
        assert!((rotation[2] - (-std::f64::consts::FRAC_1_SQRT_2)).abs() < 1e-12);
        assert!((rotation[3] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}

mod texture_table_tests {
    use super::*;

    #[test]
    fn test_paths_include_folder_when_present() {
        let mut project = Project::new("paths");
        project.textures.add(Texture::new("hull", "foxel").with_folder("ships/small"));
        project.textures.add(Texture::new("glass", "foxel"));

        let document = compile(&project);
        assert_eq!(document.textures.get("hull"), Some("foxel:ships/small/hull"));
        assert_eq!(document.textures.get("glass"), Some("foxel:glass"));
    }

    #[test]
    fn test_table_preserves_registry_order() {
        let mut project = Project::new("ordered");
        project.textures.add(Texture::new("zeta", "foxel"));
        project.textures.add(Texture::new("alpha", "foxel"));

        let document = compile(&project);
        let names: Vec<&str> = document.textures.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_names_keep_last_path_first_position() {
        let mut project = Project::new("duped");
        project.textures.add(Texture::new("hull", "foxel"));
        project.textures.add(Texture::new("glass", "foxel"));
        project.textures.add(Texture::new("hull", "foxel").with_folder("override"));

        let document = compile(&project);
        let entries: Vec<(&str, &str)> = document.textures.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("hull", "foxel:override/hull"),
                ("glass", "foxel:glass"),
            ]
        );
    }
}
