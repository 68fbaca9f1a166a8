//! Propagation Engine Tests
//!
//! Tests for:
//! - node_path / find_by_path round trips
//! - select_by_shader determinism and idempotence
//! - NameFilter include/exclude/unrestricted modes
//! - CurveBinding remap asymmetry
//! - propagate coverage, filtering, kind translation
//! - snapshot scalar/color round trips and per-entry skips
//! - merge precedence

use glam::Vec4;

use clipforge::animation::{Curve, CurveBinding, CurveClip, TemplateClip};
use clipforge::errors::ClipforgeError;
use clipforge::propagation::{
    NameFilter, SelectionSet, find_by_path, merge, node_path, propagate, select_by_shader,
    snapshot,
};
use clipforge::scene::{Material, NodeKey, RenderableKind, Scene};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Builds the character fixture used throughout:
///
/// Root
///  ├─ Armature            (no renderable)
///  ├─ Body                (SkinnedMesh, "lilToon/Lit")
///  ├─ Hair                (SkinnedMesh, "lilToon/Lit")
///  ├─ Outfit              (no renderable)
///  │   └─ Jacket          (SkinnedMesh, "lilToon/Lit")
///  ├─ Prop                (StaticMesh,  "lilToon/Lit")
///  └─ Glasses             (StaticMesh,  "Standard")
fn character_scene() -> (Scene, NodeKey) {
    let mut scene = Scene::new();
    let root = scene.create_node("Root");

    let lil = scene.add_material(
        Material::new("lilToon/Lit")
            .with_float("_Shadow", 0.6)
            .with_color("_ShadowColor", Vec4::new(0.8, 0.7, 0.6, 1.0)),
    );
    let standard = scene.add_material(Material::new("Standard"));

    scene.build_node("Armature").with_parent(root).build();
    scene
        .build_node("Body")
        .with_parent(root)
        .with_skinned_mesh(vec![lil])
        .build();
    scene
        .build_node("Hair")
        .with_parent(root)
        .with_skinned_mesh(vec![lil])
        .build();
    let outfit = scene.build_node("Outfit").with_parent(root).build();
    scene
        .build_node("Jacket")
        .with_parent(outfit)
        .with_skinned_mesh(vec![lil])
        .build();
    scene
        .build_node("Prop")
        .with_parent(root)
        .with_static_mesh(vec![lil])
        .build();
    scene
        .build_node("Glasses")
        .with_parent(root)
        .with_static_mesh(vec![standard])
        .build();

    (scene, root)
}

fn shadow_template() -> TemplateClip {
    TemplateClip::new("Shadow_Strength").with_track(
        CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow"),
        Curve::constant(0.8),
    )
}

// ============================================================================
// PathIndex: node_path / find_by_path
// ============================================================================

#[test]
fn path_of_root_is_empty() {
    let (scene, root) = character_scene();
    assert_eq!(node_path(&scene, root, root), Some(String::new()));
}

#[test]
fn path_of_nested_node() {
    let (scene, root) = character_scene();
    let jacket = find_by_path(&scene, root, "Outfit/Jacket").unwrap();
    assert_eq!(node_path(&scene, jacket, root), Some("Outfit/Jacket".into()));
}

#[test]
fn path_of_detached_node_is_none() {
    let (mut scene, root) = character_scene();
    let stray = scene.create_node("Stray");
    assert_eq!(node_path(&scene, stray, root), None);
}

#[test]
fn find_by_path_empty_resolves_root() {
    let (scene, root) = character_scene();
    assert_eq!(find_by_path(&scene, root, ""), Some(root));
}

#[test]
fn find_by_path_missing_segment() {
    let (scene, root) = character_scene();
    assert_eq!(find_by_path(&scene, root, "Outfit/Socks"), None);
}

#[test]
fn path_round_trip_for_every_selected_node() {
    let (scene, root) = character_scene();
    for path in select_by_shader(&scene, root, "lil") {
        let key = find_by_path(&scene, root, &path).expect("selected path resolves");
        assert_eq!(node_path(&scene, key, root), Some(path));
    }
}

// ============================================================================
// SelectionFilter
// ============================================================================

#[test]
fn select_matches_shader_substring() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    assert_eq!(selection.len(), 4);
    assert!(selection.contains("Body"));
    assert!(selection.contains("Hair"));
    assert!(selection.contains("Outfit/Jacket"));
    assert!(selection.contains("Prop"));
    assert!(!selection.contains("Glasses"));
    assert!(!selection.contains("Armature"));
}

#[test]
fn select_is_deterministic() {
    let (scene, root) = character_scene();
    let a = select_by_shader(&scene, root, "lil");
    let b = select_by_shader(&scene, root, "lil");
    assert_eq!(a, b);
}

#[test]
fn select_ignores_non_matching_additions() {
    let (mut scene, root) = character_scene();
    let before = select_by_shader(&scene, root, "lil").len();

    let other = scene.add_material(Material::new("Toon/Other"));
    scene
        .build_node("Hat")
        .with_parent(root)
        .with_static_mesh(vec![other])
        .build();

    let after = select_by_shader(&scene, root, "lil").len();
    assert_eq!(before, after, "Non-matching shader must not change selection");
}

#[test]
fn select_skips_dead_material_keys() {
    let (mut scene, root) = character_scene();
    let mat = scene.add_material(Material::new("lilToon/Lit"));
    scene
        .build_node("Broken")
        .with_parent(root)
        .with_static_mesh(vec![mat])
        .build();
    scene.materials.remove(mat);

    let selection = select_by_shader(&scene, root, "lil");
    assert!(!selection.contains("Broken"));
}

// ============================================================================
// NamePatternFilter
// ============================================================================

#[test]
fn filter_unrestricted_permits_everything() {
    let filter = NameFilter::unrestricted();
    assert!(filter.permits("Body"));
    assert!(filter.permits("Hair"));
    assert!(filter.permits(""));
}

#[test]
fn filter_include_is_case_insensitive() {
    let filter = NameFilter::include("body");
    assert!(filter.permits("Body_01"));
    assert!(filter.permits("UPPERBODY"));
    assert!(!filter.permits("Hair"));
}

#[test]
fn filter_exclude_is_case_insensitive() {
    let filter = NameFilter::exclude("body");
    assert!(!filter.permits("Body_01"));
    assert!(filter.permits("Hair"));
}

// ============================================================================
// BindingRemapper
// ============================================================================

#[test]
fn remap_identity_on_matching_kinds() {
    let skinned = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    let remapped = skinned.remap(RenderableKind::SkinnedMesh).unwrap();
    assert_eq!(remapped, skinned);
}

#[test]
fn remap_downgrades_skinned_to_static() {
    let skinned = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    let remapped = skinned.remap(RenderableKind::StaticMesh).unwrap();
    assert_eq!(remapped.kind, RenderableKind::StaticMesh);
    assert_eq!(remapped.property, "material._Shadow");
}

#[test]
fn remap_never_upgrades_static_to_skinned() {
    let static_binding = CurveBinding::new(RenderableKind::StaticMesh, "material._Shadow");
    assert!(static_binding.remap(RenderableKind::SkinnedMesh).is_none());
}

#[test]
fn binding_material_property_helpers() {
    let binding = CurveBinding::new(RenderableKind::SkinnedMesh, "material._ShadowColor.r");
    assert_eq!(binding.material_property(), Some("_ShadowColor"));
    assert!(binding.is_color_property());

    let scalar = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    assert_eq!(scalar.material_property(), Some("_Shadow"));
    assert!(!scalar.is_color_property());

    let foreign = CurveBinding::new(RenderableKind::SkinnedMesh, "blendShape.smile");
    assert_eq!(foreign.material_property(), None);
}

// ============================================================================
// CurvePropagator
// ============================================================================

#[test]
fn propagate_covers_all_selected_remappable_nodes() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");
    let template = shadow_template();

    let clip = propagate(&scene, root, &template, &selection, &NameFilter::unrestricted()).unwrap();

    assert_eq!(clip.len(), 4);
    let skinned = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    let static_mesh = CurveBinding::new(RenderableKind::StaticMesh, "material._Shadow");
    assert!(clip.curve("Body", &skinned).is_some());
    assert!(clip.curve("Hair", &skinned).is_some());
    assert!(clip.curve("Outfit/Jacket", &skinned).is_some());
    // Static target receives the downgraded binding kind.
    assert!(clip.curve("Prop", &static_mesh).is_some());
    assert!(clip.curve("Prop", &skinned).is_none());
}

#[test]
fn propagate_reaches_children_of_unselected_parents() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");
    let template = shadow_template();

    // Outfit itself is not selected, but Jacket below it is; filtering is
    // per-node, never subtree-pruning.
    let clip = propagate(&scene, root, &template, &selection, &NameFilter::unrestricted()).unwrap();
    let skinned = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    assert!(clip.curve("Outfit/Jacket", &skinned).is_some());
}

#[test]
fn propagate_exclude_mode_skips_matching_names() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");
    let template = shadow_template();

    let clip = propagate(&scene, root, &template, &selection, &NameFilter::exclude("body")).unwrap();

    let skinned = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    assert!(clip.curve("Body", &skinned).is_none());
    assert!(clip.curve("Hair", &skinned).is_some());
}

#[test]
fn propagate_include_mode_keeps_only_matching_names() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");
    let template = shadow_template();

    let clip = propagate(&scene, root, &template, &selection, &NameFilter::include("body")).unwrap();

    assert_eq!(clip.len(), 1);
    let skinned = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    assert!(clip.curve("Body", &skinned).is_some());
}

#[test]
fn propagate_static_binding_never_lands_on_skinned_nodes() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    let template = TemplateClip::new("StaticOnly").with_track(
        CurveBinding::new(RenderableKind::StaticMesh, "material._Shadow"),
        Curve::constant(0.3),
    );

    let clip = propagate(&scene, root, &template, &selection, &NameFilter::unrestricted()).unwrap();

    // Only Prop is a static mesh; skinned nodes have no applicable mapping.
    assert_eq!(clip.len(), 1);
    let static_mesh = CurveBinding::new(RenderableKind::StaticMesh, "material._Shadow");
    assert!(clip.curve("Prop", &static_mesh).is_some());
}

#[test]
fn propagate_preserves_multi_keyframe_curves() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    let source = Curve::new(vec![0.0, 0.5, 1.0], vec![0.0, 0.25, 1.0]);
    let template = TemplateClip::new("Angle").with_track(
        CurveBinding::new(RenderableKind::SkinnedMesh, "material._LightDirectionOverride"),
        source.clone(),
    );

    let clip = propagate(&scene, root, &template, &selection, &NameFilter::unrestricted()).unwrap();
    let binding = CurveBinding::new(
        RenderableKind::SkinnedMesh,
        "material._LightDirectionOverride",
    );
    assert_eq!(clip.curve("Hair", &binding), Some(&source));
}

#[test]
fn propagate_duplicate_template_binding_last_write_wins() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    let binding = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    let template = TemplateClip::new("Dup")
        .with_track(binding.clone(), Curve::constant(0.1))
        .with_track(binding.clone(), Curve::constant(0.9));

    let clip = propagate(&scene, root, &template, &selection, &NameFilter::unrestricted()).unwrap();
    let curve = clip.curve("Body", &binding).unwrap();
    assert!(approx(curve.first_value().unwrap(), 0.9));
}

#[test]
fn propagate_empty_selection_yields_empty_clip() {
    let (scene, root) = character_scene();
    let template = shadow_template();

    let clip = propagate(
        &scene,
        root,
        &template,
        &SelectionSet::default(),
        &NameFilter::unrestricted(),
    )
    .unwrap();
    assert!(clip.is_empty());
}

#[test]
fn propagate_dead_root_is_request_failure() {
    let (mut scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");
    scene.remove_node(root);

    let result = propagate(
        &scene,
        root,
        &shadow_template(),
        &selection,
        &NameFilter::unrestricted(),
    );
    assert!(matches!(result, Err(ClipforgeError::NodeNotFound(_))));
}

// ============================================================================
// SnapshotBuilder
// ============================================================================

#[test]
fn snapshot_scalar_round_trip() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    let clip = snapshot(&scene, root, &shadow_template(), &selection).unwrap();

    let skinned = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");
    let curve = clip.curve("Body", &skinned).unwrap();
    assert_eq!(curve.len(), 1);
    assert!(approx(curve.times[0], 0.0));
    assert!(approx(curve.first_value().unwrap(), 0.6));
}

#[test]
fn snapshot_color_round_trip() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    let template = TemplateClip::new("ShadowColor").with_track(
        CurveBinding::new(RenderableKind::SkinnedMesh, "material._ShadowColor.r"),
        Curve::constant(0.0),
    );
    let clip = snapshot(&scene, root, &template, &selection).unwrap();

    let expected = [0.8, 0.7, 0.6, 1.0];
    for (channel, want) in ['r', 'g', 'b', 'a'].into_iter().zip(expected) {
        let binding =
            CurveBinding::color_channel(RenderableKind::SkinnedMesh, "_ShadowColor", channel);
        let curve = clip
            .curve("Body", &binding)
            .unwrap_or_else(|| panic!("missing channel {channel}"));
        assert!(
            approx(curve.first_value().unwrap(), want),
            "channel {channel}: expected {want}, got {:?}",
            curve.first_value()
        );
    }
}

#[test]
fn snapshot_downgrades_binding_for_static_targets() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    let clip = snapshot(&scene, root, &shadow_template(), &selection).unwrap();

    let static_mesh = CurveBinding::new(RenderableKind::StaticMesh, "material._Shadow");
    let curve = clip.curve("Prop", &static_mesh).unwrap();
    assert!(approx(curve.first_value().unwrap(), 0.6));
}

#[test]
fn snapshot_skips_stale_paths() {
    let (scene, root) = character_scene();
    let mut selection = select_by_shader(&scene, root, "lil");
    selection.insert("Ghost".to_owned());

    let clip = snapshot(&scene, root, &shadow_template(), &selection).unwrap();

    // The stale entry is skipped; the live ones are all captured.
    assert_eq!(clip.len(), 4);
}

#[test]
fn snapshot_skips_nodes_without_renderable() {
    let (scene, root) = character_scene();
    let mut selection = SelectionSet::default();
    selection.insert("Armature".to_owned());
    selection.insert("Body".to_owned());

    let clip = snapshot(&scene, root, &shadow_template(), &selection).unwrap();
    assert_eq!(clip.len(), 1);
}

#[test]
fn snapshot_skips_missing_properties() {
    let (scene, root) = character_scene();
    let selection = select_by_shader(&scene, root, "lil");

    let template = TemplateClip::new("Missing").with_track(
        CurveBinding::new(RenderableKind::SkinnedMesh, "material._DoesNotExist"),
        Curve::constant(1.0),
    );
    let clip = snapshot(&scene, root, &template, &selection).unwrap();
    assert!(clip.is_empty());
}

#[test]
fn snapshot_empty_selection_is_request_failure() {
    let (scene, root) = character_scene();
    let result = snapshot(&scene, root, &shadow_template(), &SelectionSet::default());
    assert!(matches!(result, Err(ClipforgeError::EmptySelection)));
}

// ============================================================================
// ClipMerger
// ============================================================================

#[test]
fn merge_later_clip_wins_collisions() {
    let binding = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");

    let mut a = CurveClip::new("a");
    a.set_curve("Body", binding.clone(), Curve::constant(0.1));
    let mut b = CurveClip::new("b");
    b.set_curve("Body", binding.clone(), Curve::constant(0.9));

    let ab = merge("ab", vec![a.clone(), b.clone()]);
    assert!(approx(
        ab.curve("Body", &binding).unwrap().first_value().unwrap(),
        0.9
    ));

    let ba = merge("ba", vec![b, a]);
    assert!(approx(
        ba.curve("Body", &binding).unwrap().first_value().unwrap(),
        0.1
    ));
}

#[test]
fn merge_unions_disjoint_entries() {
    let binding = CurveBinding::new(RenderableKind::SkinnedMesh, "material._Shadow");

    let mut a = CurveClip::new("a");
    a.set_curve("Body", binding.clone(), Curve::constant(0.1));
    let mut b = CurveClip::new("b");
    b.set_curve("Hair", binding.clone(), Curve::constant(0.9));

    let merged = merge("merged", vec![a, b]);
    assert_eq!(merged.len(), 2);
    assert!(merged.curve("Body", &binding).is_some());
    assert!(merged.curve("Hair", &binding).is_some());
}

#[test]
fn merge_of_nothing_is_empty() {
    let merged = merge("empty", Vec::new());
    assert!(merged.is_empty());
}
