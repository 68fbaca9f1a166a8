use crate::animation::clip::COLOR_CHANNELS;
use crate::animation::{Curve, CurveBinding, CurveClip, TemplateClip};
use crate::errors::{ClipforgeError, Result};
use crate::propagation::path::find_by_path;
use crate::propagation::select::SelectionSet;
use crate::scene::{NodeKey, Scene};

/// Captures the current material state of every selected node as a baseline
/// clip of single-keyframe constant curves.
///
/// For each selected path and each template binding: resolve the node,
/// translate the binding kind with the one-directional remap rule, and read
/// the referenced material property. Scalar properties emit one constant
/// curve; color properties (case-insensitive "color" in the bare name)
/// expand into four channel curves holding the current RGBA value.
///
/// Per-entry problems (a stale path, a node without a usable renderable or
/// material, a property the material does not carry) are logged and skipped.
/// Only a dead `root` key or an empty selection fail the whole request.
pub fn snapshot(
    scene: &Scene,
    root: NodeKey,
    template: &TemplateClip,
    selection: &SelectionSet,
) -> Result<CurveClip> {
    if scene.get_node(root).is_none() {
        return Err(ClipforgeError::NodeNotFound("root"));
    }
    if selection.is_empty() {
        return Err(ClipforgeError::EmptySelection);
    }

    let mut clip = CurveClip::new(&template.name);

    for path in selection {
        let Some(key) = find_by_path(scene, root, path) else {
            log::warn!("snapshot: selected path not found in scene: {path}");
            continue;
        };
        let Some(node) = scene.get_node(key) else {
            continue;
        };

        let Some(renderable) = &node.renderable else {
            log::warn!("snapshot: no renderable on selected node: {path}");
            continue;
        };
        let kind = renderable.kind();

        let Some(material) = renderable
            .materials()
            .first()
            .and_then(|&mat| scene.get_material(mat))
        else {
            log::warn!("snapshot: no material on selected node: {path}");
            continue;
        };

        for track in &template.tracks {
            let Some(binding) = track.binding.remap(kind) else {
                continue;
            };
            let Some(property) = binding.material_property() else {
                continue;
            };
            if !material.has_property(property) {
                continue;
            }

            if binding.is_color_property() {
                let Some(color) = material.color(property) else {
                    continue;
                };
                for (i, channel) in COLOR_CHANNELS.iter().enumerate() {
                    clip.set_curve(
                        path,
                        CurveBinding::color_channel(kind, property, *channel),
                        Curve::constant(color[i]),
                    );
                }
            } else if let Some(value) = material.float(property) {
                clip.set_curve(path, binding.clone(), Curve::constant(value));
            }
        }
    }

    Ok(clip)
}
