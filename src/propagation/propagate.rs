use crate::animation::{CurveClip, TemplateClip};
use crate::errors::{ClipforgeError, Result};
use crate::propagation::filter::NameFilter;
use crate::propagation::select::SelectionSet;
use crate::scene::{NodeKey, Scene};

/// Propagates every template curve onto every matching node under `root`.
///
/// The walk covers the entire subtree, not just selected nodes, because a
/// descendant of a rejected node may itself be selected; rejection is
/// per-node, never subtree-pruning. A node receives a curve when its path is
/// in `selection`, its name passes `filter`, and the template binding remaps
/// onto its renderable kind. Each written curve is an owned copy so later
/// merges and edits cannot alias template data.
///
/// An empty result is success; the only failure is a `root` that is not live
/// in the scene.
pub fn propagate(
    scene: &Scene,
    root: NodeKey,
    template: &TemplateClip,
    selection: &SelectionSet,
    filter: &NameFilter,
) -> Result<CurveClip> {
    if scene.get_node(root).is_none() {
        return Err(ClipforgeError::NodeNotFound("root"));
    }

    let mut clip = CurveClip::new(&template.name);

    // Explicit stack walk accumulating into the owned output clip.
    let mut stack: Vec<(NodeKey, String)> = vec![(root, String::new())];
    while let Some((key, path)) = stack.pop() {
        let Some(node) = scene.get_node(key) else {
            continue;
        };

        for &child in node.children() {
            if let Some(name) = scene.get_name(child) {
                let child_path = if path.is_empty() {
                    name.to_owned()
                } else {
                    format!("{path}/{name}")
                };
                stack.push((child, child_path));
            }
        }

        if !selection.contains(&path) || !filter.permits(&node.name) {
            continue;
        }

        // Nodes without a renderable are legitimately skipped, as are kinds
        // the source binding cannot remap onto.
        let Some(kind) = node.renderable.as_ref().map(|r| r.kind()) else {
            continue;
        };

        for track in &template.tracks {
            if let Some(remapped) = track.binding.remap(kind) {
                clip.set_curve(&path, remapped, track.curve.clone());
            }
        }
    }

    Ok(clip)
}
