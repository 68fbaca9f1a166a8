use crate::errors::{ClipforgeError, Result};
use crate::scene::{Bounds, NodeKey, Renderable, Scene};

/// Re-anchors every skinned renderable under `root` to `anchor`.
///
/// Sets the probe anchor and root bone to `anchor` and resets the local
/// bounds to the unit volume around the origin. This is the one mutating
/// traversal in the crate; it is opted into explicitly by the caller and
/// invoked at most once per generation request, never implicitly by
/// propagation.
pub fn apply_anchor_override(scene: &mut Scene, root: NodeKey, anchor: NodeKey) -> Result<()> {
    if scene.get_node(root).is_none() {
        return Err(ClipforgeError::NodeNotFound("root"));
    }
    if scene.get_node(anchor).is_none() {
        return Err(ClipforgeError::NodeNotFound("anchor"));
    }

    // Collect first, mutate after: keeps the read walk on an immutable scene.
    let mut skinned = Vec::new();
    let mut stack = vec![root];
    while let Some(key) = stack.pop() {
        let Some(node) = scene.get_node(key) else {
            continue;
        };
        stack.extend_from_slice(node.children());

        if matches!(&node.renderable, Some(Renderable::SkinnedMesh { .. })) {
            skinned.push(key);
        }
    }

    for key in skinned {
        if let Some(node) = scene.get_node_mut(key)
            && let Some(Renderable::SkinnedMesh {
                anchor: probe_anchor,
                root_bone,
                bounds,
                ..
            }) = &mut node.renderable
        {
            *probe_anchor = Some(anchor);
            *root_bone = Some(anchor);
            *bounds = Bounds::default();
        }
    }

    Ok(())
}
