use crate::scene::{NodeKey, Scene};

/// Computes the slash-joined path of `node` relative to `root`.
///
/// The root itself maps to the empty string. Returns `None` when `node` is
/// not in the scene or not a descendant of `root`. Deterministic: two calls
/// on the same structure yield identical strings, which makes the path the
/// sole equality key for all matching operations.
#[must_use]
pub fn node_path(scene: &Scene, node: NodeKey, root: NodeKey) -> Option<String> {
    if node == root {
        return Some(String::new());
    }

    let mut segments = Vec::new();
    let mut current = node;

    loop {
        let n = scene.get_node(current)?;
        segments.push(n.name.as_str());
        let parent = n.parent?;
        if parent == root {
            break;
        }
        current = parent;
    }

    segments.reverse();
    Some(segments.join("/"))
}

/// Resolves a slash-joined path below `root` back to a node key.
///
/// The empty path resolves to `root`. Each segment matches the first child
/// with that name. `None` when any segment has no match.
#[must_use]
pub fn find_by_path(scene: &Scene, root: NodeKey, path: &str) -> Option<NodeKey> {
    if path.is_empty() {
        return Some(root);
    }

    let mut current = root;
    for segment in path.split('/') {
        let node = scene.get_node(current)?;
        current = node
            .children()
            .iter()
            .copied()
            .find(|&child| scene.get_name(child) == Some(segment))?;
    }

    Some(current)
}
