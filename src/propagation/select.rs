use rustc_hash::FxHashSet;

use crate::scene::{NodeKey, Scene};

/// The set of node paths a generation request operates on. Computed once per
/// request, read-only thereafter.
pub type SelectionSet = FxHashSet<String>;

/// Walks the whole subtree under `root` and collects the path of every node
/// whose renderable references a material whose shader identifier contains
/// `predicate`.
///
/// Visibility is not a filter criterion: disabled subtrees are inspected like
/// any other. Nodes without a renderable, without materials, or with dead
/// material keys are skipped without error. Set semantics: a node with
/// several matching materials contributes one membership.
#[must_use]
pub fn select_by_shader(scene: &Scene, root: NodeKey, predicate: &str) -> SelectionSet {
    let mut selection = SelectionSet::default();

    let mut stack: Vec<(NodeKey, String)> = vec![(root, String::new())];
    while let Some((key, path)) = stack.pop() {
        let Some(node) = scene.get_node(key) else {
            continue;
        };

        if let Some(renderable) = &node.renderable {
            let matches = renderable.materials().iter().any(|&mat_key| {
                scene
                    .get_material(mat_key)
                    .is_some_and(|mat| mat.shader.contains(predicate))
            });
            if matches {
                selection.insert(path.clone());
            }
        }

        for &child in node.children() {
            let Some(name) = scene.get_name(child) else {
                continue;
            };
            let child_path = if path.is_empty() {
                name.to_owned()
            } else {
                format!("{path}/{name}")
            };
            stack.push((child, child_path));
        }
    }

    selection
}
