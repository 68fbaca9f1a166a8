use slotmap::SlotMap;

use crate::scene::material::Material;
use crate::scene::node::{Node, Renderable};
use crate::scene::{MaterialKey, NodeKey};

/// Scene graph container.
///
/// Pure data layer: a node pool, the root list, and the shared material pool.
/// Curve generation treats the whole structure as read-only; only the
/// explicitly opted-in anchor-override traversal mutates renderable fields.
#[derive(Debug, Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeKey, Node>,
    pub root_nodes: Vec<NodeKey>,
    pub materials: SlotMap<MaterialKey, Material>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a node with the chained [`NodeBuilder`] API.
    pub fn build_node(&'_ mut self, name: &str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// Adds a node to the scene as a root node.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    /// Creates an empty named root node.
    pub fn create_node(&mut self, name: &str) -> NodeKey {
        self.add_node(Node::new(name))
    }

    /// Inserts a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeKey) -> NodeKey {
        let key = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.push_child(key);
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.set_parent(Some(parent));
        }

        key
    }

    /// Removes a node and its whole subtree.
    pub fn remove_node(&mut self, key: NodeKey) {
        // Take the children list first to avoid borrow conflicts.
        let children = if let Some(node) = self.nodes.get(key) {
            node.children.clone()
        } else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        let parent = self.nodes.get(key).and_then(|n| n.parent);
        if let Some(parent_key) = parent {
            if let Some(p) = self.nodes.get_mut(parent_key)
                && let Some(pos) = p.children.iter().position(|&x| x == key)
            {
                p.children.remove(pos);
            }
        } else if let Some(pos) = self.root_nodes.iter().position(|&x| x == key) {
            self.root_nodes.remove(pos);
        }

        self.nodes.remove(key);
    }

    /// Re-parents `child` under `parent`, detaching it from its old parent
    /// or the root list.
    pub fn attach(&mut self, child: NodeKey, parent: NodeKey) {
        if child == parent {
            log::warn!("cannot attach a node to itself");
            return;
        }

        // Detach from old parent (or the root list).
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // Attach to new parent.
        if let Some(p) = self.nodes.get_mut(parent) {
            p.push_child(child);
        } else {
            log::error!("parent node not found during attach");
            self.root_nodes.push(child);
            return;
        }

        if let Some(c) = self.nodes.get_mut(child) {
            c.set_parent(Some(parent));
        }
    }

    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[must_use]
    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    #[must_use]
    pub fn get_name(&self, key: NodeKey) -> Option<&str> {
        self.nodes.get(key).map(|n| n.name.as_str())
    }

    pub fn set_name(&mut self, key: NodeKey, name: &str) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.name = name.to_owned();
        }
    }

    // ========================================================================
    // Material pool
    // ========================================================================

    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    #[must_use]
    pub fn get_material(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    #[must_use]
    pub fn get_material_mut(&mut self, key: MaterialKey) -> Option<&mut Material> {
        self.materials.get_mut(key)
    }
}

/// Chained node construction helper.
pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    parent: Option<NodeKey>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &str) -> Self {
        Self {
            scene,
            node: Node::new(name),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeKey) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_renderable(mut self, renderable: Renderable) -> Self {
        self.node.renderable = Some(renderable);
        self
    }

    #[must_use]
    pub fn with_static_mesh(self, materials: Vec<MaterialKey>) -> Self {
        self.with_renderable(Renderable::static_mesh(materials))
    }

    #[must_use]
    pub fn with_skinned_mesh(self, materials: Vec<MaterialKey>) -> Self {
        self.with_renderable(Renderable::skinned_mesh(materials))
    }

    /// Completes the build, inserting the node into the scene.
    pub fn build(self) -> NodeKey {
        let key = self.scene.nodes.insert(self.node);

        if let Some(parent) = self.parent {
            if let Some(p) = self.scene.nodes.get_mut(parent) {
                p.push_child(key);
            }
            if let Some(c) = self.scene.nodes.get_mut(key) {
                c.set_parent(Some(parent));
            }
        } else {
            self.scene.root_nodes.push(key);
        }

        key
    }
}
