use glam::Vec3;

use crate::scene::{MaterialKey, NodeKey};

/// The two renderable kinds an animation binding can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderableKind {
    StaticMesh,
    SkinnedMesh,
}

/// Local bounding volume of a skinned renderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub extents: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            extents: Vec3::ONE,
        }
    }
}

/// Per-node visual payload.
///
/// Materials are referenced by key and shared; several nodes may point at the
/// same [`Material`](crate::scene::Material). The skinned variant additionally
/// carries the probe anchor, root bone, and local bounds that the
/// anchor-override traversal rewrites.
#[derive(Debug, Clone)]
pub enum Renderable {
    StaticMesh {
        materials: Vec<MaterialKey>,
    },
    SkinnedMesh {
        materials: Vec<MaterialKey>,
        anchor: Option<NodeKey>,
        root_bone: Option<NodeKey>,
        bounds: Bounds,
    },
}

impl Renderable {
    #[must_use]
    pub fn static_mesh(materials: Vec<MaterialKey>) -> Self {
        Self::StaticMesh { materials }
    }

    #[must_use]
    pub fn skinned_mesh(materials: Vec<MaterialKey>) -> Self {
        Self::SkinnedMesh {
            materials,
            anchor: None,
            root_bone: None,
            bounds: Bounds::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> RenderableKind {
        match self {
            Self::StaticMesh { .. } => RenderableKind::StaticMesh,
            Self::SkinnedMesh { .. } => RenderableKind::SkinnedMesh,
        }
    }

    /// Returns the shared material keys this renderable references.
    #[inline]
    #[must_use]
    pub fn materials(&self) -> &[MaterialKey] {
        match self {
            Self::StaticMesh { materials } | Self::SkinnedMesh { materials, .. } => materials,
        }
    }
}

/// A scene node: a name, hierarchy links, and an optional renderable.
///
/// Nodes form a tree through parent/child handles. The engine only ever reads
/// nodes during curve generation; the single exception is the anchor-override
/// traversal, which rewrites skinned renderable fields in place.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub renderable: Option<Renderable>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            parent: None,
            children: Vec::new(),
            renderable: None,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Sets the parent of this node. Prefer [`Scene::attach`] which keeps
    /// both parent and child in sync; this is exposed for low-level
    /// construction outside of a `Scene`.
    ///
    /// [`Scene::attach`]: crate::scene::Scene::attach
    #[inline]
    pub fn set_parent(&mut self, parent: Option<NodeKey>) {
        self.parent = parent;
    }

    /// Appends a child handle. Prefer [`Scene::attach`] which keeps both
    /// parent and child in sync.
    ///
    /// [`Scene::attach`]: crate::scene::Scene::attach
    #[inline]
    pub fn push_child(&mut self, child: NodeKey) {
        self.children.push(child);
    }
}
