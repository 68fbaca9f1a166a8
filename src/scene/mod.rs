//! Scene graph module.
//!
//! A read view over the external scene hierarchy:
//! - Node: named scene node with parent/child links and an optional renderable
//! - Renderable: tagged static-mesh / skinned-mesh payload referencing materials
//! - Material: shader identifier plus a named property table
//! - Scene: node and material pools with hierarchy maintenance

pub mod material;
pub mod node;
pub mod scene;

pub use material::{Material, PropertyValue};
pub use node::{Bounds, Node, Renderable, RenderableKind};
pub use scene::{NodeBuilder, Scene};

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
    pub struct MaterialKey;
}
