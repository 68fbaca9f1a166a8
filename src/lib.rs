//! Templated curve propagation for 3D character assets.
//!
//! Given a scene hierarchy whose nodes may carry renderables with shared
//! materials, this crate selects nodes by shader predicate, snapshots their
//! current material state into baseline curve clips, and propagates template
//! curves onto every matching node with binding-kind translation and
//! name-pattern filtering. The produced [`CurveClip`] artifacts are handed
//! back to the caller; persistence and editor integration stay outside.

pub mod animation;
pub mod errors;
pub mod generator;
pub mod propagation;
pub mod scene;

pub use animation::{ClipKey, Curve, CurveBinding, CurveClip, TemplateClip, TemplateTrack};
pub use errors::{ClipforgeError, Result};
pub use generator::{GeneratedArtifacts, GenerationConfig, Templates, generate};
pub use propagation::{
    FilterMode, NameFilter, SelectionSet, apply_anchor_override, find_by_path, merge, node_path,
    propagate, select_by_shader, snapshot,
};
pub use scene::{
    Bounds, Material, MaterialKey, Node, NodeKey, PropertyValue, Renderable, RenderableKind, Scene,
};
