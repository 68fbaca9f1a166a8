//! The curve propagation engine.
//!
//! Pure, synchronous operations over a read-only scene:
//! - path: stable slash-joined node paths, the universal matching key
//! - select: shader-predicate selection of node paths
//! - filter: name-pattern include/exclude gating
//! - propagate: template curve propagation over a whole subtree
//! - snapshot: baseline capture of current material state
//! - merge: ordered composition of partial clips
//! - anchor: the one opt-in mutating traversal (anchor override)

pub mod anchor;
pub mod filter;
pub mod merge;
pub mod path;
pub mod propagate;
pub mod select;
pub mod snapshot;

pub use anchor::apply_anchor_override;
pub use filter::{FilterMode, NameFilter};
pub use merge::merge;
pub use path::{find_by_path, node_path};
pub use propagate::propagate;
pub use select::{SelectionSet, select_by_shader};
pub use snapshot::snapshot;
