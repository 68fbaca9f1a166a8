//! Error Types
//!
//! The engine distinguishes request-level failures from per-entry problems.
//! Only invalid top-level input (a root or anchor key that is not live in the
//! scene, an empty selection where one is required) fails a whole operation;
//! structural absence at a single node (missing renderable, missing material,
//! missing property, unresolvable path) is absorbed locally, reported through
//! `log::warn!`, and never aborts a traversal in progress.

use thiserror::Error;

/// The main error type for curve generation requests.
#[derive(Error, Debug)]
pub enum ClipforgeError {
    /// A top-level node key (root or anchor) is not live in the scene.
    #[error("node not found in scene: {0}")]
    NodeNotFound(&'static str),

    /// An operation that requires a non-empty selection received none.
    #[error("selection set is empty, nothing to generate")]
    EmptySelection,
}

/// Alias for `Result<T, ClipforgeError>`.
pub type Result<T> = std::result::Result<T, ClipforgeError>;
