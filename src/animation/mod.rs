//! Curve and clip data model.
//!
//! - Curve: scalar keyframe samples
//! - CurveBinding: which property on which renderable kind a curve animates
//! - TemplateClip: the ordered, authored template source
//! - CurveClip: a generated artifact keyed by (node path, binding)

pub mod binding;
pub mod clip;
pub mod curve;

pub use binding::CurveBinding;
pub use clip::{ClipKey, CurveClip, TemplateClip, TemplateTrack};
pub use curve::Curve;
