use crate::animation::CurveClip;

/// Composes independently generated partial clips into one artifact.
///
/// Entries are applied in list order; on a `(path, binding)` collision the
/// later clip overwrites the earlier one. The order is therefore the
/// precedence contract: callers list passes from lowest to highest priority.
/// Merging never fails.
#[must_use]
pub fn merge(name: &str, clips: Vec<CurveClip>) -> CurveClip {
    let mut merged = CurveClip::new(name);
    for clip in clips {
        merged.absorb(clip);
    }
    merged
}
