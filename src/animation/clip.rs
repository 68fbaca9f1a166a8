use glam::Vec4;
use rustc_hash::FxHashMap;

use crate::animation::binding::CurveBinding;
use crate::animation::curve::Curve;
use crate::scene::RenderableKind;

pub(crate) const COLOR_CHANNELS: [char; 4] = ['r', 'g', 'b', 'a'];

/// One authored track of a template clip.
#[derive(Debug, Clone)]
pub struct TemplateTrack {
    pub binding: CurveBinding,
    pub curve: Curve,
}

/// A template clip: the ordered `(binding, curve)` pairs an external asset
/// loader parsed from an authored source. Read-only for the engine.
#[derive(Debug, Clone, Default)]
pub struct TemplateClip {
    pub name: String,
    pub tracks: Vec<TemplateTrack>,
}

impl TemplateClip {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            tracks: Vec::new(),
        }
    }

    /// Chained track appender.
    #[must_use]
    pub fn with_track(mut self, binding: CurveBinding, curve: Curve) -> Self {
        self.tracks.push(TemplateTrack { binding, curve });
        self
    }
}

/// Key of one generated clip entry: node path plus binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipKey {
    pub path: String,
    pub binding: CurveBinding,
}

/// A generated curve artifact: unique `(path, binding) → curve` entries.
///
/// Every entry owns its curve; inserting under an existing key overwrites,
/// which is the collision rule the merger relies on.
#[derive(Debug, Clone, Default)]
pub struct CurveClip {
    pub name: String,
    entries: FxHashMap<ClipKey, Curve>,
}

impl CurveClip {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            entries: FxHashMap::default(),
        }
    }

    /// Writes a curve under `(path, binding)`, overwriting any existing entry.
    pub fn set_curve(&mut self, path: &str, binding: CurveBinding, curve: Curve) {
        self.entries.insert(
            ClipKey {
                path: path.to_owned(),
                binding,
            },
            curve,
        );
    }

    #[must_use]
    pub fn curve(&self, path: &str, binding: &CurveBinding) -> Option<&Curve> {
        self.entries.get(&ClipKey {
            path: path.to_owned(),
            binding: binding.clone(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClipKey, &Curve)> {
        self.entries.iter()
    }

    /// Moves every entry of `other` into this clip, overwriting on collision.
    pub fn absorb(&mut self, other: CurveClip) {
        self.entries.extend(other.entries);
    }

    /// Reassembles an RGBA value from the four channel curves of a color
    /// property, wherever they are bound in the clip. Each channel takes the
    /// value of the curve's first keyframe; missing channels stay zero.
    /// `None` when no channel of the property is present at all.
    #[must_use]
    pub fn read_color(&self, property: &str) -> Option<Vec4> {
        let mut color = Vec4::ZERO;
        let mut found = false;

        for (key, curve) in &self.entries {
            let Some(value) = curve.first_value() else {
                continue;
            };
            for (i, channel) in COLOR_CHANNELS.iter().enumerate() {
                if key.binding.property == format!("material.{property}.{channel}") {
                    color[i] = value;
                    found = true;
                }
            }
        }

        found.then_some(color)
    }

    /// Overwrites the four channel curves of a color property at `path` with
    /// constant curves holding `color`.
    pub fn set_color(&mut self, path: &str, kind: RenderableKind, property: &str, color: Vec4) {
        for (i, channel) in COLOR_CHANNELS.iter().enumerate() {
            self.set_curve(
                path,
                CurveBinding::color_channel(kind, property, *channel),
                Curve::constant(color[i]),
            );
        }
    }
}
