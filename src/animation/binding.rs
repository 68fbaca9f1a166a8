use crate::scene::RenderableKind;

/// Identifies an animatable property on a renderable of a given kind.
///
/// Property paths follow the `material.<Prop>` convention, with color
/// channels addressed as `material.<Prop>.r` / `.g` / `.b` / `.a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurveBinding {
    pub kind: RenderableKind,
    pub property: String,
}

impl CurveBinding {
    #[must_use]
    pub fn new(kind: RenderableKind, property: &str) -> Self {
        Self {
            kind,
            property: property.to_owned(),
        }
    }

    /// Translates this binding for a node of `target` kind.
    ///
    /// Templates are authored against the richer skinned kind, so a skinned
    /// binding downgrades onto a static mesh. The reverse direction is not
    /// supported and yields `None`, as does any other mismatch.
    #[must_use]
    pub fn remap(&self, target: RenderableKind) -> Option<CurveBinding> {
        match (self.kind, target) {
            (RenderableKind::StaticMesh, RenderableKind::StaticMesh)
            | (RenderableKind::SkinnedMesh, RenderableKind::SkinnedMesh) => Some(self.clone()),
            (RenderableKind::SkinnedMesh, RenderableKind::StaticMesh) => Some(CurveBinding {
                kind: RenderableKind::StaticMesh,
                property: self.property.clone(),
            }),
            (RenderableKind::StaticMesh, RenderableKind::SkinnedMesh) => None,
        }
    }

    /// The bare material property name: `material._ShadowColor.r` yields
    /// `_ShadowColor`. `None` when the path has no `material.` prefix.
    #[must_use]
    pub fn material_property(&self) -> Option<&str> {
        let mut parts = self.property.split('.');
        if parts.next()? != "material" {
            return None;
        }
        parts.next()
    }

    /// Whether the bound property is a color, identified by a
    /// case-insensitive substring match on the bare property name.
    #[must_use]
    pub fn is_color_property(&self) -> bool {
        self.material_property()
            .is_some_and(|p| p.to_ascii_lowercase().contains("color"))
    }

    /// Builds the channel binding `material.<prop>.<channel>` for a color
    /// property of `kind`.
    #[must_use]
    pub fn color_channel(kind: RenderableKind, property: &str, channel: char) -> Self {
        Self {
            kind,
            property: format!("material.{property}.{channel}"),
        }
    }
}
