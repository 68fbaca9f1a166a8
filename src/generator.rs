//! One-shot generation pipeline.
//!
//! Runs a whole generation request in the documented order: selection once,
//! baseline snapshot, unrestricted angle propagation, then the two
//! name-filtered strength passes composed with explicit merge precedence.
//! The returned artifacts are handed to the caller wholesale; writing them
//! to disk and wiring them into an animator is the caller's concern.

use crate::animation::{CurveClip, TemplateClip};
use crate::errors::{ClipforgeError, Result};
use crate::propagation::{NameFilter, merge, propagate, select_by_shader, snapshot};
use crate::scene::{NodeKey, Scene};

/// Externally injected request configuration.
///
/// The reference behavior hard-coded both values ("lil" for the shader
/// predicate, "body" for the name pattern); they are configuration here so
/// the engine is reusable across differently authored template sets. A
/// single pattern serves all passes of one request.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Substring matched against material shader identifiers.
    pub shader_predicate: String,
    /// Case-insensitive substring for the name include/exclude passes.
    pub name_pattern: String,
}

impl GenerationConfig {
    #[must_use]
    pub fn new(shader_predicate: &str, name_pattern: &str) -> Self {
        Self {
            shader_predicate: shader_predicate.to_owned(),
            name_pattern: name_pattern.to_owned(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new("lil", "body")
    }
}

/// The parsed template clips one generation request consumes, loaded by an
/// external asset collaborator and identified by the caller's configuration.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    /// Propagated unrestricted onto every selected node.
    pub angle: TemplateClip,
    /// Propagated onto pattern-matching nodes; also the binding source for
    /// the baseline snapshot.
    pub strength_body: TemplateClip,
    /// Propagated onto the remaining (non-matching) nodes.
    pub strength_etc: TemplateClip,
}

/// The artifacts of one generation run, ready for persistence.
#[derive(Debug, Clone)]
pub struct GeneratedArtifacts {
    /// Frozen "before" state: current material values as constant curves.
    pub baseline: CurveClip,
    /// Angle template propagated without name filtering.
    pub angle: CurveClip,
    /// Composite of the body-inclusive and body-exclusive strength passes.
    pub strength: CurveClip,
}

/// Runs one full generation request against the scene.
///
/// Selection runs once and feeds every downstream pass. The strength
/// artifact merges the include pass (body template) first and the exclude
/// pass (etc template) second, so on the rare node both passes touch, the
/// exclude pass wins.
pub fn generate(
    scene: &Scene,
    root: NodeKey,
    asset_name: &str,
    config: &GenerationConfig,
    templates: &Templates,
) -> Result<GeneratedArtifacts> {
    if scene.get_node(root).is_none() {
        return Err(ClipforgeError::NodeNotFound("root"));
    }

    let selection = select_by_shader(scene, root, &config.shader_predicate);
    if selection.is_empty() {
        return Err(ClipforgeError::EmptySelection);
    }
    log::debug!(
        "generate: {} node(s) selected by shader predicate \"{}\"",
        selection.len(),
        config.shader_predicate
    );

    let mut baseline = snapshot(scene, root, &templates.strength_body, &selection)?;
    baseline.name = format!("{asset_name}_baseline");

    let mut angle = propagate(
        scene,
        root,
        &templates.angle,
        &selection,
        &NameFilter::unrestricted(),
    )?;
    angle.name = format!("{asset_name}_angle");

    let body_pass = propagate(
        scene,
        root,
        &templates.strength_body,
        &selection,
        &NameFilter::include(&config.name_pattern),
    )?;
    let etc_pass = propagate(
        scene,
        root,
        &templates.strength_etc,
        &selection,
        &NameFilter::exclude(&config.name_pattern),
    )?;
    let strength = merge(&format!("{asset_name}_strength"), vec![body_pass, etc_pass]);

    Ok(GeneratedArtifacts {
        baseline,
        angle,
        strength,
    })
}
