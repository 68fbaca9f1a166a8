use glam::Vec4;
use rustc_hash::FxHashMap;

/// A material parameter value: either a scalar or an RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Color(Vec4),
}

/// A shared material: a shader identifier and a named property table.
///
/// The selection filter matches on the shader identifier; the snapshot
/// builder reads current property values. The engine never mutates
/// materials.
#[derive(Debug, Clone, Default)]
pub struct Material {
    pub shader: String,
    properties: FxHashMap<String, PropertyValue>,
}

impl Material {
    #[must_use]
    pub fn new(shader: &str) -> Self {
        Self {
            shader: shader.to_owned(),
            properties: FxHashMap::default(),
        }
    }

    /// Chained setter for a scalar property.
    #[must_use]
    pub fn with_float(mut self, property: &str, value: f32) -> Self {
        self.set_float(property, value);
        self
    }

    /// Chained setter for a color property.
    #[must_use]
    pub fn with_color(mut self, property: &str, value: Vec4) -> Self {
        self.set_color(property, value);
        self
    }

    pub fn set_float(&mut self, property: &str, value: f32) {
        self.properties
            .insert(property.to_owned(), PropertyValue::Float(value));
    }

    pub fn set_color(&mut self, property: &str, value: Vec4) {
        self.properties
            .insert(property.to_owned(), PropertyValue::Color(value));
    }

    #[must_use]
    pub fn has_property(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Reads a scalar property. Returns `None` if the property is missing or
    /// holds a color.
    #[must_use]
    pub fn float(&self, property: &str) -> Option<f32> {
        match self.properties.get(property) {
            Some(PropertyValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Reads a color property. Returns `None` if the property is missing or
    /// holds a scalar.
    #[must_use]
    pub fn color(&self, property: &str) -> Option<Vec4> {
        match self.properties.get(property) {
            Some(PropertyValue::Color(v)) => Some(*v),
            _ => None,
        }
    }
}
