//! Template input and generated configuration snapshots.
//!
//! Both are ordered by first declaration. Ordering drives the odometer and
//! the identifiers, so a hash-ordered map must never be used here.

use indexmap::IndexMap;

/// Property name to value, in declaration order
pub type PropertyMap = IndexMap<String, String>;

/// A parameterized configuration whose values may embed sweep ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    properties: PropertyMap,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a template from pairs, keeping their order.
    ///
    /// A repeated name replaces the earlier value but keeps its position.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut template = Self::new();
        for (name, value) in pairs {
            template.insert(name, value);
        }
        template
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over (name, value) in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

impl From<PropertyMap> for Template {
    fn from(properties: PropertyMap) -> Self {
        Self { properties }
    }
}

/// One fully resolved configuration.
///
/// Owns its values: nothing done to it affects the template or any later
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    properties: PropertyMap,
}

impl Configuration {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Mutable access to a value; changes stay local to this snapshot
    pub fn get_mut(&mut self, name: &str) -> Option<&mut String> {
        self.properties.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

impl From<PropertyMap> for Configuration {
    fn from(properties: PropertyMap) -> Self {
        Self { properties }
    }
}
