//! The property store.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Category, Property, StyleValue};
use crate::error::Result;

/// Flat map of known properties to their current values.
///
/// Every property starts unset. Writes follow last-write-wins; writing an
/// unset value (empty text) removes the entry. Iteration is always in
/// [`Property::ALL`] order, so serialization is deterministic.
///
/// # Example
///
/// ```rust
/// use stylecraft::{Property, StyleConfig};
///
/// let mut config = StyleConfig::new();
/// config.set(Property::FontSize, "16px");
/// config.set(Property::FontWeight, "");
///
/// assert_eq!(config.len(), 1);
/// assert_eq!(config.get(Property::FontSize).unwrap().to_css(), "16px");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleConfig {
    values: BTreeMap<Property, StyleValue>,
}

impl StyleConfig {
    /// Creates a store with every property unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the store for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, property: Property, value: V) -> Self {
        self.set(property, value);
        self
    }

    /// Returns the current value of a property, if set.
    pub fn get(&self, property: Property) -> Option<&StyleValue> {
        self.values.get(&property)
    }

    /// Sets a single property. Unset values clear it.
    pub fn set<V: Into<StyleValue>>(&mut self, property: Property, value: V) {
        let value = value.into();
        if value.is_unset() {
            self.values.remove(&property);
        } else {
            self.values.insert(property, value);
        }
    }

    /// Sets a property by camelCase key or kebab-case name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`](crate::Error::UnknownProperty) for
    /// names outside the known property set.
    pub fn set_key<V: Into<StyleValue>>(&mut self, key: &str, value: V) -> Result<()> {
        let property = Property::resolve(key)?;
        self.set(property, value);
        Ok(())
    }

    /// Applies a partial update. Later entries win over earlier ones.
    pub fn update<I, V>(&mut self, patch: I)
    where
        I: IntoIterator<Item = (Property, V)>,
        V: Into<StyleValue>,
    {
        for (property, value) in patch {
            self.set(property, value);
        }
    }

    /// Applies a partial update keyed by property name.
    ///
    /// All keys are resolved before anything is written, so an unknown key
    /// leaves the store untouched.
    pub fn update_keys<'a, I, V>(&mut self, patch: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<StyleValue>,
    {
        let resolved = patch
            .into_iter()
            .map(|(key, value)| Property::resolve(key).map(|p| (p, value)))
            .collect::<Result<Vec<_>>>()?;
        self.update(resolved);
        Ok(())
    }

    /// Clears a single property.
    pub fn unset(&mut self, property: Property) -> Option<StyleValue> {
        self.values.remove(&property)
    }

    /// Clears every property.
    pub fn reset(&mut self) {
        debug!("resetting style config ({} properties set)", self.values.len());
        self.values.clear();
    }

    /// Clears every property in one editor category.
    pub fn reset_category(&mut self, category: Category) {
        debug!("resetting style category {:?}", category);
        self.values.retain(|p, _| p.category() != category);
    }

    /// Iterates the set properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &StyleValue)> {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    /// Returns `true` if the property is set.
    pub fn has(&self, property: Property) -> bool {
        self.values.contains_key(&property)
    }

    /// Number of set properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when nothing is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: Into<StyleValue>> FromIterator<(Property, V)> for StyleConfig {
    fn from_iter<I: IntoIterator<Item = (Property, V)>>(iter: I) -> Self {
        let mut config = StyleConfig::new();
        config.update(iter);
        config
    }
}
