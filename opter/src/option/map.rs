//! Insertion-ordered collection of option definitions.

use serde_json::Value;

use crate::error::{OpterError, OpterResult};

use super::OptionSpec;

/// Ordered map from dotted option names to their definitions.
///
/// Inserting a name that already exists replaces its definition in place,
/// keeping the original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionMap {
    entries: Vec<(String, OptionSpec)>,
}

impl OptionMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces `name`, returning the previous definition.
    pub fn insert(&mut self, name: impl Into<String>, spec: OptionSpec) -> Option<OptionSpec> {
        let key = name.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            return Some(std::mem::replace(slot, spec));
        }
        self.entries.push((key, spec));
        None
    }

    /// Builder-style [`OptionMap::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, spec: OptionSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Looks up the definition for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.entries
            .iter()
            .find_map(|(existing, spec)| (existing == name).then_some(spec))
    }

    /// Number of options in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the map holds no options.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, spec)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.entries.iter().map(as_pair)
    }

    /// Builds a map from a JSON object of option definitions.
    ///
    /// Property names follow the camelCase spelling (`defaultValue`,
    /// `type`, ...). Key order in the document is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`OpterError::OptionDefinition`] when `value` is not an object
    /// or when any entry fails to deserialize.
    ///
    /// # Examples
    ///
    /// ```
    /// use opter::OptionMap;
    /// use serde_json::json;
    ///
    /// let map = OptionMap::from_json(json!({
    ///     "count": {"character": "c", "argument": "n", "type": "Number", "defaultValue": "10"}
    /// }))?;
    /// assert_eq!(map.len(), 1);
    /// # Ok::<_, opter::OpterError>(())
    /// ```
    pub fn from_json(value: Value) -> OpterResult<Self> {
        let Value::Object(object) = value else {
            return Err(OpterError::OptionDefinition {
                option: String::new(),
                source: serde::de::Error::custom("option map must be a JSON object"),
            });
        };
        object
            .into_iter()
            .map(|(name, raw)| match serde_json::from_value(raw) {
                Ok(spec) => Ok((name, spec)),
                Err(source) => Err(OpterError::OptionDefinition {
                    option: name,
                    source,
                }),
            })
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, OptionSpec)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, OptionSpec)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, spec) in iter {
            map.insert(name, spec);
        }
        map
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a str, &'a OptionSpec);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, OptionSpec)>,
        fn(&'a (String, OptionSpec)) -> (&'a str, &'a OptionSpec),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(as_pair as fn(&'a (String, OptionSpec)) -> (&'a str, &'a OptionSpec))
    }
}

fn as_pair(entry: &(String, OptionSpec)) -> (&str, &OptionSpec) {
    (entry.0.as_str(), &entry.1)
}
