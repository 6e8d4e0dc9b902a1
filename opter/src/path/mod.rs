//! Dotted-path access into nested mappings.
//!
//! Paths are split on `.`; `"a.b.c"` addresses key `c` inside mapping `b`
//! inside mapping `a`. Reads never fail on a missing segment, and writes
//! create intermediate mappings as needed, replacing any non-mapping value
//! that sits where a mapping is required.

use serde_json::{Map, Value};

use crate::value::{ConfigTable, ConfigValue};

/// A tree addressable by dotted paths.
pub trait PathTree: Sized {
    /// Returns the child stored under `key`, if this node is a mapping that
    /// holds it.
    fn child(&self, key: &str) -> Option<&Self>;

    /// Returns the mapping stored under `key`, turning this node into a
    /// mapping and inserting an empty child mapping where necessary.
    fn child_mapping(&mut self, key: &str) -> &mut Self;

    /// Stores `value` under `key`, turning this node into a mapping first if
    /// required and overwriting any existing entry.
    fn put(&mut self, key: &str, value: Self);
}

/// Reads the value at `path`, or `None` as soon as a segment is missing.
///
/// # Examples
///
/// ```
/// use opter::path;
/// use serde_json::json;
///
/// let tree = json!({"nested": {"config": {"value": 3}}});
/// assert_eq!(path::get(&tree, "nested.config.value"), Some(&json!(3)));
/// assert_eq!(path::get(&tree, "nested.missing.value"), None);
/// ```
pub fn get<'a, T: PathTree>(tree: &'a T, path: &str) -> Option<&'a T> {
    path.split('.').try_fold(tree, |node, segment| node.child(segment))
}

/// Writes `value` at `path`, creating intermediate mappings.
///
/// # Examples
///
/// ```
/// use opter::path;
/// use serde_json::json;
///
/// let mut tree = json!({});
/// path::set(&mut tree, "a.b.c", json!(false));
/// assert_eq!(tree, json!({"a": {"b": {"c": false}}}));
/// ```
pub fn set<T: PathTree>(tree: &mut T, path: &str, value: T) {
    let Some((parents, leaf)) = path.rsplit_once('.') else {
        tree.put(path, value);
        return;
    };
    parents
        .split('.')
        .fold(tree, |node, segment| node.child_mapping(segment))
        .put(leaf, value);
}

fn json_object(node: &mut Value) -> &mut Map<String, Value> {
    match node {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            json_object(other)
        }
    }
}

impl PathTree for Value {
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn child_mapping(&mut self, key: &str) -> &mut Self {
        let entry = json_object(self)
            .entry(key)
            .or_insert_with(|| Self::Object(Map::new()));
        json_object(entry);
        entry
    }

    fn put(&mut self, key: &str, value: Self) {
        json_object(self).insert(key.to_owned(), value);
    }
}

fn config_table(node: &mut ConfigValue) -> &mut ConfigTable {
    match node {
        ConfigValue::Table(table) => table,
        other => {
            *other = ConfigValue::Table(ConfigTable::new());
            config_table(other)
        }
    }
}

impl PathTree for ConfigValue {
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_table().and_then(|table| table.get(key))
    }

    fn child_mapping(&mut self, key: &str) -> &mut Self {
        let entry = config_table(self)
            .entry(key.to_owned())
            .or_insert_with(|| Self::Table(ConfigTable::new()));
        config_table(entry);
        entry
    }

    fn put(&mut self, key: &str, value: Self) {
        config_table(self).insert(key.to_owned(), value);
    }
}
