//! Read-only view over parsed document trees.
//!
//! The traversal functions are generic over [`Node`], so the same code walks
//! a TOML document and a JSON document.

/// A value in a nested document: a mapping, a sequence, or a scalar.
pub trait Node: Sized {
    /// The keyed container type of this tree.
    type Mapping: Mapping<Self>;

    /// Returns the mapping if this node is one.
    fn as_mapping(&self) -> Option<&Self::Mapping>;

    /// Returns the elements if this node is a sequence.
    fn as_sequence(&self) -> Option<&[Self]>;

    /// Returns true for an explicit null. Formats without null never are.
    fn is_null(&self) -> bool {
        false
    }
}

/// A string-keyed container of nodes.
///
/// `entries` must yield pairs in the container's own iteration order, which
/// is document order for both shipped implementations.
pub trait Mapping<N>: Clone + Default {
    /// Value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<&N>;

    /// Key/value pairs in iteration order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a N)> + 'a
    where
        N: 'a;

    /// Inserts or overwrites `key`.
    fn put(&mut self, key: String, value: N);

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Node for toml::Value {
    type Mapping = toml::Table;

    fn as_mapping(&self) -> Option<&toml::Table> {
        self.as_table()
    }

    fn as_sequence(&self) -> Option<&[toml::Value]> {
        self.as_array().map(Vec::as_slice)
    }
}

impl Mapping<toml::Value> for toml::Table {
    fn lookup(&self, key: &str) -> Option<&toml::Value> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a toml::Value)> + 'a
    where
        toml::Value: 'a,
    {
        self.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn put(&mut self, key: String, value: toml::Value) {
        self.insert(key, value);
    }

    fn len(&self) -> usize {
        toml::Table::len(self)
    }
}

impl Node for serde_json::Value {
    type Mapping = serde_json::Map<String, serde_json::Value>;

    fn as_mapping(&self) -> Option<&Self::Mapping> {
        self.as_object()
    }

    fn as_sequence(&self) -> Option<&[serde_json::Value]> {
        self.as_array().map(Vec::as_slice)
    }

    fn is_null(&self) -> bool {
        serde_json::Value::is_null(self)
    }
}

impl Mapping<serde_json::Value> for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, key: &str) -> Option<&serde_json::Value> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a serde_json::Value)> + 'a
    where
        serde_json::Value: 'a,
    {
        self.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn put(&mut self, key: String, value: serde_json::Value) {
        self.insert(key, value);
    }

    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }
}
