//! Request parameters, both caller supplied and protocol generated.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Value of a single request parameter.
///
/// The variant is chosen when the value is inserted: repeated keys in a query
/// string become [`ParamValue::Multi`], everything else stays [`ParamValue::Single`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A parameter that appears once.
    Single(String),
    /// A parameter that appears several times, e.g. `a=1&a=2`.
    ///
    /// Values keep their insertion order here and are sorted only when normalized.
    Multi(Vec<String>),
}

impl ParamValue {
    /// Iterate over every value carried by this parameter.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            ParamValue::Single(v) => std::slice::from_ref(v),
            ParamValue::Multi(vs) => vs,
        };
        values.iter().map(String::as_str)
    }

    /// Returns the value if this parameter appears exactly once.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(v) => Some(v),
            ParamValue::Multi(_) => None,
        }
    }

    /// A parameter is blank when it carries no non-empty value.
    pub fn is_blank(&self) -> bool {
        self.iter().all(str::is_empty)
    }

    fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(v) => {
                let first = std::mem::take(v);
                *self = ParamValue::Multi(vec![first, value]);
            }
            ParamValue::Multi(vs) => vs.push(value),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Single(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multi(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Parameters of one signing session, keyed and iterated in byte order of the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, ParamValue>);

impl Parameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `key=value&key=value` query string.
    ///
    /// Keys that repeat are collected into [`ParamValue::Multi`] and `+` decodes
    /// to a space, following `application/x-www-form-urlencoded`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            params.push(k.into_owned(), v.into_owned());
        }
        params
    }

    /// Insert a parameter, replacing any existing value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Append a value under `name`, turning it into a multi-valued parameter
    /// if the name is already present.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(name.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(ParamValue::Single(value));
            }
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
        }
    }

    /// Merge `other` into this set. Each name in `other` replaces the whole
    /// value of the same name here; names only present here are kept.
    pub fn merge(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Get a single-valued parameter by name.
    pub fn get_single(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_single)
    }

    /// Returns true if `name` is present with at least one non-empty value.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_blank())
    }

    /// Returns true if `name` is present, even with an empty value.
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.0.remove(name)
    }

    /// Remove all parameters.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Parameters {
    type Item = (String, ParamValue);
    type IntoIter = btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<&str> for Parameters {
    fn from(query: &str) -> Self {
        Parameters::parse(query)
    }
}

impl From<String> for Parameters {
    fn from(query: String) -> Self {
        Parameters::parse(&query)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> From<BTreeMap<K, V>> for Parameters {
    fn from(map: BTreeMap<K, V>) -> Self {
        Parameters(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<ParamValue>> From<HashMap<K, V>> for Parameters {
    fn from(map: HashMap<K, V>) -> Self {
        Parameters(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Parameters {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}
