//! Insertion-ordered string properties.
//!
//! The source format is line oriented:
//!
//! ```text
//! # comment
//! ! also a comment
//! db.user = admin
//! db.url: jdbc:h2:mem
//! ```
//!
//! The first `=` or `:` on a line separates key from value; both are trimmed.
//! A key seen twice keeps its first position and its last value.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Failure to read or parse a properties source.
#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("line {line}: expected `key=value` or `key:value`")]
    MissingSeparator { line: usize },
    #[error("line {line}: empty key")]
    EmptyKey { line: usize },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// String key/value pairs that remember insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a properties source. Line numbers in errors are 1-based.
    pub fn parse(source: &str) -> Result<Self, PropertiesError> {
        let mut props = Self::new();
        for (i, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(sep) = line.find(['=', ':']) else {
                return Err(PropertiesError::MissingSeparator { line: i + 1 });
            };
            let key = line[..sep].trim_end();
            if key.is_empty() {
                return Err(PropertiesError::EmptyKey { line: i + 1 });
            }
            props.insert(key, line[sep + 1..].trim_start());
        }
        Ok(props)
    }

    /// Read and parse a properties file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PropertiesError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| PropertiesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let props = Self::parse(&source)?;
        debug!(path = %path.display(), count = props.len(), "loaded properties");
        Ok(props)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
