//! Path Map
//!
//! The flat, read-only view of the archive: absolute path -> content.
//! There is no node tree; directory structure is recovered by prefix scans
//! over the sorted keys.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use super::types::FileContent;

/// Sorted mapping from normalized absolute path to member content.
#[derive(Debug, Clone, Default)]
pub struct PathMap {
    entries: BTreeMap<String, FileContent>,
}

impl PathMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member under its absolute form. Last write wins.
    pub fn insert(&mut self, member: &str, content: FileContent) {
        self.entries.insert(absolute(member), content);
    }

    pub fn get(&self, path: &str) -> Option<&FileContent> {
        self.entries.get(path)
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in lexicographic order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Every entry whose key starts with `prefix`, in key order.
    pub fn under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a FileContent)> + 'a {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Immediate child names of a directory prefix, deduplicated and sorted.
    pub fn children_of(&self, prefix: &str) -> BTreeSet<String> {
        let prefix = dir_prefix(prefix);
        self.under(&prefix)
            .filter_map(|(key, _)| key[prefix.len()..].split('/').next())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// A path is a directory when some key lives at or below its `/`-terminated form.
    pub fn is_directory(&self, path: &str) -> bool {
        let prefix = dir_prefix(path);
        if prefix == "/" {
            return true;
        }
        let found = self.under(&prefix).next().is_some();
        found
    }
}

impl FromIterator<(String, FileContent)> for PathMap {
    fn from_iter<I: IntoIterator<Item = (String, FileContent)>>(iter: I) -> Self {
        let mut map = PathMap::new();
        for (member, content) in iter {
            map.insert(&member, content);
        }
        map
    }
}

/// Ensure a path carries a trailing `/` so it can be used as a directory prefix.
///
/// `.` and `..` segments are left untouched.
pub fn dir_prefix(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

fn absolute(member: &str) -> String {
    if member.starts_with('/') {
        member.to_string()
    } else {
        format!("/{}", member)
    }
}
