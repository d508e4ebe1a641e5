//! Path Resolution
//!
//! Pure navigation rules over a [`PathMap`] and a current path. The current
//! path always ends with `/`.

use thiserror::Error;

use super::path_map::PathMap;

/// Navigation failures. Never fatal to the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No such directory: {0}")]
    NoSuchDirectory(String),
}

/// Outcome of resolving a `cd`-style target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// `..` issued at `/`.
    AtRoot,
    Parent(String),
    Child(String),
}

impl Navigation {
    /// The current path after applying this navigation.
    pub fn target<'a>(&'a self, current: &'a str) -> &'a str {
        match self {
            Navigation::AtRoot => current,
            Navigation::Parent(path) | Navigation::Child(path) => path,
        }
    }
}

/// Drop the last segment of a `/`-terminated path.
pub fn parent_of(current: &str) -> String {
    let trimmed = current.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => format!("{}/", &trimmed[..pos]),
    }
}

/// Whether `candidate` may be entered from `current`.
///
/// Both the bare form (`/<candidate>/`, or `candidate` itself when it already
/// ends with `/`) and the current-relative form (`<current><candidate>/`)
/// must be keys of the map. This is stricter than a POSIX shell: a directory
/// known only through the files below it cannot be entered.
pub fn exists_as_subpath(map: &PathMap, current: &str, candidate: &str) -> bool {
    let bare = if candidate.ends_with('/') {
        candidate.to_string()
    } else {
        format!("/{}/", candidate)
    };
    map.contains_key(&bare) && map.contains_key(&relative_target(current, candidate))
}

/// Resolve a `cd` argument against the current path.
pub fn navigate(map: &PathMap, current: &str, target: &str) -> Result<Navigation, NavigationError> {
    if target == ".." {
        if current == "/" {
            return Ok(Navigation::AtRoot);
        }
        return Ok(Navigation::Parent(parent_of(current)));
    }
    if exists_as_subpath(map, current, target) {
        Ok(Navigation::Child(relative_target(current, target)))
    } else {
        Err(NavigationError::NoSuchDirectory(target.to_string()))
    }
}

fn relative_target(current: &str, candidate: &str) -> String {
    format!("{}{}/", current, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FileContent;

    fn make_map(members: &[&str]) -> PathMap {
        members
            .iter()
            .map(|m| (m.to_string(), FileContent::from("")))
            .collect()
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("/3/"), "/");
        assert_eq!(parent_of("/a/b/"), "/a/");
        assert_eq!(parent_of("/a/b/c/"), "/a/b/");
        assert_eq!(parent_of("/"), "/");
    }

    #[test]
    fn test_parent_strictly_shortens_by_one_segment() {
        for path in ["/a/", "/a/b/", "/x/y/z/"] {
            let parent = parent_of(path);
            let before = path.matches('/').count();
            let after = parent.matches('/').count();
            assert_eq!(after + 1, before, "{} -> {}", path, parent);
            assert!(path.starts_with(&parent));
        }
    }

    #[test]
    fn test_enter_explicit_directory() {
        let map = make_map(&["/3/", "1/1.txt"]);
        assert!(exists_as_subpath(&map, "/", "3"));
        assert_eq!(navigate(&map, "/", "3"), Ok(Navigation::Child("/3/".to_string())));
    }

    #[test]
    fn test_directory_without_own_entry_is_rejected() {
        let map = make_map(&["1/1.txt"]);
        assert!(!exists_as_subpath(&map, "/", "1"));
        assert_eq!(
            navigate(&map, "/", "1"),
            Err(NavigationError::NoSuchDirectory("1".to_string()))
        );
    }

    #[test]
    fn test_nested_requires_bare_and_relative_keys() {
        let map = make_map(&["a/", "a/b/"]);
        assert!(!exists_as_subpath(&map, "/a/", "b"));

        let map = make_map(&["a/", "a/b/", "b/"]);
        assert!(exists_as_subpath(&map, "/a/", "b"));
        assert_eq!(navigate(&map, "/a/", "b"), Ok(Navigation::Child("/a/b/".to_string())));
    }

    #[test]
    fn test_parent_navigation() {
        let map = make_map(&["/3/"]);
        assert_eq!(navigate(&map, "/", ".."), Ok(Navigation::AtRoot));
        assert_eq!(navigate(&map, "/3/", ".."), Ok(Navigation::Parent("/".to_string())));
    }

    #[test]
    fn test_navigation_target() {
        assert_eq!(Navigation::AtRoot.target("/"), "/");
        assert_eq!(Navigation::Child("/3/".to_string()).target("/"), "/3/");
    }

    #[test]
    fn test_error_message() {
        let err = NavigationError::NoSuchDirectory("nope".to_string());
        assert_eq!(err.to_string(), "No such directory: nope");
    }
}
