//! File System Module
//!
//! Read-only virtual file system materialized from an archive:
//! - PathMap: flat path -> content map, queried by prefix scans
//! - resolver: `cd`-style navigation rules
//! - loader: archive enumeration into a PathMap

pub mod types;
pub mod path_map;
pub mod resolver;
pub mod loader;

pub use types::*;
pub use path_map::{dir_prefix, PathMap};
pub use resolver::{navigate, parent_of, exists_as_subpath, Navigation, NavigationError};
pub use loader::{load_archive, load_zip_file, ArchiveMember, ArchiveSource, LoadedVfs, MemoryArchive, ZipSource};
