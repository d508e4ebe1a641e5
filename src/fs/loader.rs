//! Archive Loader
//!
//! Turns an archive's member enumeration into a [`PathMap`].

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;

use super::path_map::PathMap;
use super::types::{DecodeWarning, FileContent, VfsError};

/// One archive member: its stored name and raw bytes.
#[derive(Debug, Clone)]
pub struct ArchiveMember {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Anything that can enumerate (member name, bytes) pairs.
pub trait ArchiveSource {
    fn members(&mut self) -> Result<Vec<ArchiveMember>, VfsError>;
}

/// Zip archive reader.
pub struct ZipSource<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl ZipSource<File> {
    /// Open a zip archive on disk.
    pub fn open(path: &Path) -> Result<Self, VfsError> {
        let file = File::open(path).map_err(|e| VfsError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::new(file, &path.display().to_string())
    }
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn new(reader: R, label: &str) -> Result<Self, VfsError> {
        let archive = ZipArchive::new(reader).map_err(|e| VfsError::Open {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { archive })
    }
}

impl<R: Read + Seek> ArchiveSource for ZipSource<R> {
    fn members(&mut self) -> Result<Vec<ArchiveMember>, VfsError> {
        let mut members = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            let mut file = self.archive.by_index(i).map_err(|e| VfsError::Enumerate {
                message: e.to_string(),
            })?;
            let name = file.name().to_string();
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).map_err(|e| VfsError::Enumerate {
                message: format!("{}: {}", name, e),
            })?;
            members.push(ArchiveMember { name, bytes });
        }
        Ok(members)
    }
}

/// Member list already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    members: Vec<ArchiveMember>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.members.push(ArchiveMember {
            name: name.to_string(),
            bytes: bytes.into(),
        });
        self
    }
}

impl ArchiveSource for MemoryArchive {
    fn members(&mut self) -> Result<Vec<ArchiveMember>, VfsError> {
        Ok(self.members.clone())
    }
}

/// A loaded VFS plus the members that had to be stored as binary.
#[derive(Debug, Clone, Default)]
pub struct LoadedVfs {
    pub map: PathMap,
    pub warnings: Vec<DecodeWarning>,
}

/// Build a [`PathMap`] from any archive source.
///
/// Decoding never fails: members that are not UTF-8 are kept as binary and
/// reported through [`LoadedVfs::warnings`].
pub fn load_archive(source: &mut dyn ArchiveSource) -> Result<LoadedVfs, VfsError> {
    let mut loaded = LoadedVfs::default();
    for member in source.members()? {
        let content = match FileContent::decode(member.bytes) {
            Ok(text) => text,
            Err(bytes) => {
                warn!(member = %member.name, "member is not valid UTF-8, storing as binary");
                loaded.warnings.push(DecodeWarning { member: member.name.clone() });
                FileContent::Binary(bytes)
            }
        };
        debug!(member = %member.name, size = content.len(), "loaded member");
        loaded.map.insert(&member.name, content);
    }
    Ok(loaded)
}

/// Open and load a zip archive from disk.
pub fn load_zip_file(path: &Path) -> Result<LoadedVfs, VfsError> {
    let mut source = ZipSource::open(path)?;
    load_archive(&mut source)
}
