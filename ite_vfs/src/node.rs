use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::path::{last_component, normalize, SEPARATOR};

#[derive(Debug, Error)]
pub enum VfsError {
    #[error("node path is empty")]
    EmptyPath,
    #[error("{0} is not a directory")]
    NotADirectory(String),
    #[error("child name '{0}' contains a path separator")]
    SeparatorInChildName(String),
    #[error("creating directory {path}: {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("reading directory {path}: {source}")]
    ReadDirectory {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("opening {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Which directory entries [`FsNode::children`] should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    FilesOnly,
    DirectoriesOnly,
    All,
}

/// Handle to a filesystem location.
///
/// The path is normalized at construction and the valid/directory flags are
/// cached from a single stat, the way the engine probes candidate paths that
/// may not exist yet. [`FsNode::refresh`] re-stats after mutations.
#[derive(Debug, Clone)]
pub struct FsNode {
    path: String,
    display_name: String,
    is_valid: bool,
    is_directory: bool,
}

impl FsNode {
    pub fn new(path: &str) -> Result<Self, VfsError> {
        if path.is_empty() {
            return Err(VfsError::EmptyPath);
        }

        let path = normalize(path);
        let display_name = if path == "/" {
            String::from("/")
        } else {
            last_component(&path).to_string()
        };

        let mut node = FsNode {
            path,
            display_name,
            is_valid: false,
            is_directory: false,
        };
        node.refresh();
        Ok(node)
    }

    /// Re-stat the path and update the cached flags.
    pub fn refresh(&mut self) {
        match fs::metadata(&self.path) {
            Ok(meta) => {
                self.is_valid = true;
                self.is_directory = meta.is_dir();
            }
            Err(_) => {
                self.is_valid = false;
                self.is_directory = false;
            }
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    pub fn exists(&self) -> bool {
        fs::symlink_metadata(&self.path).is_ok()
    }

    pub fn is_readable(&self) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::metadata(&self.path)
                .map(|meta| meta.permissions().mode() & 0o444 != 0)
                .unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            fs::metadata(&self.path).is_ok()
        }
    }

    pub fn is_writable(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false)
    }

    /// Node for the entry `name` inside this directory. `name` must be a
    /// bare component, the save and archive layers never pass paths through.
    pub fn child(&self, name: &str) -> Result<FsNode, VfsError> {
        if name.contains(SEPARATOR) || name.contains('\\') {
            return Err(VfsError::SeparatorInChildName(name.to_string()));
        }
        if !self.is_directory {
            return Err(VfsError::NotADirectory(self.path.clone()));
        }

        // The path is already normalized, so a plain join stays normalized.
        let mut joined = self.path.clone();
        if !joined.ends_with(SEPARATOR) {
            joined.push(SEPARATOR);
        }
        joined.push_str(name);
        FsNode::new(&joined)
    }

    /// List the directory, honoring `mode` and the hidden-file filter.
    ///
    /// `.` and `..` are never reported. Entries that cannot be classified
    /// (e.g. dangling symlinks) are skipped. Symlinks are classified by
    /// their target. The listing is name-sorted.
    pub fn children(&self, mode: ListMode, include_hidden: bool) -> Result<Vec<FsNode>, VfsError> {
        if !self.is_directory {
            return Err(VfsError::NotADirectory(self.path.clone()));
        }

        let dir = fs::read_dir(&self.path).map_err(|source| VfsError::ReadDirectory {
            path: self.path.clone(),
            source,
        })?;

        let mut nodes = Vec::new();
        for entry in dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry in {}: {err}", self.path);
                    continue;
                }
            };

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(
                        "skipping non-UTF-8 entry {:?} in {}",
                        raw.to_string_lossy(),
                        self.path
                    );
                    continue;
                }
            };

            if name.starts_with('.') && !include_hidden {
                continue;
            }

            let mut child_path = self.path.clone();
            if !child_path.ends_with(SEPARATOR) {
                child_path.push(SEPARATOR);
            }
            child_path.push_str(&name);

            let is_directory = match entry.file_type() {
                Ok(kind) if kind.is_symlink() => match fs::metadata(&child_path) {
                    Ok(meta) => meta.is_dir(),
                    // Dangling link, nothing to open behind it.
                    Err(_) => continue,
                },
                Ok(kind) => kind.is_dir(),
                Err(_) => continue,
            };

            match mode {
                ListMode::FilesOnly if is_directory => continue,
                ListMode::DirectoriesOnly if !is_directory => continue,
                _ => {}
            }

            nodes.push(FsNode {
                path: child_path,
                display_name: name,
                is_valid: true,
                is_directory,
            });
        }

        nodes.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(nodes)
    }

    /// Parent directory. The root has none, and neither does a relative
    /// single-component path.
    pub fn parent(&self) -> Option<FsNode> {
        if self.path == "/" {
            return None;
        }

        let cut = self.path.rfind(SEPARATOR)?;
        let parent = if cut == 0 { "/" } else { &self.path[..cut] };
        FsNode::new(parent).ok()
    }

    /// Create this node as a directory. Succeeds if it already exists as one.
    pub fn create_directory(&mut self) -> Result<(), VfsError> {
        if let Err(source) = fs::create_dir(&self.path) {
            if source.kind() != io::ErrorKind::AlreadyExists {
                return Err(VfsError::CreateDirectory {
                    path: self.path.clone(),
                    source,
                });
            }
        }

        self.refresh();
        if self.is_valid && self.is_directory {
            Ok(())
        } else {
            Err(VfsError::NotADirectory(self.path.clone()))
        }
    }

    pub fn read_stream(&self) -> Result<BufReader<File>, VfsError> {
        let file = File::open(&self.path).map_err(|source| VfsError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(BufReader::new(file))
    }

    pub fn write_stream(&self) -> Result<BufWriter<File>, VfsError> {
        let file = File::create(&self.path).map_err(|source| VfsError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(BufWriter::new(file))
    }
}

/// Make sure `dir` exists as a directory, creating missing components.
///
/// When `prefix` is given it must already exist as a directory; only the
/// components of `dir` below it are created. An existing non-directory
/// anywhere along the way fails.
pub fn ensure_directory(dir: &str, prefix: Option<&str>) -> Result<(), VfsError> {
    if let Some(prefix) = prefix {
        match fs::metadata(prefix) {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(VfsError::NotADirectory(prefix.to_string())),
        }
    }

    let full = match prefix {
        Some(prefix) => normalize(&format!("{prefix}/{dir}")),
        None => normalize(dir),
    };

    fs::create_dir_all(&full).map_err(|source| VfsError::CreateDirectory {
        path: full.clone(),
        source,
    })?;

    match fs::metadata(&full) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(VfsError::NotADirectory(full)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::tempdir;

    fn node_for(path: &Path) -> FsNode {
        FsNode::new(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(FsNode::new(""), Err(VfsError::EmptyPath)));
    }

    #[test]
    fn missing_path_yields_invalid_node() {
        let dir = tempdir().unwrap();
        let node = node_for(&dir.path().join("absent"));
        assert!(!node.is_valid());
        assert!(!node.exists());
        assert_eq!(node.display_name(), "absent");
    }

    #[test]
    fn directory_flags_and_display_name() {
        let dir = tempdir().unwrap();
        let node = node_for(dir.path());
        assert!(node.is_valid());
        assert!(node.is_directory());
        assert!(node.exists());
        assert!(node.is_readable());
        assert!(node.is_writable());
    }

    #[test]
    fn children_filter_hidden_and_mode() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.rsc"), b"x").unwrap();
        fs::write(dir.path().join(".hidden"), b"x").unwrap();

        let node = node_for(dir.path());

        let all = node.children(ListMode::All, false).unwrap();
        let names: Vec<_> = all.iter().map(|n| n.display_name()).collect();
        assert_eq!(names, vec!["a.rsc", "sub"]);

        let files = node.children(ListMode::FilesOnly, true).unwrap();
        let names: Vec<_> = files.iter().map(|n| n.display_name()).collect();
        assert_eq!(names, vec![".hidden", "a.rsc"]);

        let dirs = node.children(ListMode::DirectoriesOnly, false).unwrap();
        assert_eq!(dirs.len(), 1);
        assert!(dirs[0].is_directory());
    }

    #[test]
    fn children_of_a_file_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, b"x").unwrap();
        let node = node_for(&file);
        assert!(matches!(
            node.children(ListMode::All, false),
            Err(VfsError::NotADirectory(_))
        ));
    }

    #[test]
    fn child_rejects_separators() {
        let dir = tempdir().unwrap();
        let node = node_for(dir.path());
        assert!(matches!(
            node.child("a/b"),
            Err(VfsError::SeparatorInChildName(_))
        ));
        assert!(matches!(
            node.child("a\\b"),
            Err(VfsError::SeparatorInChildName(_))
        ));
        let child = node.child("fresh").unwrap();
        assert!(!child.is_valid());
    }

    #[test]
    fn parent_walks_up_and_stops_at_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let node = node_for(&dir.path().join("sub"));

        let parent = node.parent().unwrap();
        assert_eq!(parent.path(), dir.path().to_str().unwrap());

        let root = FsNode::new("/").unwrap();
        assert!(root.parent().is_none());

        let relative = FsNode::new("loose").unwrap();
        assert!(relative.parent().is_none());
    }

    #[test]
    fn create_directory_then_streams_roundtrip() {
        let dir = tempdir().unwrap();
        let node = node_for(dir.path());
        let mut fresh = node.child("made").unwrap();
        fresh.create_directory().unwrap();
        assert!(fresh.is_directory());
        // Idempotent on an existing directory.
        fresh.create_directory().unwrap();

        let file = fresh.child("out.bin").unwrap();
        {
            let mut w = file.write_stream().unwrap();
            w.write_all(b"payload").unwrap();
        }
        let mut buf = Vec::new();
        file.read_stream().unwrap().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"payload");
    }

    #[test]
    fn create_directory_over_a_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("occupied");
        fs::write(&path, b"x").unwrap();
        let mut node = node_for(&path);
        assert!(node.create_directory().is_err());
    }

    #[test]
    fn ensure_directory_builds_missing_components() {
        let dir = tempdir().unwrap();
        let prefix = dir.path().to_str().unwrap();
        ensure_directory("saves/ite", Some(prefix)).unwrap();
        assert!(dir.path().join("saves/ite").is_dir());

        // Prefix must already exist.
        let missing = dir.path().join("nope");
        assert!(ensure_directory("saves", Some(missing.to_str().unwrap())).is_err());
    }

    #[test]
    fn ensure_directory_refuses_file_component() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("block"), b"x").unwrap();
        let prefix = dir.path().to_str().unwrap();
        assert!(ensure_directory("block/deeper", Some(prefix)).is_err());
    }
}
