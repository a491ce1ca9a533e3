//! Read and write facades over the archive and node layers.

use std::io::{self, Read, Seek, SeekFrom, Write};

use anyhow::{bail, Context, Result};
use log::debug;

use ite_vfs::FsNode;

use crate::archive::Archive;
use crate::stream::SeekableReadStream;

/// A game data file opened for reading.
///
/// Opening goes through an [`Archive`] so engine code never cares whether a
/// member is a loose file or lives in a volume. Some shipped data sets carry
/// members with a stray trailing dot (`GAMEPC.` for `GAMEPC`), so the exact
/// name is tried first and the dotted spelling second.
pub struct GameFile {
    name: String,
    handle: SeekableReadStream,
}

impl GameFile {
    pub fn open(name: &str, archive: &dyn Archive) -> Result<GameFile> {
        if name.is_empty() {
            bail!("refusing to open a file with an empty name");
        }

        if let Some(handle) = archive.open_member(name) {
            debug!("opened member: {name}");
            return Ok(GameFile {
                name: name.to_string(),
                handle,
            });
        }

        let dotted = format!("{name}.");
        if let Some(handle) = archive.open_member(&dotted) {
            debug!("opened member via trailing-dot spelling: {dotted}");
            return Ok(GameFile {
                name: name.to_string(),
                handle,
            });
        }

        bail!("file '{name}' not present in the search path");
    }

    pub fn open_node(node: &FsNode) -> Result<GameFile> {
        if !node.exists() {
            bail!("'{}' does not exist", node.path());
        }
        if node.is_directory() {
            bail!("'{}' is a directory", node.path());
        }

        let handle = node
            .read_stream()
            .with_context(|| format!("opening '{}'", node.path()))?;
        Ok(GameFile {
            name: node.display_name().to_string(),
            handle: Box::new(handle),
        })
    }

    /// Adopt an already-open stream, e.g. a decompressed savefile.
    pub fn from_stream(name: &str, stream: SeekableReadStream) -> GameFile {
        GameFile {
            name: name.to_string(),
            handle: stream,
        }
    }

    /// Whether `name` can be opened, including the trailing-dot workaround.
    pub fn exists(name: &str, archive: &dyn Archive) -> bool {
        archive.has_member(name) || archive.has_member(&format!("{name}."))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pos(&mut self) -> io::Result<u64> {
        self.handle.stream_position()
    }

    /// Total stream length; the read position is preserved.
    pub fn size(&mut self) -> io::Result<u64> {
        let current = self.handle.stream_position()?;
        let end = self.handle.seek(SeekFrom::End(0))?;
        self.handle.seek(SeekFrom::Start(current))?;
        Ok(end)
    }
}

impl Read for GameFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.handle.read(buf)
    }
}

impl Seek for GameFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.handle.seek(pos)
    }
}

/// A diagnostic or export file opened for writing.
pub struct DumpFile {
    name: String,
    writer: std::io::BufWriter<std::fs::File>,
}

impl DumpFile {
    /// Create `path` for writing. With `create_parents`, missing directories
    /// along the way are created first.
    pub fn create(path: &str, create_parents: bool) -> Result<DumpFile> {
        if path.is_empty() {
            bail!("refusing to create a dump file with an empty path");
        }

        if create_parents {
            if let Some((parent, _)) = path.rsplit_once('/') {
                if !parent.is_empty() {
                    ite_vfs::ensure_directory(parent, None)
                        .with_context(|| format!("creating parent directories for '{path}'"))?;
                }
            }
        }

        let node = FsNode::new(path)?;
        if node.is_directory() {
            bail!("'{}' is a directory", node.path());
        }

        let writer = node
            .write_stream()
            .with_context(|| format!("creating '{}'", node.path()))?;
        Ok(DumpFile {
            name: node.display_name().to_string(),
            writer,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("flushing '{}'", self.name))
    }
}

impl Write for DumpFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::{DirectoryArchive, SearchSet};
    use std::fs;
    use tempfile::tempdir;

    fn search_over(path: &std::path::Path) -> SearchSet {
        let node = FsNode::new(path.to_str().unwrap()).unwrap();
        let mut search = SearchSet::new();
        search.add("data", Box::new(DirectoryArchive::new(&node, 1).unwrap()), 0);
        search
    }

    #[test]
    fn opens_members_through_the_search_set() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("scene.dat"), b"scene bytes").unwrap();
        let search = search_over(dir.path());

        let mut file = GameFile::open("SCENE.DAT", &search).unwrap();
        assert_eq!(file.name(), "SCENE.DAT");
        assert_eq!(file.size().unwrap(), 11);

        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        assert_eq!(text, "scene bytes");
        assert_eq!(file.pos().unwrap(), 11);
    }

    #[test]
    fn trailing_dot_spelling_is_tried() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("GAMEPC."), b"detect me").unwrap();
        let search = search_over(dir.path());

        assert!(GameFile::exists("GAMEPC", &search));
        let mut file = GameFile::open("GAMEPC", &search).unwrap();
        // The caller's name is kept, not the dotted on-disk spelling.
        assert_eq!(file.name(), "GAMEPC");
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        assert_eq!(text, "detect me");
    }

    #[test]
    fn missing_member_is_an_error() {
        let dir = tempdir().unwrap();
        let search = search_over(dir.path());
        assert!(GameFile::open("absent.dat", &search).is_err());
        assert!(!GameFile::exists("absent.dat", &search));
    }

    #[test]
    fn node_open_rejects_directories_and_missing_paths() {
        let dir = tempdir().unwrap();
        let node = FsNode::new(dir.path().to_str().unwrap()).unwrap();
        assert!(GameFile::open_node(&node).is_err());

        let missing = node.child("ghost.dat").unwrap();
        assert!(GameFile::open_node(&missing).is_err());

        fs::write(dir.path().join("real.dat"), b"ok").unwrap();
        let real = node.child("real.dat").unwrap();
        let mut file = GameFile::open_node(&real).unwrap();
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn dump_file_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = format!("{}/dumps/walk/scene.json", dir.path().to_str().unwrap());

        let mut dump = DumpFile::create(&path, true).unwrap();
        dump.write_all(b"{}").unwrap();
        dump.finish().unwrap();

        assert_eq!(fs::read(dir.path().join("dumps/walk/scene.json")).unwrap(), b"{}");
    }

    #[test]
    fn dump_file_without_create_parents_fails_on_missing_dir() {
        let dir = tempdir().unwrap();
        let path = format!("{}/nope/out.bin", dir.path().to_str().unwrap());
        assert!(DumpFile::create(&path, false).is_err());
    }
}
