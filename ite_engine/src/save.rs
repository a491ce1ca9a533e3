//! Savefile storage.
//!
//! Savefile names are case-insensitive and never contain path separators;
//! the engine treats `Kq1.000` and `kq1.000` as the same save. Saves are
//! gzip-compressed on the way out and transparently sniffed on the way in,
//! so raw files written for compatibility with outside tools keep working.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Read, Write};

use log::warn;
use thiserror::Error;

use ite_vfs::{glob, FsNode, ListMode};

use crate::stream::SeekableReadStream;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save path {0} does not exist")]
    PathDoesNotExist(String),
    #[error("save path {0} is not a directory")]
    PathNotDirectory(String),
    #[error("save path {0} is not writable")]
    PathNotWritable(String),
    #[error("savefile name '{0}' is invalid")]
    InvalidName(String),
    #[error("savefile '{0}' is locked by a pending sync")]
    Locked(String),
    #[error("savefile '{0}' not found")]
    NotFound(String),
    #[error("creating savefile '{name}': {source}")]
    Create {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("reading savefile '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("writing savefile '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("removing savefile '{name}': {source}")]
    Remove {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("compressed stream for savefile '{name}': {source}")]
    Codec {
        name: String,
        #[source]
        source: niffler::Error,
    },
    #[error(transparent)]
    Vfs(#[from] ite_vfs::VfsError),
}

/// Loading side of a savefile: a seekable byte stream.
pub type InSaveFile = SeekableReadStream;

/// Saving side of a savefile.
///
/// Writes go through the usual [`Write`] impl; the first failure is latched
/// so engine code that streams a whole save without checking each call still
/// sees it at [`OutSaveFile::finalize`]. Nothing is durable until `finalize`
/// succeeds.
pub struct OutSaveFile {
    name: String,
    writer: Option<Box<dyn Write>>,
    written: u64,
    error: Option<io::Error>,
}

impl OutSaveFile {
    fn new(name: &str, writer: Box<dyn Write>) -> Self {
        OutSaveFile {
            name: name.to_string(),
            writer: Some(writer),
            written: 0,
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uncompressed bytes accepted so far.
    pub fn pos(&self) -> u64 {
        self.written
    }

    pub fn err(&self) -> bool {
        self.error.is_some()
    }

    pub fn clear_err(&mut self) {
        self.error = None;
    }

    /// Flush everything and close the stream. The savefile only counts as
    /// written when this returns Ok.
    pub fn finalize(mut self) -> Result<(), SaveError> {
        let flush_result = match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        };
        if let Err(source) = flush_result {
            self.error = Some(source);
        }

        // Dropping the writer lets the compressor emit its trailer.
        self.writer = None;

        match self.error.take() {
            Some(source) => Err(SaveError::Write {
                name: self.name.clone(),
                source,
            }),
            None => Ok(()),
        }
    }
}

impl Write for OutSaveFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        };
        match writer.write(buf) {
            Ok(written) => {
                self.written += written as u64;
                Ok(written)
            }
            Err(source) => {
                let kind = source.kind();
                self.error.get_or_insert(source);
                Err(io::Error::from(kind))
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        match writer.flush() {
            Ok(()) => Ok(()),
            Err(source) => {
                let kind = source.kind();
                self.error.get_or_insert(source);
                Err(io::Error::from(kind))
            }
        }
    }
}

impl std::fmt::Debug for OutSaveFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutSaveFile")
            .field("name", &self.name)
            .field("written", &self.written)
            .field("errored", &self.error.is_some())
            .finish()
    }
}

/// Factory for savefile streams, with a sticky last-error slot the engine
/// polls after a failed open.
pub trait SaveFileManager {
    /// Open `name` for writing. Saves are compressed unless the caller needs
    /// a byte-exact file for outside tools.
    fn open_for_saving(&mut self, name: &str, compress: bool) -> Option<OutSaveFile>;

    /// Open `name` for reading, decompressing transparently.
    fn open_for_loading(&mut self, name: &str) -> Option<InSaveFile>;

    /// Open `name` for reading without unpacking.
    fn open_raw_file(&mut self, name: &str) -> Option<InSaveFile>;

    fn remove_savefile(&mut self, name: &str) -> bool;

    /// List savefiles matching a glob pattern (`*`, `?`, `#`), ignoring case.
    fn list_savefiles(&mut self, pattern: &str) -> Vec<String>;

    /// Refresh the savefile list and remember names an external sync holds
    /// locked; those cannot be opened for loading or saving until the next
    /// update drops them.
    fn update_savefiles_list(&mut self, locked: &[String]);

    fn set_error(&mut self, error: SaveError);
    fn last_error(&self) -> Option<&SaveError>;
    fn clear_error(&mut self);

    fn error_desc(&self) -> String {
        self.last_error()
            .map(|err| err.to_string())
            .unwrap_or_default()
    }

    /// Error description, clearing the slot on the way out.
    fn pop_error_desc(&mut self) -> Option<String> {
        let desc = self.last_error().map(|err| err.to_string());
        self.clear_error();
        desc
    }

    /// Copy a savefile byte-for-byte. The raw stream is copied so an
    /// uncompressed export stays uncompressed.
    fn copy_savefile(&mut self, old_name: &str, new_name: &str) -> bool {
        let Some(mut source) = self.open_raw_file(old_name) else {
            return false;
        };
        let Some(mut dest) = self.open_for_saving(new_name, false) else {
            return false;
        };
        if let Err(source_err) = io::copy(&mut source, &mut dest) {
            self.set_error(SaveError::Write {
                name: new_name.to_string(),
                source: source_err,
            });
            return false;
        }
        match dest.finalize() {
            Ok(()) => true,
            Err(err) => {
                self.set_error(err);
                false
            }
        }
    }

    fn rename_savefile(&mut self, old_name: &str, new_name: &str) -> bool {
        if !self.copy_savefile(old_name, new_name) {
            return false;
        }
        self.remove_savefile(old_name)
    }
}

/// Stock manager over a flat save directory.
///
/// A folded-name cache maps case-insensitive savefile names to their on-disk
/// spellings, so saving over `Kq1.000` via `kq1.000` reuses the existing
/// file instead of leaving two behind on case-sensitive filesystems.
#[derive(Debug)]
pub struct DirectorySaveFileManager {
    dir: FsNode,
    cache: HashMap<String, String>,
    locked: HashSet<String>,
    error: Option<SaveError>,
}

impl DirectorySaveFileManager {
    pub fn new(dir: FsNode) -> Result<Self, SaveError> {
        if !dir.exists() {
            return Err(SaveError::PathDoesNotExist(dir.path().to_string()));
        }
        if !dir.is_directory() {
            return Err(SaveError::PathNotDirectory(dir.path().to_string()));
        }
        if !dir.is_writable() {
            return Err(SaveError::PathNotWritable(dir.path().to_string()));
        }

        let mut manager = DirectorySaveFileManager {
            dir,
            cache: HashMap::new(),
            locked: HashSet::new(),
            error: None,
        };
        manager.assure_cached()?;
        Ok(manager)
    }

    pub fn save_dir(&self) -> &FsNode {
        &self.dir
    }

    fn assure_cached(&mut self) -> Result<(), SaveError> {
        self.dir.refresh();
        if !self.dir.is_valid() {
            return Err(SaveError::PathDoesNotExist(self.dir.path().to_string()));
        }
        if !self.dir.is_directory() {
            return Err(SaveError::PathNotDirectory(self.dir.path().to_string()));
        }

        self.cache.clear();
        for node in self.dir.children(ListMode::FilesOnly, true)? {
            self.cache
                .insert(fold(node.display_name()), node.display_name().to_string());
        }
        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<(), SaveError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(SaveError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    fn check_unlocked(&self, name: &str) -> Result<(), SaveError> {
        if self.locked.contains(&fold(name)) {
            return Err(SaveError::Locked(name.to_string()));
        }
        Ok(())
    }

    /// On-disk spelling for `name`, if a savefile with that folded name exists.
    fn cached_spelling(&self, name: &str) -> Option<&String> {
        self.cache.get(&fold(name))
    }

    fn try_open_for_saving(&mut self, name: &str, compress: bool) -> Result<OutSaveFile, SaveError> {
        self.check_name(name)?;
        self.check_unlocked(name)?;
        self.assure_cached()?;

        let actual = self
            .cached_spelling(name)
            .cloned()
            .unwrap_or_else(|| name.to_string());
        let node = self.dir.child(&actual)?;

        let file = File::create(node.as_path()).map_err(|source| SaveError::Create {
            name: name.to_string(),
            source,
        })?;

        let writer: Box<dyn Write> = if compress {
            niffler::get_writer(
                Box::new(file),
                niffler::compression::Format::Gzip,
                niffler::Level::Six,
            )
            .map_err(|source| SaveError::Codec {
                name: name.to_string(),
                source,
            })?
        } else {
            Box::new(BufWriter::new(file))
        };

        self.cache.insert(fold(&actual), actual);
        Ok(OutSaveFile::new(name, writer))
    }

    fn try_open_for_loading(&mut self, name: &str) -> Result<InSaveFile, SaveError> {
        self.check_name(name)?;
        self.check_unlocked(name)?;
        self.assure_cached()?;

        let node = self.existing_node(name)?;
        let file = File::open(node.as_path()).map_err(|source| SaveError::Read {
            name: name.to_string(),
            source,
        })?;

        let buffered = match niffler::get_reader(Box::new(BufReader::new(file))) {
            Ok((mut reader, _format)) => {
                let mut data = Vec::new();
                reader
                    .read_to_end(&mut data)
                    .map_err(|source| SaveError::Read {
                        name: name.to_string(),
                        source,
                    })?;
                data
            }
            // Too short for format sniffing; serve the raw bytes.
            Err(_) => std::fs::read(node.as_path()).map_err(|source| SaveError::Read {
                name: name.to_string(),
                source,
            })?,
        };

        Ok(Box::new(Cursor::new(buffered)))
    }

    fn try_open_raw(&mut self, name: &str) -> Result<InSaveFile, SaveError> {
        self.check_name(name)?;
        self.check_unlocked(name)?;
        self.assure_cached()?;

        let node = self.existing_node(name)?;
        let file = File::open(node.as_path()).map_err(|source| SaveError::Read {
            name: name.to_string(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn existing_node(&self, name: &str) -> Result<FsNode, SaveError> {
        let actual = self
            .cached_spelling(name)
            .ok_or_else(|| SaveError::NotFound(name.to_string()))?;
        Ok(self.dir.child(actual)?)
    }

    fn fail<T>(&mut self, error: SaveError) -> Option<T> {
        warn!("savefile operation failed: {error}");
        self.set_error(error);
        None
    }
}

impl SaveFileManager for DirectorySaveFileManager {
    fn open_for_saving(&mut self, name: &str, compress: bool) -> Option<OutSaveFile> {
        match self.try_open_for_saving(name, compress) {
            Ok(out) => Some(out),
            Err(err) => self.fail(err),
        }
    }

    fn open_for_loading(&mut self, name: &str) -> Option<InSaveFile> {
        match self.try_open_for_loading(name) {
            Ok(stream) => Some(stream),
            Err(err) => self.fail(err),
        }
    }

    fn open_raw_file(&mut self, name: &str) -> Option<InSaveFile> {
        match self.try_open_raw(name) {
            Ok(stream) => Some(stream),
            Err(err) => self.fail(err),
        }
    }

    fn remove_savefile(&mut self, name: &str) -> bool {
        let result = self
            .check_name(name)
            .and_then(|()| self.check_unlocked(name))
            .and_then(|()| self.assure_cached())
            .and_then(|()| {
                let node = self.existing_node(name)?;
                std::fs::remove_file(node.as_path()).map_err(|source| SaveError::Remove {
                    name: name.to_string(),
                    source,
                })?;
                self.cache.remove(&fold(name));
                Ok(())
            });

        match result {
            Ok(()) => true,
            Err(err) => {
                self.fail::<()>(err);
                false
            }
        }
    }

    fn rename_savefile(&mut self, old_name: &str, new_name: &str) -> bool {
        let prepared = self
            .check_name(old_name)
            .and_then(|()| self.check_name(new_name))
            .and_then(|()| self.check_unlocked(old_name))
            .and_then(|()| self.check_unlocked(new_name))
            .and_then(|()| self.assure_cached());
        if let Err(err) = prepared {
            self.fail::<()>(err);
            return false;
        }

        let Some(old_actual) = self.cached_spelling(old_name).cloned() else {
            self.fail::<()>(SaveError::NotFound(old_name.to_string()));
            return false;
        };
        let new_actual = self
            .cached_spelling(new_name)
            .cloned()
            .unwrap_or_else(|| new_name.to_string());

        let from = self.dir.child(&old_actual).map(|n| n.path().to_string());
        let to = self.dir.child(&new_actual).map(|n| n.path().to_string());
        if let (Ok(from), Ok(to)) = (from, to) {
            if std::fs::rename(&from, &to).is_ok() {
                self.cache.remove(&fold(&old_actual));
                self.cache.insert(fold(&new_actual), new_actual);
                return true;
            }
        }

        // Rename can fail across mount points; fall back to copy + remove.
        if !self.copy_savefile(old_name, new_name) {
            return false;
        }
        self.remove_savefile(old_name)
    }

    fn list_savefiles(&mut self, pattern: &str) -> Vec<String> {
        if let Err(err) = self.assure_cached() {
            self.fail::<()>(err);
            return Vec::new();
        }

        let mut names: Vec<String> = self
            .cache
            .values()
            .filter(|name| glob::matches(pattern, name, true))
            .cloned()
            .collect();
        names.sort();
        names
    }

    fn update_savefiles_list(&mut self, locked: &[String]) {
        if let Err(err) = self.assure_cached() {
            self.fail::<()>(err);
        }
        self.locked = locked.iter().map(|name| fold(name)).collect();
    }

    fn set_error(&mut self, error: SaveError) {
        self.error = Some(error);
    }

    fn last_error(&self) -> Option<&SaveError> {
        self.error.as_ref()
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom};
    use tempfile::tempdir;

    fn manager_in(dir: &std::path::Path) -> DirectorySaveFileManager {
        let node = FsNode::new(dir.to_str().unwrap()).unwrap();
        DirectorySaveFileManager::new(node).unwrap()
    }

    fn write_save(manager: &mut DirectorySaveFileManager, name: &str, data: &[u8], compress: bool) {
        let mut out = manager.open_for_saving(name, compress).unwrap();
        out.write_all(data).unwrap();
        assert!(!out.err());
        out.finalize().unwrap();
    }

    fn read_all(stream: &mut InSaveFile) -> Vec<u8> {
        let mut data = Vec::new();
        stream.read_to_end(&mut data).unwrap();
        data
    }

    #[test]
    fn missing_save_dir_is_rejected() {
        let dir = tempdir().unwrap();
        let node = FsNode::new(dir.path().join("absent").to_str().unwrap()).unwrap();
        assert!(matches!(
            DirectorySaveFileManager::new(node),
            Err(SaveError::PathDoesNotExist(_))
        ));
    }

    #[test]
    fn compressed_roundtrip() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());

        let payload = b"chapter 3, scene 51, rif at the gate".repeat(20);
        write_save(&mut manager, "ite.001", &payload, true);

        // On disk the save is gzip, not plaintext.
        let raw = std::fs::read(dir.path().join("ite.001")).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);
        assert!(raw.len() < payload.len());

        let mut stream = manager.open_for_loading("ite.001").unwrap();
        assert_eq!(read_all(&mut stream), payload);
    }

    #[test]
    fn loading_seeks_over_decompressed_data() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "ite.002", b"0123456789", true);

        let mut stream = manager.open_for_loading("ite.002").unwrap();
        stream.seek(SeekFrom::Start(4)).unwrap();
        let mut tail = Vec::new();
        stream.read_to_end(&mut tail).unwrap();
        assert_eq!(tail, b"456789");
    }

    #[test]
    fn uncompressed_save_loads_raw_and_sniffed() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "export.chr", b"quest for glory hero", false);

        let raw = std::fs::read(dir.path().join("export.chr")).unwrap();
        assert_eq!(raw, b"quest for glory hero");

        let mut sniffed = manager.open_for_loading("export.chr").unwrap();
        assert_eq!(read_all(&mut sniffed), b"quest for glory hero");

        let mut plain = manager.open_raw_file("export.chr").unwrap();
        assert_eq!(read_all(&mut plain), b"quest for glory hero");
    }

    #[test]
    fn raw_open_returns_compressed_bytes() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "ite.003", b"payload", true);

        let mut raw = manager.open_raw_file("ite.003").unwrap();
        let bytes = read_all(&mut raw);
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn names_are_case_insensitive() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "Kq1.000", b"first", true);
        write_save(&mut manager, "kq1.000", b"second", true);

        // The second save reused the existing spelling.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["Kq1.000"]);

        let mut stream = manager.open_for_loading("KQ1.000").unwrap();
        assert_eq!(read_all(&mut stream), b"second");
    }

    #[test]
    fn listing_matches_globs_case_insensitively() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "ITE.001", b"a", true);
        write_save(&mut manager, "ite.002", b"b", true);
        write_save(&mut manager, "ite.bak", b"c", true);
        write_save(&mut manager, "other.001", b"d", true);

        assert_eq!(manager.list_savefiles("ite.###"), vec!["ITE.001", "ite.002"]);
        assert_eq!(manager.list_savefiles("*.bak"), vec!["ite.bak"]);
        assert_eq!(manager.list_savefiles("*").len(), 4);
    }

    #[test]
    fn locked_names_refuse_load_and_save() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "slot01.sav", b"x", true);

        manager.update_savefiles_list(&["slot01.sav".to_string()]);

        assert!(manager.open_for_saving("SLOT01.SAV", true).is_none());
        assert!(matches!(manager.last_error(), Some(SaveError::Locked(_))));
        manager.clear_error();

        assert!(manager.open_for_loading("slot01.sav").is_none());
        assert!(matches!(manager.last_error(), Some(SaveError::Locked(_))));

        // Dropping the lock makes the save usable again.
        manager.update_savefiles_list(&[]);
        manager.clear_error();
        assert!(manager.open_for_loading("slot01.sav").is_some());
    }

    #[test]
    fn invalid_names_are_refused() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        assert!(manager.open_for_saving("saves/ite.001", true).is_none());
        assert!(matches!(
            manager.last_error(),
            Some(SaveError::InvalidName(_))
        ));
        manager.clear_error();
        assert!(manager.open_for_saving("", true).is_none());
        assert!(matches!(
            manager.last_error(),
            Some(SaveError::InvalidName(_))
        ));
    }

    #[test]
    fn remove_reports_missing_files() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "ite.001", b"x", true);

        assert!(manager.remove_savefile("ITE.001"));
        assert!(!dir.path().join("ite.001").exists());

        assert!(!manager.remove_savefile("ite.001"));
        assert!(matches!(manager.last_error(), Some(SaveError::NotFound(_))));

        let desc = manager.pop_error_desc().unwrap();
        assert!(desc.contains("ite.001"));
        assert!(manager.last_error().is_none());
    }

    #[test]
    fn copy_preserves_raw_bytes_and_source() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "ite.001", b"original", true);

        assert!(manager.copy_savefile("ite.001", "ite.bak"));
        assert_eq!(
            std::fs::read(dir.path().join("ite.001")).unwrap(),
            std::fs::read(dir.path().join("ite.bak")).unwrap()
        );

        let mut stream = manager.open_for_loading("ite.bak").unwrap();
        assert_eq!(read_all(&mut stream), b"original");
    }

    #[test]
    fn rename_moves_the_savefile() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "ite.001", b"moved", true);

        assert!(manager.rename_savefile("ITE.001", "ite.007"));
        assert!(!dir.path().join("ite.001").exists());

        let mut stream = manager.open_for_loading("ite.007").unwrap();
        assert_eq!(read_all(&mut stream), b"moved");

        assert!(!manager.rename_savefile("ghost.000", "ite.008"));
        assert!(matches!(manager.last_error(), Some(SaveError::NotFound(_))));
    }

    #[test]
    fn tiny_raw_save_survives_sniffing() {
        let dir = tempdir().unwrap();
        let mut manager = manager_in(dir.path());
        write_save(&mut manager, "flag", b"1", false);

        let mut stream = manager.open_for_loading("flag").unwrap();
        assert_eq!(read_all(&mut stream), b"1");
    }
}
