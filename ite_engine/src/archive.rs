//! Named member lookup across the places game files can live.
//!
//! The engine never opens loose files directly; it asks a [`SearchSet`] of
//! prioritized [`Archive`]s. Member names are case-insensitive, use `/` to
//! separate sub-directory components, and never start with a separator.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use log::warn;
use walkdir::WalkDir;

use ite_vfs::{glob, FsNode};

use crate::stream::SeekableReadStream;

/// Anything that can serve named members.
pub trait Archive {
    fn has_member(&self, name: &str) -> bool;

    /// Open a member, or None when it is absent. IO failures on a present
    /// member also come back as None; archives log the cause.
    fn open_member(&self, name: &str) -> Option<SeekableReadStream>;

    /// Member names matching a glob pattern (`*`, `?`, `#`), ignoring case.
    fn list_members(&self, pattern: &str) -> Vec<String>;
}

/// Loose files under a directory, indexed up to a fixed depth.
///
/// The index is built once at construction; game data directories do not
/// change while the engine runs.
pub struct DirectoryArchive {
    root: FsNode,
    members: HashMap<String, String>,
}

impl DirectoryArchive {
    pub fn new(root: &FsNode, depth: usize) -> Result<Self> {
        let mut members = HashMap::new();

        for entry in WalkDir::new(root.path()).min_depth(1).max_depth(depth) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry under {}: {err}", root.path());
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root.path())
                .with_context(|| format!("indexing {} under {}", entry.path().display(), root.path()))?;
            let Some(member) = relative.to_str() else {
                warn!("skipping non-UTF-8 member under {}", root.path());
                continue;
            };
            let member = member.replace('\\', "/");
            members.insert(member.to_ascii_lowercase(), member);
        }

        Ok(DirectoryArchive {
            root: root.clone(),
            members,
        })
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn member_path(&self, name: &str) -> Option<String> {
        let member = self.members.get(&name.to_ascii_lowercase())?;
        Some(format!("{}/{}", self.root.path(), member))
    }
}

impl Archive for DirectoryArchive {
    fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(&name.to_ascii_lowercase())
    }

    fn open_member(&self, name: &str) -> Option<SeekableReadStream> {
        let path = self.member_path(name)?;
        match File::open(&path) {
            Ok(file) => Some(Box::new(BufReader::new(file))),
            Err(err) => {
                warn!("opening member '{name}' at {path}: {err}");
                None
            }
        }
    }

    fn list_members(&self, pattern: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .members
            .values()
            .filter(|name| glob::matches(pattern, name, true))
            .cloned()
            .collect();
        names.sort();
        names
    }
}

struct SearchNode {
    name: String,
    priority: i32,
    archive: Box<dyn Archive>,
}

/// Ordered collection of archives, probed highest priority first.
///
/// Ties keep their registration order, so a data patch registered after the
/// base volume at the same priority still shadows it predictably.
#[derive(Default)]
pub struct SearchSet {
    nodes: Vec<SearchNode>,
}

impl SearchSet {
    pub fn new() -> Self {
        SearchSet::default()
    }

    /// Register an archive under a unique name. Re-registering a name
    /// replaces the previous archive.
    pub fn add(&mut self, name: &str, archive: Box<dyn Archive>, priority: i32) {
        if self.remove(name) {
            warn!("search set already contained '{name}', replacing it");
        }
        self.nodes.push(SearchNode {
            name: name.to_string(),
            priority,
            archive,
        });
        // Stable sort keeps insertion order within a priority level.
        self.nodes.sort_by_key(|node| std::cmp::Reverse(node.priority));
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.name != name);
        before != self.nodes.len()
    }

    pub fn has_archive(&self, name: &str) -> bool {
        self.nodes.iter().any(|node| node.name == name)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Archive for SearchSet {
    fn has_member(&self, name: &str) -> bool {
        self.nodes.iter().any(|node| node.archive.has_member(name))
    }

    fn open_member(&self, name: &str) -> Option<SeekableReadStream> {
        for node in &self.nodes {
            if let Some(stream) = node.archive.open_member(name) {
                return Some(stream);
            }
        }
        None
    }

    fn list_members(&self, pattern: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for node in &self.nodes {
            for name in node.archive.list_members(pattern) {
                if seen.insert(name.to_ascii_lowercase()) {
                    names.push(name);
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::tempdir;

    fn dir_archive(path: &std::path::Path, depth: usize) -> DirectoryArchive {
        let node = FsNode::new(path.to_str().unwrap()).unwrap();
        DirectoryArchive::new(&node, depth).unwrap()
    }

    fn read_member(archive: &dyn Archive, name: &str) -> String {
        let mut stream = archive.open_member(name).unwrap();
        let mut text = String::new();
        stream.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn directory_archive_indexes_to_requested_depth() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ITE.RSC"), "top").unwrap();
        fs::create_dir(dir.path().join("voices")).unwrap();
        fs::write(dir.path().join("voices/voices.rsc"), "nested").unwrap();

        let flat = dir_archive(dir.path(), 1);
        assert!(flat.has_member("ite.rsc"));
        assert!(!flat.has_member("voices/voices.rsc"));

        let deep = dir_archive(dir.path(), 2);
        assert!(deep.has_member("VOICES/VOICES.RSC"));
        assert_eq!(read_member(&deep, "voices/voices.rsc"), "nested");
        assert_eq!(deep.member_count(), 2);
    }

    #[test]
    fn directory_archive_lists_with_globs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("scripts.rsc"), "x").unwrap();
        fs::write(dir.path().join("ite.rsc"), "x").unwrap();
        fs::write(dir.path().join("readme.txt"), "x").unwrap();

        let archive = dir_archive(dir.path(), 1);
        assert_eq!(archive.list_members("*.rsc"), vec!["ite.rsc", "scripts.rsc"]);
        assert!(archive.list_members("*.bin").is_empty());
    }

    #[test]
    fn search_set_probes_by_priority() {
        let base = tempdir().unwrap();
        let patch = tempdir().unwrap();
        fs::write(base.path().join("scene.dat"), "base").unwrap();
        fs::write(base.path().join("only-base.dat"), "base").unwrap();
        fs::write(patch.path().join("scene.dat"), "patched").unwrap();

        let mut search = SearchSet::new();
        search.add("base", Box::new(dir_archive(base.path(), 1)), 0);
        search.add("patch", Box::new(dir_archive(patch.path(), 1)), 10);

        assert_eq!(read_member(&search, "SCENE.DAT"), "patched");
        assert_eq!(read_member(&search, "only-base.dat"), "base");

        // Dropping the patch exposes the base copy again.
        assert!(search.remove("patch"));
        assert_eq!(read_member(&search, "scene.dat"), "base");
        assert!(!search.remove("patch"));
    }

    #[test]
    fn search_set_listing_dedupes_shadowed_members() {
        let base = tempdir().unwrap();
        let patch = tempdir().unwrap();
        fs::write(base.path().join("scene.dat"), "base").unwrap();
        fs::write(patch.path().join("SCENE.DAT"), "patched").unwrap();
        fs::write(patch.path().join("extra.dat"), "patched").unwrap();

        let mut search = SearchSet::new();
        search.add("base", Box::new(dir_archive(base.path(), 1)), 0);
        search.add("patch", Box::new(dir_archive(patch.path(), 1)), 10);

        let members = search.list_members("*.dat");
        assert_eq!(members, vec!["SCENE.DAT", "extra.dat"]);
    }

    #[test]
    fn re_adding_a_name_replaces_the_archive() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::write(first.path().join("a.dat"), "1").unwrap();
        fs::write(second.path().join("b.dat"), "2").unwrap();

        let mut search = SearchSet::new();
        search.add("data", Box::new(dir_archive(first.path(), 1)), 0);
        search.add("data", Box::new(dir_archive(second.path(), 1)), 0);

        assert!(!search.has_member("a.dat"));
        assert!(search.has_member("b.dat"));
        assert!(search.has_archive("data"));
    }
}
