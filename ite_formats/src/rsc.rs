use std::fs::File;
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, ensure, Context, Result};
use byteorder::{ByteOrder, LittleEndian};
use memmap2::{Mmap, MmapOptions};

// An RSC volume stores raw resource payloads first and describes them with a
// table at the tail: count x (offset, size) pairs, then an 8-byte descriptor
// holding the table offset and entry count. All fields are little-endian.
const TABLE_DESC_SIZE: usize = 8;
const TABLE_ENTRY_SIZE: usize = 8;

/// One resource slot in the tail table. Resources are addressed by index;
/// the data tables hand out these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RscEntry {
    pub id: u32,
    pub offset: u64,
    pub size: u32,
}

impl RscEntry {
    pub fn data_range(&self) -> Range<usize> {
        let start = self.offset as usize;
        let end = start + self.size as usize;
        start..end
    }
}

#[derive(Debug)]
pub struct RscArchive {
    path: PathBuf,
    mmap: Mmap,
    entries: Vec<RscEntry>,
}

impl RscArchive {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(&path_buf)
            .with_context(|| format!("opening RSC archive at {}", path_buf.display()))?;
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .with_context(|| format!("memory-mapping RSC archive {}", path_buf.display()))?;

        let entries = parse_table(&mmap)
            .with_context(|| format!("parsing RSC archive {}", path_buf.display()))?;

        Ok(RscArchive {
            path: path_buf,
            mmap,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[RscEntry] {
        &self.entries
    }

    pub fn resource_count(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn entry(&self, id: u32) -> Option<&RscEntry> {
        self.entries.get(id as usize)
    }

    pub fn resource_bytes(&self, entry: &RscEntry) -> &[u8] {
        let range = entry.data_range();
        &self.mmap[range]
    }

    pub fn extract_entry<P: AsRef<Path>>(&self, entry: &RscEntry, dest: P) -> Result<()> {
        let bytes = self.resource_bytes(entry);
        let mut file = File::create(dest.as_ref())
            .with_context(|| format!("creating {}", dest.as_ref().display()))?;
        file.write_all(bytes)
            .with_context(|| format!("writing {}", dest.as_ref().display()))?;
        Ok(())
    }
}

fn parse_table(mmap: &Mmap) -> Result<Vec<RscEntry>> {
    ensure!(
        mmap.len() >= TABLE_DESC_SIZE,
        "RSC archive is too small to contain a table descriptor"
    );

    let desc = &mmap[mmap.len() - TABLE_DESC_SIZE..];
    let table_offset = LittleEndian::read_u32(&desc[0..4]) as usize;
    let count = LittleEndian::read_u32(&desc[4..8]) as usize;

    let table_len = count
        .checked_mul(TABLE_ENTRY_SIZE)
        .ok_or_else(|| anyhow!("RSC table entry count overflow"))?;

    // The table must butt up exactly against the descriptor.
    let expected_end = table_offset
        .checked_add(table_len)
        .ok_or_else(|| anyhow!("RSC table extent overflow"))?;
    if expected_end != mmap.len() - TABLE_DESC_SIZE {
        bail!(
            "RSC table descriptor mismatch (offset {table_offset}, count {count}, file length {})",
            mmap.len()
        );
    }

    let table = &mmap[table_offset..expected_end];
    let mut entries = Vec::with_capacity(count);

    for index in 0..count {
        let base = index * TABLE_ENTRY_SIZE;
        let entry_bytes = &table[base..base + TABLE_ENTRY_SIZE];
        let offset = LittleEndian::read_u32(&entry_bytes[0..4]) as usize;
        let size = LittleEndian::read_u32(&entry_bytes[4..8]);

        let end = offset
            .checked_add(size as usize)
            .ok_or_else(|| anyhow!("RSC resource {index} size overflow"))?;
        ensure!(
            end <= table_offset,
            "RSC resource {index} extends into the resource table"
        );

        entries.push(RscEntry {
            id: index as u32,
            offset: offset as u64,
            size,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn build_archive(resources: &[&[u8]]) -> Vec<u8> {
        let mut data = Vec::new();
        let mut table = Vec::new();
        for payload in resources {
            table.push((data.len() as u32, payload.len() as u32));
            data.extend_from_slice(payload);
        }
        let table_offset = data.len() as u32;
        for (offset, size) in &table {
            data.extend_from_slice(&offset.to_le_bytes());
            data.extend_from_slice(&size.to_le_bytes());
        }
        data.extend_from_slice(&table_offset.to_le_bytes());
        data.extend_from_slice(&(table.len() as u32).to_le_bytes());
        data
    }

    #[test]
    fn parses_resources_by_index() {
        let mut file = NamedTempFile::new().unwrap();
        let data = build_archive(&[b"first", b"second!"]);
        file.write_all(&data).unwrap();

        let archive = RscArchive::open(file.path()).unwrap();
        assert_eq!(archive.resource_count(), 2);

        let first = archive.entry(0).unwrap();
        assert_eq!(first.size, 5);
        assert_eq!(archive.resource_bytes(first), b"first");

        let second = archive.entry(1).unwrap();
        assert_eq!(archive.resource_bytes(second), b"second!");

        assert!(archive.entry(2).is_none());
    }

    #[test]
    fn accepts_empty_archive() {
        let mut file = NamedTempFile::new().unwrap();
        let data = build_archive(&[]);
        file.write_all(&data).unwrap();

        let archive = RscArchive::open(file.path()).unwrap();
        assert_eq!(archive.resource_count(), 0);
    }

    #[test]
    fn rejects_descriptor_mismatch() {
        let mut file = NamedTempFile::new().unwrap();
        let mut data = build_archive(&[b"abc"]);
        // Corrupt the table offset in the tail descriptor.
        let len = data.len();
        data[len - 8] ^= 0xff;
        file.write_all(&data).unwrap();

        let err = RscArchive::open(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("descriptor mismatch"));
    }

    #[test]
    fn rejects_resource_overlapping_table() {
        let mut file = NamedTempFile::new().unwrap();
        let mut data = build_archive(&[b"abc"]);
        // Inflate the first entry's size so it runs past the data region.
        let table_base = data.len() - 8 - 8;
        data[table_base + 4..table_base + 8].copy_from_slice(&100u32.to_le_bytes());
        file.write_all(&data).unwrap();

        assert!(RscArchive::open(file.path()).is_err());
    }

    #[test]
    fn rejects_truncated_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        assert!(RscArchive::open(file.path()).is_err());
    }

    #[test]
    fn extracts_entry_to_disk() {
        let mut file = NamedTempFile::new().unwrap();
        let data = build_archive(&[b"payload"]);
        file.write_all(&data).unwrap();

        let archive = RscArchive::open(file.path()).unwrap();
        let dest = NamedTempFile::new().unwrap();
        let entry = *archive.entry(0).unwrap();
        archive.extract_entry(&entry, dest.path()).unwrap();
        assert_eq!(std::fs::read(dest.path()).unwrap(), b"payload");
    }
}
