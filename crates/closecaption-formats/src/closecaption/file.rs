//! Complete caption container: header, directory, and blocks

use crate::closecaption::entry::{DirectoryEntry, ResolvedCaption};
use crate::closecaption::error::{CaptionError, Result};
use crate::closecaption::header::{CaptionHeader, DATA_ALIGNMENT, HEADER_SIZE, align_up};
use binrw::{BinRead, BinWrite};
use closecaption_crypto::KeyHasher;
use std::io::{Cursor, Read, Write};
use tracing::debug;

/// Parsed or freshly built caption container
///
/// Binary layout: Header → Directory → zero padding up to `data_offset` →
/// Blocks → zero padding up to a 512-byte boundary.
///
/// `entries` keep the order they have on disk. Use
/// [`sorted_by_hash`](Self::sorted_by_hash) for a presentation view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionFile {
    /// Container header
    pub header: CaptionHeader,
    /// Directory entries in stored order
    pub entries: Vec<DirectoryEntry>,
    /// Blocks, each exactly `header.block_size` bytes
    pub blocks: Vec<Vec<u8>>,
}

impl CaptionFile {
    /// Parse a caption container from binary data
    pub fn parse(data: &[u8]) -> Result<Self> {
        check_len("header", HEADER_SIZE, data)?;

        let mut cursor = Cursor::new(data);
        let header = CaptionHeader::read(&mut cursor)?;
        header.validate()?;

        check_len("directory", header.directory_end(), data)?;
        let mut entries = Vec::with_capacity(header.directory_count());
        for _ in 0..header.directory_count() {
            entries.push(DirectoryEntry::read(&mut cursor)?);
        }

        check_len("blocks", header.data_end(), data)?;
        let block_size = header.block_size() as usize;
        let start = header.data_offset() as usize;
        let blocks: Vec<Vec<u8>> = data[start..header.data_end() as usize]
            .chunks_exact(block_size)
            .map(<[u8]>::to_vec)
            .collect();

        let file = Self {
            header,
            entries,
            blocks,
        };
        file.validate()?;

        debug!(
            entries = file.entries.len(),
            blocks = file.blocks.len(),
            block_size,
            "parsed caption container"
        );

        Ok(file)
    }

    /// Read and parse a caption container from a reader
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::parse(&data)
    }

    /// Build the caption container to binary data
    pub fn build(&self) -> Result<Vec<u8>> {
        self.validate()?;

        let mut buffer = Vec::with_capacity(self.header.file_size() as usize);
        let mut cursor = Cursor::new(&mut buffer);

        self.header.write(&mut cursor)?;
        for entry in &self.entries {
            entry.write(&mut cursor)?;
        }

        buffer.resize(self.header.data_offset() as usize, 0);
        for block in &self.blocks {
            buffer.extend_from_slice(block);
        }

        let padded = align_up(buffer.len() as u64, DATA_ALIGNMENT);
        buffer.resize(padded as usize, 0);

        Ok(buffer)
    }

    /// Build the caption container and write it to a writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let data = self.build()?;
        writer.write_all(&data)?;
        Ok(())
    }

    /// Validate container consistency
    pub fn validate(&self) -> Result<()> {
        self.header.validate()?;

        if self.entries.len() != self.header.directory_count() {
            return Err(CaptionError::CountMismatch {
                field: "directory_count",
                expected: i64::from(self.header.directory_count),
                actual: self.entries.len() as i64,
            });
        }

        if self.blocks.len() != self.header.block_count() {
            return Err(CaptionError::CountMismatch {
                field: "block_count",
                expected: i64::from(self.header.block_count),
                actual: self.blocks.len() as i64,
            });
        }

        let block_size = self.header.block_size();
        if let Some(block) = self.blocks.iter().find(|b| b.len() != block_size as usize) {
            return Err(CaptionError::CountMismatch {
                field: "block_size",
                expected: i64::from(block_size),
                actual: block.len() as i64,
            });
        }

        for entry in &self.entries {
            entry.validate(self.blocks.len(), block_size)?;
        }

        Ok(())
    }

    /// Number of directory entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode every caption, keeping directory order
    pub fn resolve(&self) -> Result<Vec<ResolvedCaption>> {
        self.entries
            .iter()
            .map(|entry| entry.resolve(&self.blocks))
            .collect()
    }

    /// Decode every caption and order the result by ascending hash
    ///
    /// The sort is stable, so captions sharing a hash keep directory order.
    pub fn sorted_by_hash(&self) -> Result<Vec<ResolvedCaption>> {
        let mut captions = self.resolve()?;
        captions.sort_by_key(ResolvedCaption::hash);
        Ok(captions)
    }

    /// Find the caption stored under `key`
    ///
    /// Returns the first matching entry in directory order.
    pub fn lookup<H: KeyHasher + ?Sized>(
        &self,
        key: &str,
        hasher: &H,
    ) -> Result<Option<ResolvedCaption>> {
        let hash = hasher.hash_key(key)?;
        self.entries
            .iter()
            .find(|entry| entry.hash == hash)
            .map(|entry| entry.resolve(&self.blocks))
            .transpose()
    }
}

impl crate::CaptionFormat for CaptionFile {
    fn parse(data: &[u8]) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        Self::parse(data).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
    }

    fn build(&self) -> std::result::Result<Vec<u8>, Box<dyn std::error::Error>> {
        self.build()
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
    }
}

fn check_len(section: &'static str, expected: u64, data: &[u8]) -> Result<()> {
    let actual = data.len() as u64;
    if actual < expected {
        return Err(CaptionError::TruncatedData {
            section,
            expected,
            actual,
        });
    }
    Ok(())
}
