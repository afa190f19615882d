//! Encoding a [`MapDocument`] into the game's save archive.
//!
//! A map file is a zip archive whose only member, [`WORLD_ENTRY_NAME`], holds
//! the document as compact JSON.

use std::io::{Read, Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::MapResult;
use crate::world::MapDocument;

/// Name of the archive member holding the world document.
pub const WORLD_ENTRY_NAME: &str = "world.json";

/// Encode the document as compact JSON.
pub fn encode_document(document: &MapDocument) -> MapResult<Vec<u8>> {
    Ok(serde_json::to_vec(document)?)
}

/// Write `document` into a fresh archive on `sink` and hand the sink back.
///
/// The document is fully encoded before the archive is started, so an
/// encoding failure never leaves a half-written member behind. A failure
/// while writing the archive itself may leave partial bytes in `sink`;
/// callers should discard it.
pub fn write_archive<W: Write + Seek>(sink: W, document: &MapDocument) -> MapResult<W> {
    let body = encode_document(document)?;

    let mut writer = ZipWriter::new(sink);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(WORLD_ENTRY_NAME, options)?;
    writer.write_all(&body)?;
    Ok(writer.finish()?)
}

/// What a map archive holds.
#[derive(Debug, Clone)]
pub struct ArchiveContents {
    /// Names of every member, in archive order.
    pub entries: Vec<String>,
    /// Raw bytes of the world document.
    pub world: Vec<u8>,
}

impl ArchiveContents {
    /// Parse the world document as generic JSON.
    pub fn world_json(&self) -> MapResult<serde_json::Value> {
        Ok(serde_json::from_slice(&self.world)?)
    }
}

/// Read a map archive back.
pub fn read_archive<R: Read + Seek>(reader: R) -> MapResult<ArchiveContents> {
    let mut archive = ZipArchive::new(reader)?;
    let entries = archive.file_names().map(str::to_owned).collect();

    let mut world = Vec::new();
    archive.by_name(WORLD_ENTRY_NAME)?.read_to_end(&mut world)?;

    Ok(ArchiveContents { entries, world })
}
