//! Physical (ZIP) side of an OPC package.
//!
//! Parts are written into an in-memory archive; the caller decides where the
//! finished bytes go, so a failed build never leaves a partial file behind.

use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Physical package writer for creating OPC packages.
///
/// Every member is Deflate-compressed. Entry timestamps are left at the ZIP
/// epoch so identical parts produce identical archives.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
    members: usize,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            members: 0,
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(pack_uri.membername(), member_options())?;
        self.archive.write_all(blob)?;
        self.members += 1;
        Ok(())
    }

    /// Number of members written so far.
    pub fn len(&self) -> usize {
        self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

fn member_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_written_members_are_readable() {
        let mut writer = PhysPkgWriter::new();

        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&pres, "<p:presentation>감사</p:presentation>".as_bytes()).unwrap();
        assert_eq!(writer.len(), 3);

        let zip_data = writer.finish().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 3);
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut content = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<p:presentation>감사</p:presentation>");
    }

    #[test]
    fn test_identical_input_identical_bytes() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
            writer.write(&uri, b"<p:sld/>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
