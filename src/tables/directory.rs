//! sfnt table directory.

use std::collections::HashMap;
use std::fmt;

use crate::error::DecodeError;
use crate::reader::Reader;

/// A 4-byte sfnt table tag, e.g. `Tag(*b"glyf")`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    pub const fn new(bytes: &[u8; 4]) -> Tag {
        Tag(*bytes)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:?})", std::str::from_utf8(&self.0).unwrap_or("????"))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", std::str::from_utf8(&self.0).unwrap_or("????"))
    }
}

pub const TAG_HEAD: Tag = Tag::new(b"head");
pub const TAG_MAXP: Tag = Tag::new(b"maxp");
pub const TAG_HHEA: Tag = Tag::new(b"hhea");
pub const TAG_HMTX: Tag = Tag::new(b"hmtx");
pub const TAG_LOCA: Tag = Tag::new(b"loca");
pub const TAG_GLYF: Tag = Tag::new(b"glyf");
pub const TAG_CMAP: Tag = Tag::new(b"cmap");

const REQUIRED_TABLES: [Tag; 7] = [TAG_HEAD, TAG_MAXP, TAG_HHEA, TAG_HMTX, TAG_LOCA, TAG_GLYF, TAG_CMAP];

/// `{ offset, length }` of one table's bytes within the font buffer.
#[derive(Debug, Clone, Copy)]
pub struct TableInfo {
    pub offset: u32,
    pub length: u32,
}

/// Parsed sfnt header: a tag → byte-range map, plus required-table
/// presence already validated.
#[derive(Debug)]
pub struct TableDirectory {
    tables: HashMap<Tag, TableInfo>,
}

impl TableDirectory {
    /// Parses the table directory at the start of `buf` and checks
    /// that every table this crate needs is present.
    pub fn parse(buf: &[u8]) -> Result<TableDirectory, DecodeError> {
        let r = Reader::new(buf);

        // scaler type at offset 0 is ignored; sanity-check it is at
        // least readable so a garbage buffer fails fast.
        r.u32(0)?;
        let num_tables = r.u16(4)?;
        // search_range, entry_selector, range_shift: 6 bytes, skipped.
        let mut offset = 12usize;

        let mut tables = HashMap::with_capacity(num_tables as usize);
        for _ in 0..num_tables {
            let tag = Tag([r.u8(offset)?, r.u8(offset + 1)?, r.u8(offset + 2)?, r.u8(offset + 3)?]);
            // checksum at offset+4 is ignored.
            let table_offset = r.u32(offset + 8)?;
            let length = r.u32(offset + 12)?;
            if (table_offset as usize).checked_add(length as usize).map_or(true, |end| end > buf.len()) {
                return Err(DecodeError::BadHeader);
            }
            tables.insert(tag, TableInfo { offset: table_offset, length });
            offset += 16;
        }

        let dir = TableDirectory { tables };
        for &tag in &REQUIRED_TABLES {
            if !dir.tables.contains_key(&tag) {
                return Err(DecodeError::MissingTable(tag));
            }
        }
        Ok(dir)
    }

    pub fn lookup(&self, tag: Tag) -> Result<TableInfo, DecodeError> {
        self.tables.get(&tag).copied().ok_or(DecodeError::MissingTable(tag))
    }
}
