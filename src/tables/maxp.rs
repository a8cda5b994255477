//! `maxp` table: glyph count.

use crate::error::DecodeError;
use crate::reader::Reader;

#[derive(Debug, Clone, Copy)]
pub struct MaxpData {
    pub num_glyphs: u16,
}

impl MaxpData {
    pub fn parse(r: &Reader, table_offset: usize) -> Result<MaxpData, DecodeError> {
        Ok(MaxpData { num_glyphs: r.u16(table_offset + 4)? })
    }
}
