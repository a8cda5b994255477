//! `loca` table: per-glyph byte offsets into `glyf`.

use crate::error::DecodeError;
use crate::reader::Reader;
use crate::tables::head::LocaFormat;

#[derive(Debug, Clone)]
pub struct LocaTable {
    offsets: Vec<u32>,
}

impl LocaTable {
    pub fn parse(
        r: &Reader,
        table_offset: usize,
        num_glyphs: u16,
        format: LocaFormat,
        glyf_length: u32,
    ) -> Result<LocaTable, DecodeError> {
        let count = num_glyphs as usize + 1;
        let mut offsets = Vec::with_capacity(count);
        for i in 0..count {
            let v = match format {
                LocaFormat::Short => r.u16(table_offset + i * 2)? as u32 * 2,
                LocaFormat::Long => r.u32(table_offset + i * 4)?,
            };
            offsets.push(v);
        }
        if offsets.windows(2).any(|w| w[0] > w[1]) || offsets.last().copied().unwrap_or(0) > glyf_length {
            return Err(DecodeError::LocaInconsistent);
        }
        Ok(LocaTable { offsets })
    }

    /// The byte range of glyph `gid` within `glyf`, or `None` if `gid`
    /// is out of range.
    pub fn glyph_range(&self, gid: u16) -> Option<(u32, u32)> {
        let i = gid as usize;
        if i + 1 >= self.offsets.len() {
            return None;
        }
        Some((self.offsets[i], self.offsets[i + 1]))
    }

    pub fn num_glyphs(&self) -> u16 {
        (self.offsets.len() - 1) as u16
    }
}
