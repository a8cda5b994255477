//! `hmtx` table: advance widths and left-side bearings.

use crate::error::DecodeError;
use crate::reader::Reader;

#[derive(Debug, Clone, Copy)]
pub struct HMetric {
    pub advance_width: u16,
    pub lsb: i16,
}

#[derive(Debug, Clone)]
pub struct HmtxTable {
    advances: Vec<u16>,
    lsbs: Vec<i16>,
}

impl HmtxTable {
    pub fn parse(
        r: &Reader,
        table_offset: usize,
        num_glyphs: u16,
        number_of_h_metrics: u16,
    ) -> Result<HmtxTable, DecodeError> {
        let mut advances = Vec::with_capacity(number_of_h_metrics as usize);
        let mut lsbs = Vec::with_capacity(num_glyphs as usize);
        let mut offset = table_offset;
        for _ in 0..number_of_h_metrics {
            advances.push(r.u16(offset)?);
            lsbs.push(r.i16(offset + 2)?);
            offset += 4;
        }
        for _ in number_of_h_metrics..num_glyphs {
            lsbs.push(r.i16(offset)?);
            offset += 2;
        }
        Ok(HmtxTable { advances, lsbs })
    }

    /// Advance width and left-side bearing for `gid`. Advance
    /// saturates to the last recorded value for `gid >=
    /// numberOfHMetrics`.
    pub fn hmetric(&self, gid: u16) -> HMetric {
        let i = gid as usize;
        let advance_width = if i < self.advances.len() {
            self.advances[i]
        } else {
            *self.advances.last().unwrap_or(&0)
        };
        let lsb = self.lsbs.get(i).copied().unwrap_or(0);
        HMetric { advance_width, lsb }
    }
}
