//! `hhea` table: vertical layout metrics and hmtx sizing.

use crate::error::DecodeError;
use crate::reader::Reader;

#[derive(Debug, Clone, Copy)]
pub struct HheaData {
    pub ascent: i16,
    pub descent: i16,
    pub line_gap: i16,
    pub number_of_h_metrics: u16,
}

impl HheaData {
    pub fn parse(r: &Reader, table_offset: usize) -> Result<HheaData, DecodeError> {
        Ok(HheaData {
            ascent: r.i16(table_offset + 4)?,
            descent: r.i16(table_offset + 6)?,
            line_gap: r.i16(table_offset + 8)?,
            number_of_h_metrics: r.u16(table_offset + 34)?,
        })
    }
}
