//! `head` table: units-per-em and loca format.

use crate::error::DecodeError;
use crate::reader::Reader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaFormat {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy)]
pub struct HeadData {
    pub units_per_em: u16,
    pub index_to_loc_format: LocaFormat,
}

impl HeadData {
    pub fn parse(r: &Reader, table_offset: usize) -> Result<HeadData, DecodeError> {
        let units_per_em = r.u16(table_offset + 18)?;
        let raw_format = r.i16(table_offset + 50)?;
        Ok(HeadData {
            units_per_em,
            index_to_loc_format: if raw_format == 0 { LocaFormat::Short } else { LocaFormat::Long },
        })
    }
}
