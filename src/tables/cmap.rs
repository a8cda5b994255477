//! `cmap` table resolver: code point → glyph id.
//!
//! Only formats 4 and 12 are decoded; formats 0/2/6/8/10/13/14 are out
//! of scope. Format 12 is preferred over format 4 when both are
//! present, since it covers code points beyond the BMP correctly.
//!
//! The resolver is fully owned (no borrowed `Reader`) so a `FontFile`
//! can cache it behind a `OnceCell` without a self-referential
//! lifetime: format 4's `idRangeOffset` indirection is resolved once,
//! at parse time, into a plain index into an owned `glyph_id_array`.

use crate::error::DecodeError;
use crate::reader::Reader;

#[derive(Debug, Clone)]
struct Format12Group {
    start_char: u32,
    end_char: u32,
    start_gid: u32,
}

#[derive(Debug, Clone)]
struct Format4Segment {
    end_code: u16,
    start_code: u16,
    id_delta: i16,
    id_range_offset: u16,
    /// This segment's position within the subtable's segment arrays,
    /// needed (together with `seg_count`) to convert `idRangeOffset`'s
    /// address-relative byte offset into a `glyph_id_array` index.
    index: usize,
}

#[derive(Debug, Clone)]
struct Format4Table {
    segments: Vec<Format4Segment>,
    seg_count: usize,
    glyph_id_array: Vec<u16>,
}

#[derive(Debug, Clone)]
struct Format12Table {
    groups: Vec<Format12Group>,
}

/// A resolved, owned view over a font's `cmap` table: the first
/// format-12 and first format-4 subtable encountered.
#[derive(Debug, Clone)]
pub struct CmapTable {
    format12: Option<Format12Table>,
    format4: Option<Format4Table>,
}

impl CmapTable {
    pub fn parse(r: &Reader, table_offset: usize) -> Result<CmapTable, DecodeError> {
        let num_tables = r.u16(table_offset + 2)?;
        let mut format12 = None;
        let mut format4 = None;

        for i in 0..num_tables {
            let record_offset = table_offset + 4 + i as usize * 8;
            let subtable_offset = table_offset + r.u32(record_offset + 4)? as usize;
            let format = r.u16(subtable_offset)?;
            match format {
                12 if format12.is_none() => {
                    format12 = Some(parse_format12(r, subtable_offset)?);
                }
                4 if format4.is_none() => {
                    format4 = Some(parse_format4(r, subtable_offset)?);
                }
                _ => {
                    log::trace!("ignoring cmap subtable format {format} (not format 4/12 or already have one)");
                }
            }
        }

        if format12.is_none() && format4.is_none() {
            return Err(DecodeError::UnsupportedCmap);
        }
        Ok(CmapTable { format12, format4 })
    }

    /// Maps a code point to a glyph id, or 0 ("no glyph") if unmapped.
    /// Format 4 is only consulted when no format-12 subtable is present
    /// at all; a format-12 miss is a miss, not a fallback trigger.
    pub fn map_code_point(&self, cp: u32) -> u16 {
        if let Some(t) = &self.format12 {
            return lookup_format12(t, cp).unwrap_or(0);
        }
        if let Some(t) = &self.format4 {
            return lookup_format4(t, cp);
        }
        0
    }
}

fn parse_format12(r: &Reader, offset: usize) -> Result<Format12Table, DecodeError> {
    let num_groups = r.u32(offset + 12)?;
    let mut groups = Vec::with_capacity(num_groups as usize);
    let mut group_offset = offset + 16;
    for _ in 0..num_groups {
        groups.push(Format12Group {
            start_char: r.u32(group_offset)?,
            end_char: r.u32(group_offset + 4)?,
            start_gid: r.u32(group_offset + 8)?,
        });
        group_offset += 12;
    }
    Ok(Format12Table { groups })
}

fn parse_format4(r: &Reader, offset: usize) -> Result<Format4Table, DecodeError> {
    let subtable_length = r.u16(offset + 2)? as usize;
    let seg_count_x2 = r.u16(offset + 6)?;
    let seg_count = seg_count_x2 as usize / 2;

    let end_code_base = offset + 14;
    let start_code_base = end_code_base + seg_count_x2 as usize + 2; // +2 skips reservedPad
    let id_delta_base = start_code_base + seg_count_x2 as usize;
    let id_range_offset_base = id_delta_base + seg_count_x2 as usize;
    let glyph_array_base = id_range_offset_base + seg_count_x2 as usize;

    let mut segments = Vec::with_capacity(seg_count);
    for i in 0..seg_count {
        segments.push(Format4Segment {
            end_code: r.u16(end_code_base + i * 2)?,
            start_code: r.u16(start_code_base + i * 2)?,
            id_delta: r.i16(id_delta_base + i * 2)?,
            id_range_offset: r.u16(id_range_offset_base + i * 2)?,
            index: i,
        });
    }

    // Bytes consumed before glyphIdArray begins: 14-byte fixed header +
    // reservedPad + the endCode/startCode/idDelta/idRangeOffset arrays.
    let consumed = glyph_array_base - offset;
    let glyph_id_array_len = subtable_length.saturating_sub(consumed) / 2;
    let mut glyph_id_array = Vec::with_capacity(glyph_id_array_len);
    for i in 0..glyph_id_array_len {
        glyph_id_array.push(r.u16(glyph_array_base + i * 2)?);
    }

    Ok(Format4Table { segments, seg_count, glyph_id_array })
}

fn lookup_format12(t: &Format12Table, cp: u32) -> Option<u16> {
    let idx = t.groups.partition_point(|g| g.end_char < cp);
    let g = t.groups.get(idx)?;
    if g.start_char <= cp && cp <= g.end_char {
        Some((g.start_gid + (cp - g.start_char)) as u16)
    } else {
        None
    }
}

fn lookup_format4(t: &Format4Table, cp: u32) -> u16 {
    if cp > 0xFFFF {
        return 0;
    }
    let cp = cp as u16;
    let idx = t.segments.partition_point(|s| s.end_code < cp);
    let seg = match t.segments.get(idx) {
        Some(s) => s,
        None => return 0,
    };
    if seg.start_code > cp {
        return 0;
    }
    if seg.id_range_offset == 0 {
        return cp.wrapping_add(seg.id_delta as u16);
    }
    // idRangeOffset[i]/2 + (c - startCode[i]) - (segCount - i), the
    // standard reindexing of the address-relative glyphIdArray
    // dereference into a plain array index.
    let base = seg.id_range_offset as usize / 2 + (cp - seg.start_code) as usize;
    let array_index = base.checked_sub(t.seg_count - seg.index);
    let g = match array_index.and_then(|i| t.glyph_id_array.get(i)) {
        Some(&g) => g,
        None => return 0,
    };
    if g == 0 {
        0
    } else {
        g.wrapping_add(seg.id_delta as u16)
    }
}
