//! Public entry point: `FontFile`, the owning, read-only view over a
//! loaded sfnt buffer.
//!
//! Table directory presence is validated eagerly at `load` time, so a
//! missing required table surfaces immediately as `MissingTable`, but
//! each table's actual contents are parsed lazily on first use and
//! cached on the `FontFile` value thereafter: a caller that only ever
//! calls `outline()` never pays the cost of parsing `cmap`/`hmtx`.

use std::cell::OnceCell;
use std::sync::Arc;

use crate::error::DecodeError;
use crate::outline::{Outline, OutlineCache};
use crate::reader::Reader;
use crate::tables::cmap::CmapTable;
use crate::tables::directory::{TableDirectory, TAG_CMAP, TAG_GLYF, TAG_HEAD, TAG_HHEA, TAG_HMTX, TAG_LOCA, TAG_MAXP};
use crate::tables::head::HeadData;
use crate::tables::hhea::HheaData;
use crate::tables::hmtx::{HMetric, HmtxTable};
use crate::tables::loca::LocaTable;
use crate::tables::maxp::MaxpData;

/// Ascent/descent/line-gap in font units, for pen layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: i16,
    pub descent: i16,
    pub line_gap: i16,
}

/// A loaded TrueType font: the raw buffer, the validated table
/// directory, and a set of lazily-populated per-table caches. Not
/// `Sync`: a caller needing concurrent access constructs one
/// `FontFile` per thread over a shared, cheaply-cloned `Arc<[u8]>`
/// buffer, or wraps the whole value in a `Mutex`.
pub struct FontFile {
    buffer: Arc<[u8]>,
    dir: TableDirectory,
    head: OnceCell<HeadData>,
    maxp: OnceCell<MaxpData>,
    hhea: OnceCell<HheaData>,
    loca: OnceCell<LocaTable>,
    hmtx: OnceCell<HmtxTable>,
    cmap: OnceCell<CmapTable>,
    outline_cache: OutlineCache,
}

impl FontFile {
    /// Parses the sfnt header and validates that every required table
    /// is present. Individual table contents are not decoded until
    /// first queried.
    pub fn load(bytes: impl Into<Arc<[u8]>>) -> Result<FontFile, DecodeError> {
        let buffer: Arc<[u8]> = bytes.into();
        let dir = TableDirectory::parse(&buffer)?;
        Ok(FontFile {
            buffer,
            dir,
            head: OnceCell::new(),
            maxp: OnceCell::new(),
            hhea: OnceCell::new(),
            loca: OnceCell::new(),
            hmtx: OnceCell::new(),
            cmap: OnceCell::new(),
            outline_cache: OutlineCache::new(),
        })
    }

    fn reader(&self) -> Reader {
        Reader::new(&self.buffer)
    }

    fn head(&self) -> Result<&HeadData, DecodeError> {
        if self.head.get().is_none() {
            let info = self.dir.lookup(TAG_HEAD)?;
            let parsed = HeadData::parse(&self.reader(), info.offset as usize)?;
            let _ = self.head.set(parsed);
        }
        Ok(self.head.get().unwrap())
    }

    fn maxp(&self) -> Result<&MaxpData, DecodeError> {
        if self.maxp.get().is_none() {
            let info = self.dir.lookup(TAG_MAXP)?;
            let parsed = MaxpData::parse(&self.reader(), info.offset as usize)?;
            let _ = self.maxp.set(parsed);
        }
        Ok(self.maxp.get().unwrap())
    }

    fn hhea(&self) -> Result<&HheaData, DecodeError> {
        if self.hhea.get().is_none() {
            let info = self.dir.lookup(TAG_HHEA)?;
            let parsed = HheaData::parse(&self.reader(), info.offset as usize)?;
            let _ = self.hhea.set(parsed);
        }
        Ok(self.hhea.get().unwrap())
    }

    fn loca(&self) -> Result<&LocaTable, DecodeError> {
        if self.loca.get().is_none() {
            let head = self.head()?;
            let maxp = self.maxp()?;
            let loca_info = self.dir.lookup(TAG_LOCA)?;
            let glyf_info = self.dir.lookup(TAG_GLYF)?;
            let parsed = LocaTable::parse(&self.reader(), loca_info.offset as usize, maxp.num_glyphs, head.index_to_loc_format, glyf_info.length)?;
            let _ = self.loca.set(parsed);
        }
        Ok(self.loca.get().unwrap())
    }

    fn hmtx(&self) -> Result<&HmtxTable, DecodeError> {
        if self.hmtx.get().is_none() {
            let maxp = self.maxp()?;
            let hhea = self.hhea()?;
            let info = self.dir.lookup(TAG_HMTX)?;
            let parsed = HmtxTable::parse(&self.reader(), info.offset as usize, maxp.num_glyphs, hhea.number_of_h_metrics)?;
            let _ = self.hmtx.set(parsed);
        }
        Ok(self.hmtx.get().unwrap())
    }

    fn cmap(&self) -> Result<&CmapTable, DecodeError> {
        if self.cmap.get().is_none() {
            let info = self.dir.lookup(TAG_CMAP)?;
            let parsed = CmapTable::parse(&self.reader(), info.offset as usize)?;
            let _ = self.cmap.set(parsed);
        }
        Ok(self.cmap.get().unwrap())
    }

    pub fn units_per_em(&self) -> u16 {
        self.head().map(|h| h.units_per_em).unwrap_or(0)
    }

    pub fn num_glyphs(&self) -> u16 {
        self.maxp().map(|m| m.num_glyphs).unwrap_or(0)
    }

    pub fn line_metrics(&self) -> LineMetrics {
        self.hhea()
            .map(|h| LineMetrics { ascent: h.ascent, descent: h.descent, line_gap: h.line_gap })
            .unwrap_or(LineMetrics { ascent: 0, descent: 0, line_gap: 0 })
    }

    /// Maps a Unicode code point to a glyph id, or 0 (`.notdef`) if
    /// unmapped.
    pub fn map_code_point(&self, cp: u32) -> u16 {
        self.cmap().map(|c| c.map_code_point(cp)).unwrap_or(0)
    }

    pub fn hmetric(&self, gid: u16) -> HMetric {
        self.hmtx().map(|t| t.hmetric(gid)).unwrap_or(HMetric { advance_width: 0, lsb: 0 })
    }

    /// Decodes (or returns the cached) canonical outline for `gid`.
    /// Fails with `GidOutOfRange` if `gid >= numGlyphs`.
    pub fn outline(&self, gid: u16) -> Result<Outline, DecodeError> {
        let loca = self.loca()?;
        let glyf_offset = self.dir.lookup(TAG_GLYF)?.offset as usize;
        self.outline_cache.get(&self.reader(), loca, glyf_offset, gid)
    }
}
