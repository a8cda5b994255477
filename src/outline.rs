//! Decoded glyph outlines and their memoization cache.
//!
//! An `Outline` is the canonical, already-composed representation of a
//! glyph's contours in font design units: parallel point/on-curve
//! arrays plus per-contour end-point indices, identical in shape for
//! both simple and compound glyphs once decoding is done.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::DecodeError;
use crate::reader::Reader;
use crate::tables::glyf;
use crate::tables::loca::LocaTable;

#[derive(Debug, Clone, Default)]
pub struct Outline {
    points: Vec<(f32, f32)>,
    on_curve: Vec<bool>,
    /// End-point index (inclusive) of each contour, as in the source
    /// `glyf` encoding.
    contours: Vec<u16>,
}

impl Outline {
    pub fn empty() -> Self {
        Outline::default()
    }

    pub fn from_parts(points: Vec<(f32, f32)>, on_curve: Vec<bool>, contours: Vec<u16>) -> Self {
        Outline { points, on_curve, contours }
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn on_curve(&self) -> &[bool] {
        &self.on_curve
    }

    pub fn contours(&self) -> &[u16] {
        &self.contours
    }

    /// Appends another (already transformed) outline's points as one or
    /// more additional contours, shifting `extra_contours`' end-point
    /// indices by the current point count. Used when composing
    /// compound glyphs.
    pub(crate) fn append(&mut self, points: Vec<(f32, f32)>, on_curve: Vec<bool>, extra_contours: Vec<u16>) {
        self.points.extend(points);
        self.on_curve.extend(on_curve);
        self.contours.extend(extra_contours);
    }

    /// Iterates each contour as a slice of `(point, on_curve)` pairs.
    pub fn contour_slices(&self) -> impl Iterator<Item = (&[(f32, f32)], &[bool])> {
        let mut start = 0usize;
        self.contours.iter().map(move |&end| {
            let end = end as usize + 1;
            let slice = (&self.points[start..end], &self.on_curve[start..end]);
            start = end;
            slice
        })
    }
}

/// Per-font memoization cache for decoded outlines, keyed by gid.
/// Compound glyphs recurse through `get`, so a component glyph decoded
/// once for one compound is reused by every other compound that
/// references it. Not `Sync`: callers that need outlines from multiple
/// threads build one cache per thread.
pub struct OutlineCache {
    cache: RefCell<HashMap<u16, Outline>>,
}

impl OutlineCache {
    pub fn new() -> Self {
        OutlineCache { cache: RefCell::new(HashMap::new()) }
    }

    pub fn get(
        &self,
        r: &Reader,
        loca: &LocaTable,
        glyf_offset: usize,
        gid: u16,
    ) -> Result<Outline, DecodeError> {
        if let Some(outline) = self.cache.borrow().get(&gid) {
            return Ok(outline.clone());
        }
        let mut visiting = vec![gid];
        let outline = glyf::decode_outline(r, loca, glyf_offset, gid, 0, &mut visiting, &mut |visiting, component_gid, depth| {
            self.resolve_component(r, loca, glyf_offset, component_gid, depth, visiting)
        })?;
        self.cache.borrow_mut().insert(gid, outline.clone());
        Ok(outline)
    }

    fn resolve_component(
        &self,
        r: &Reader,
        loca: &LocaTable,
        glyf_offset: usize,
        gid: u16,
        depth: u32,
        visiting: &mut Vec<u16>,
    ) -> Result<Outline, DecodeError> {
        if let Some(outline) = self.cache.borrow().get(&gid) {
            return Ok(outline.clone());
        }
        let outline = glyf::decode_outline(r, loca, glyf_offset, gid, depth, visiting, &mut |visiting, component_gid, depth| {
            self.resolve_component(r, loca, glyf_offset, component_gid, depth, visiting)
        })?;
        self.cache.borrow_mut().insert(gid, outline.clone());
        Ok(outline)
    }
}

impl Default for OutlineCache {
    fn default() -> Self {
        Self::new()
    }
}
