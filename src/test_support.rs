//! Hand-assembled synthetic sfnt fixtures for tests.
//!
//! No real font file travels with the crate, so tests here instead
//! build a tiny but complete and internally-consistent TrueType font in
//! memory, the way `ttf-parser`/`fontdue`-style crates test their
//! decoders.
//!
//! Fixture glyph set (6 glyphs, `unitsPerEm = 1000`):
//! - gid 0: `.notdef`, empty outline.
//! - gid 1: two concentric on-curve-only squares (outer + inner hole),
//!   an outer contour plus a counter contour.
//! - gid 2: a single on/off/on curve contour (one quadratic segment).
//! - gid 3: empty outline, the space glyph.
//! - gid 4: compound glyph, `ArgsAreXY` translation of gid 1 and gid 2.
//! - gid 5: compound glyph exercising point-index alignment between a
//!   translated gid 1 component and a gid 2 component anchored to it.
//!
//! `numberOfHMetrics = 4`, so gids 4 and 5 exercise hmtx's
//! last-advance-repeats rule.
//!
//! cmap carries both a format-4 and a format-12 subtable that agree on
//! the BMP, plus a format-12-only supplementary-plane mapping for
//! 0x1F600, to exercise cmap precedence.

#![allow(dead_code)]

pub const UNITS_PER_EM: u16 = 1000;
pub const NUM_GLYPHS: u16 = 6;
pub const NUM_H_METRICS: u16 = 4;

pub const ADVANCE_NOTDEF: u16 = 500;
pub const ADVANCE_A: u16 = 600;
pub const ADVANCE_CURVE_GLYPH: u16 = 550;
pub const ADVANCE_SPACE: u16 = 300;

pub const GID_NOTDEF: u16 = 0;
pub const GID_A: u16 = 1;
pub const GID_CURVE: u16 = 2;
pub const GID_SPACE: u16 = 3;
pub const GID_COMPOUND_XY: u16 = 4;
pub const GID_COMPOUND_ALIGNED: u16 = 5;

pub const CP_SPACE: u32 = 0x20;
pub const CP_A: u32 = 0x41;
pub const CP_CURVE: u32 = 0x42;
pub const CP_SUPPLEMENTARY: u32 = 0x1F600;

/// Installs `env_logger` for tests that want to see `log::trace!`/
/// `log::warn!` output via `cargo test -- --nocapture`. Safe to call
/// more than once; later calls are no-ops.
pub fn init_test_logging() {
    let _ = env_logger::try_init();
}

fn be16(v: u16) -> [u8; 2] {
    v.to_be_bytes()
}
fn be16i(v: i16) -> [u8; 2] {
    v.to_be_bytes()
}
fn be32(v: u32) -> [u8; 4] {
    v.to_be_bytes()
}

/// Encodes a simple glyph whose points are all read as full `i16`
/// deltas (no SHORT/SAME flag bits), which keeps the fixture trivial
/// to hand-author: flags carry only the on-curve bit.
fn encode_simple_glyph(contours: &[Vec<(i16, i16, bool)>]) -> Vec<u8> {
    let mut out = Vec::new();
    let num_contours = contours.len() as i16;
    out.extend_from_slice(&be16i(num_contours));
    // bbox, unused by the decoder; zeros are fine.
    out.extend_from_slice(&be16i(0));
    out.extend_from_slice(&be16i(0));
    out.extend_from_slice(&be16i(0));
    out.extend_from_slice(&be16i(0));

    let mut end_pt = -1i32;
    for c in contours {
        end_pt += c.len() as i32;
        out.extend_from_slice(&be16(end_pt as u16));
    }
    out.extend_from_slice(&be16(0)); // instructionLength

    let all_points: Vec<(i16, i16, bool)> = contours.iter().flatten().copied().collect();
    for &(_, _, on_curve) in &all_points {
        let flag: u8 = if on_curve { 0x01 } else { 0x00 };
        out.push(flag);
    }
    for &(x, _, _) in &all_points {
        out.extend_from_slice(&be16i(x));
    }
    for &(_, y, _) in &all_points {
        out.extend_from_slice(&be16i(y));
    }
    out
}

const ARGS_ARE_WORDS: u16 = 0x0001;
const ARGS_ARE_XY: u16 = 0x0002;
const MORE_COMPONENTS: u16 = 0x0020;

fn encode_compound_xy_component(flags: u16, glyph_index: u16, dx: i16, dy: i16) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&be16(flags));
    out.extend_from_slice(&be16(glyph_index));
    out.extend_from_slice(&be16i(dx));
    out.extend_from_slice(&be16i(dy));
    out
}

fn encode_compound_aligned_component(flags: u16, glyph_index: u16, arg1: u8, arg2: u8) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&be16(flags));
    out.extend_from_slice(&be16(glyph_index));
    out.push(arg1);
    out.push(arg2);
    out
}

/// A single on/off/on quadratic contour (gid 2): on(0,0) off(100,200) on(200,0),
/// closed back to (0,0).
fn curve_glyph_points() -> Vec<(i16, i16, bool)> {
    vec![(0, 0, true), (100, 200, false), (200, 0, true)]
}

fn square_outer_points() -> Vec<(i16, i16, bool)> {
    vec![(0, 0, true), (400, 0, true), (400, 400, true), (0, 400, true)]
}

fn square_inner_points() -> Vec<(i16, i16, bool)> {
    vec![(100, 100, true), (300, 100, true), (300, 300, true), (100, 300, true)]
}

struct GlyfBuild {
    glyf: Vec<u8>,
    loca: Vec<u32>,
}

fn build_glyf_and_loca() -> GlyfBuild {
    let mut glyf = Vec::new();
    let mut loca = vec![0u32];

    // gid 0: notdef, empty.
    loca.push(glyf.len() as u32);

    // gid 1: square with hole, two contours.
    // encode_simple_glyph expects absolute coordinates per contour but
    // the wire format is delta-encoded; since our decoder accumulates
    // deltas starting at 0 across the WHOLE glyph (not per contour),
    // we must pass deltas, not absolutes. Build with explicit deltas.
    {
        let outer = square_outer_points();
        let inner = square_inner_points();
        let mut deltas: Vec<(i16, i16, bool)> = Vec::new();
        let (mut lx, mut ly) = (0i16, 0i16);
        for &(x, y, on) in outer.iter().chain(inner.iter()) {
            deltas.push((x - lx, y - ly, on));
            lx = x;
            ly = y;
        }
        let contours = vec![
            deltas[0..4].to_vec(),
            deltas[4..8].to_vec(),
        ];
        let bytes = encode_simple_glyph(&contours);
        glyf.extend_from_slice(&bytes);
    }
    loca.push(glyf.len() as u32);

    // gid 2: curve glyph, one contour, deltas from (0,0) start.
    {
        let pts = curve_glyph_points();
        let mut deltas = Vec::new();
        let (mut lx, mut ly) = (0i16, 0i16);
        for &(x, y, on) in &pts {
            deltas.push((x - lx, y - ly, on));
            lx = x;
            ly = y;
        }
        let bytes = encode_simple_glyph(&[deltas]);
        glyf.extend_from_slice(&bytes);
    }
    loca.push(glyf.len() as u32);

    // gid 3: space, empty.
    loca.push(glyf.len() as u32);

    // gid 4: compound, ArgsAreXY translating gid1 by (10,20) and gid2 by (500,0).
    {
        let mut bytes = Vec::new();
        let c0 = encode_compound_xy_component(ARGS_ARE_WORDS | ARGS_ARE_XY | MORE_COMPONENTS, GID_A, 10, 20);
        let c1 = encode_compound_xy_component(ARGS_ARE_WORDS | ARGS_ARE_XY, GID_CURVE, 500, 0);
        bytes.extend_from_slice(&be16i(-1)); // numContours < 0
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&c0);
        bytes.extend_from_slice(&c1);
        glyf.extend_from_slice(&bytes);
    }
    loca.push(glyf.len() as u32);

    // gid 5: compound, component0 = gid1 translated by (100,50) (ArgsAreXY),
    // component1 = gid2 point-aligned: arg1 = point index 0 within gid2
    // (untransformed), arg2 = point index 0 within the parent's already
    // assembled points (gid1's first point, post-translation).
    {
        let mut bytes = Vec::new();
        let c0 = encode_compound_xy_component(ARGS_ARE_WORDS | ARGS_ARE_XY | MORE_COMPONENTS, GID_A, 100, 50);
        let c1 = encode_compound_aligned_component(0, GID_CURVE, 0, 0);
        bytes.extend_from_slice(&be16i(-1));
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&be16i(0));
        bytes.extend_from_slice(&c0);
        bytes.extend_from_slice(&c1);
        glyf.extend_from_slice(&bytes);
    }
    loca.push(glyf.len() as u32);

    GlyfBuild { glyf, loca }
}

fn build_loca_short(offsets: &[u32]) -> Vec<u8> {
    let mut out = Vec::new();
    for &o in offsets {
        assert_eq!(o % 2, 0, "short loca requires even offsets");
        out.extend_from_slice(&be16((o / 2) as u16));
    }
    out
}

fn build_head(units_per_em: u16, index_to_loc_format: i16) -> Vec<u8> {
    let mut h = vec![0u8; 54];
    h[0..4].copy_from_slice(&be32(0x00010000));
    h[4..8].copy_from_slice(&be32(0x00010000));
    h[12..16].copy_from_slice(&be32(0x5F0F3CF5));
    h[18..20].copy_from_slice(&be16(units_per_em));
    h[50..52].copy_from_slice(&be16i(index_to_loc_format));
    h
}

fn build_maxp(num_glyphs: u16) -> Vec<u8> {
    let mut m = vec![0u8; 6];
    m[0..4].copy_from_slice(&be32(0x00010000));
    m[4..6].copy_from_slice(&be16(num_glyphs));
    m
}

fn build_hhea(ascent: i16, descent: i16, line_gap: i16, num_h_metrics: u16) -> Vec<u8> {
    let mut h = vec![0u8; 36];
    h[4..6].copy_from_slice(&be16i(ascent));
    h[6..8].copy_from_slice(&be16i(descent));
    h[8..10].copy_from_slice(&be16i(line_gap));
    h[34..36].copy_from_slice(&be16(num_h_metrics));
    h
}

fn build_hmtx(advances: &[u16], lsbs: &[i16], num_h_metrics: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..num_h_metrics {
        out.extend_from_slice(&be16(advances[i]));
        out.extend_from_slice(&be16i(lsbs[i]));
    }
    for lsb in &lsbs[num_h_metrics..] {
        out.extend_from_slice(&be16i(*lsb));
    }
    out
}

fn build_cmap() -> Vec<u8> {
    // format 4, covering space/A/curve-glyph plus terminator segment.
    let format4 = {
        let mut segs = vec![
            (CP_SPACE as u16, CP_SPACE as u16, GID_SPACE),
            (CP_A as u16, CP_A as u16, GID_A),
            (CP_CURVE as u16, CP_CURVE as u16, GID_CURVE),
            (0xFFFFu16, 0xFFFFu16, 0u16),
        ];
        segs.sort_by_key(|s| s.0);
        let seg_count = segs.len();
        let mut body = Vec::new();
        body.extend_from_slice(&be16(4)); // format
        body.extend_from_slice(&be16(0)); // length placeholder, fixed below
        body.extend_from_slice(&be16(0)); // language
        body.extend_from_slice(&be16((seg_count * 2) as u16));
        body.extend_from_slice(&be16(0)); // searchRange
        body.extend_from_slice(&be16(0)); // entrySelector
        body.extend_from_slice(&be16(0)); // rangeShift
        for &(_, end, _) in &segs {
            body.extend_from_slice(&be16(end));
        }
        body.extend_from_slice(&be16(0)); // reservedPad
        for &(start, _, _) in &segs {
            body.extend_from_slice(&be16(start));
        }
        for &(start, _, gid) in &segs {
            let delta = (gid as i32 - start as i32) as i16;
            body.extend_from_slice(&be16i(delta));
        }
        for _ in &segs {
            body.extend_from_slice(&be16(0)); // idRangeOffset, all direct (delta) mapping
        }
        let len = body.len() as u16;
        body[2..4].copy_from_slice(&be16(len));
        body
    };

    let format12 = {
        let groups: [(u32, u32, u32); 3] = [
            (CP_SPACE, CP_SPACE, GID_SPACE as u32),
            (CP_A, CP_CURVE, GID_A as u32), // contiguous: 0x41->1, 0x42->2
            (CP_SUPPLEMENTARY, CP_SUPPLEMENTARY, GID_COMPOUND_XY as u32),
        ];
        let mut body = Vec::new();
        body.extend_from_slice(&be16(12)); // format
        body.extend_from_slice(&be16(0)); // reserved
        body.extend_from_slice(&be32(0)); // length placeholder
        body.extend_from_slice(&be32(0)); // language
        body.extend_from_slice(&be32(groups.len() as u32));
        for &(start, end, start_gid) in &groups {
            body.extend_from_slice(&be32(start));
            body.extend_from_slice(&be32(end));
            body.extend_from_slice(&be32(start_gid));
        }
        let len = body.len() as u32;
        body[4..8].copy_from_slice(&be32(len));
        body
    };

    let num_subtables = 2u16;
    let mut cmap = Vec::new();
    cmap.extend_from_slice(&be16(0)); // version
    cmap.extend_from_slice(&be16(num_subtables));
    let header_len = 4 + num_subtables as usize * 8;
    let format4_offset = header_len;
    let format12_offset = format4_offset + format4.len();
    // format 4 record: platform 3 (windows), encoding 1 (BMP)
    cmap.extend_from_slice(&be16(3));
    cmap.extend_from_slice(&be16(1));
    cmap.extend_from_slice(&be32(format4_offset as u32));
    // format 12 record: platform 3, encoding 10 (full Unicode)
    cmap.extend_from_slice(&be16(3));
    cmap.extend_from_slice(&be16(10));
    cmap.extend_from_slice(&be32(format12_offset as u32));
    cmap.extend_from_slice(&format4);
    cmap.extend_from_slice(&format12);
    cmap
}

/// Assembles a complete, internally-consistent sfnt buffer for the
/// fixture glyph set documented at module level.
pub fn minimal_font_bytes() -> Vec<u8> {
    let head = build_head(UNITS_PER_EM, 0);
    let maxp = build_maxp(NUM_GLYPHS);
    let hhea = build_hhea(800, -200, 90, NUM_H_METRICS);
    let advances = [ADVANCE_NOTDEF, ADVANCE_A, ADVANCE_CURVE_GLYPH, ADVANCE_SPACE];
    let lsbs = [0i16, 0, 0, 0, 0, 0];
    let hmtx = build_hmtx(&advances, &lsbs, NUM_H_METRICS as usize);
    let GlyfBuild { glyf, loca: loca_offsets } = build_glyf_and_loca();
    let loca = build_loca_short(&loca_offsets);
    let cmap = build_cmap();

    let tables: Vec<(&[u8; 4], &[u8])] = vec![
        (b"head", &head),
        (b"maxp", &maxp),
        (b"hhea", &hhea),
        (b"hmtx", &hmtx),
        (b"loca", &loca),
        (b"glyf", &glyf),
        (b"cmap", &cmap),
    ];

    let num_tables = tables.len() as u16;
    let mut out = Vec::new();
    out.extend_from_slice(&be32(0x00010000));
    out.extend_from_slice(&be16(num_tables));
    out.extend_from_slice(&be16(0));
    out.extend_from_slice(&be16(0));
    out.extend_from_slice(&be16(0));

    let mut offset = 12 + 16 * tables.len();
    let mut directory = Vec::new();
    let mut payload = Vec::new();
    for (tag, bytes) in &tables {
        directory.extend_from_slice(*tag);
        directory.extend_from_slice(&be32(0)); // checksum, ignored by this crate
        directory.extend_from_slice(&be32(offset as u32));
        directory.extend_from_slice(&be32(bytes.len() as u32));
        payload.extend_from_slice(bytes);
        offset += bytes.len();
    }

    out.extend_from_slice(&directory);
    out.extend_from_slice(&payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_assembles_without_panicking() {
        let bytes = minimal_font_bytes();
        assert!(bytes.len() > 12 + 16 * 7);
    }
}
