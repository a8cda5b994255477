//! `glyf` table decoder: simple and compound glyph outlines.

use bitflags::bitflags;

use crate::error::DecodeError;
use crate::outline::Outline;
use crate::reader::Reader;
use crate::tables::loca::LocaTable;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct SimplePointFlags: u8 {
        const ON_CURVE        = 0x01;
        const X_SHORT         = 0x02;
        const Y_SHORT         = 0x04;
        const REPEAT          = 0x08;
        const X_SAME_OR_SIGN  = 0x10;
        const Y_SAME_OR_SIGN  = 0x20;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CompoundFlags: u16 {
        const ARGS_ARE_WORDS   = 0x0001;
        const ARGS_ARE_XY      = 0x0002;
        const SCALE            = 0x0008;
        const MORE_COMPONENTS  = 0x0020;
        const XY_SCALE         = 0x0040;
        const TWO_BY_TWO       = 0x0080;
        const HAVE_INSTRUCTIONS = 0x0100;
    }
}

/// Maximum compound-glyph recursion depth; exceeding it is a soft
/// error (`CompoundDepthExceeded`), not a panic.
const MAX_COMPOUND_DEPTH: u32 = 32;

/// Decodes glyph `gid`'s outline, recursively resolving compound
/// components via `resolve`. `visiting` carries the set of gids
/// currently on the recursion stack, for cycle detection.
pub fn decode_outline(
    r: &Reader,
    loca: &LocaTable,
    glyf_offset: usize,
    gid: u16,
    depth: u32,
    visiting: &mut Vec<u16>,
    resolve: &mut dyn FnMut(&mut Vec<u16>, u16, u32) -> Result<Outline, DecodeError>,
) -> Result<Outline, DecodeError> {
    if depth > MAX_COMPOUND_DEPTH {
        return Err(DecodeError::CompoundDepthExceeded(MAX_COMPOUND_DEPTH));
    }
    let (start, end) = loca
        .glyph_range(gid)
        .ok_or(DecodeError::GidOutOfRange { gid, num_glyphs: loca.num_glyphs() })?;
    if start == end {
        return Ok(Outline::empty());
    }

    let base = glyf_offset + start as usize;
    let num_contours = r.i16(base)?;
    // bounding box at base+2..base+10 is ignored; outlines are
    // re-derived from points where a consumer needs bounds.

    if num_contours >= 0 {
        decode_simple(r, base, num_contours as usize)
    } else {
        decode_compound(r, base, depth, visiting, resolve)
    }
}

fn decode_simple(r: &Reader, base: usize, num_contours: usize) -> Result<Outline, DecodeError> {
    let mut offset = base + 10;
    let mut contours = Vec::with_capacity(num_contours);
    for _ in 0..num_contours {
        contours.push(r.u16(offset)?);
        offset += 2;
    }
    let num_points = *contours.last().unwrap_or(&0) as usize + if num_contours > 0 { 1 } else { 0 };

    let instruction_length = r.u16(offset)?;
    offset += 2 + instruction_length as usize;

    let mut flags = Vec::with_capacity(num_points);
    while flags.len() < num_points {
        let byte = r.u8(offset)?;
        offset += 1;
        let flag = SimplePointFlags::from_bits_truncate(byte);
        flags.push(flag);
        if flag.contains(SimplePointFlags::REPEAT) {
            let repeat_count = r.u8(offset)?;
            offset += 1;
            for _ in 0..repeat_count {
                if flags.len() >= num_points {
                    break;
                }
                flags.push(flag);
            }
        }
    }

    let mut xs = Vec::with_capacity(num_points);
    let mut last = 0i32;
    for &flag in &flags {
        let dx = if flag.contains(SimplePointFlags::X_SHORT) {
            let v = r.u8(offset)? as i32;
            offset += 1;
            if flag.contains(SimplePointFlags::X_SAME_OR_SIGN) { v } else { -v }
        } else if flag.contains(SimplePointFlags::X_SAME_OR_SIGN) {
            0
        } else {
            let v = r.i16(offset)? as i32;
            offset += 2;
            v
        };
        last += dx;
        xs.push(last as f32);
    }

    let mut ys = Vec::with_capacity(num_points);
    let mut last = 0i32;
    for &flag in &flags {
        let dy = if flag.contains(SimplePointFlags::Y_SHORT) {
            let v = r.u8(offset)? as i32;
            offset += 1;
            if flag.contains(SimplePointFlags::Y_SAME_OR_SIGN) { v } else { -v }
        } else if flag.contains(SimplePointFlags::Y_SAME_OR_SIGN) {
            0
        } else {
            let v = r.i16(offset)? as i32;
            offset += 2;
            v
        };
        last += dy;
        ys.push(last as f32);
    }

    let points: Vec<(f32, f32)> = xs.into_iter().zip(ys).collect();
    let on_curve: Vec<bool> = flags.iter().map(|f| f.contains(SimplePointFlags::ON_CURVE)).collect();
    Ok(Outline::from_parts(points, on_curve, contours))
}

fn decode_compound(
    r: &Reader,
    base: usize,
    depth: u32,
    visiting: &mut Vec<u16>,
    resolve: &mut dyn FnMut(&mut Vec<u16>, u16, u32) -> Result<Outline, DecodeError>,
) -> Result<Outline, DecodeError> {
    let mut offset = base + 10;
    let mut out = Outline::empty();

    loop {
        let flags = CompoundFlags::from_bits_truncate(r.u16(offset)?);
        let component_gid = r.u16(offset + 2)?;
        offset += 4;

        let (arg1, arg2) = if flags.contains(CompoundFlags::ARGS_ARE_WORDS) {
            let a1 = r.i16(offset)?;
            let a2 = r.i16(offset + 2)?;
            offset += 4;
            (a1 as i32, a2 as i32)
        } else {
            let a1 = r.i8(offset)?;
            let a2 = r.i8(offset + 1)?;
            offset += 2;
            (a1 as i32, a2 as i32)
        };

        let (a, b, c, d) = if flags.contains(CompoundFlags::SCALE) {
            let s = r.f2dot14(offset)?;
            offset += 2;
            (s, 0.0, 0.0, s)
        } else if flags.contains(CompoundFlags::XY_SCALE) {
            let sx = r.f2dot14(offset)?;
            let sy = r.f2dot14(offset + 2)?;
            offset += 4;
            (sx, 0.0, 0.0, sy)
        } else if flags.contains(CompoundFlags::TWO_BY_TWO) {
            let a = r.f2dot14(offset)?;
            let b = r.f2dot14(offset + 2)?;
            let c = r.f2dot14(offset + 4)?;
            let d = r.f2dot14(offset + 6)?;
            offset += 8;
            (a, b, c, d)
        } else {
            (1.0, 0.0, 0.0, 1.0)
        };

        if visiting.contains(&component_gid) {
            return Err(DecodeError::CompoundCycle(component_gid));
        }
        visiting.push(component_gid);
        let component = resolve(visiting, component_gid, depth + 1)?;
        visiting.pop();

        let transformed: Vec<(f32, f32)> = component
            .points()
            .iter()
            .map(|&(x, y)| (a * x + b * y, c * x + d * y))
            .collect();

        let (dx, dy) = if flags.contains(CompoundFlags::ARGS_ARE_XY) {
            (arg1 as f32, arg2 as f32)
        } else {
            let local_idx = (arg1.max(0) as usize).min(transformed.len().saturating_sub(1));
            let parent_idx = (arg2.max(0) as usize).min(out.points().len().saturating_sub(1));
            let (tx, ty) = transformed.get(local_idx).copied().unwrap_or((0.0, 0.0));
            let (px, py) = if out.points().is_empty() {
                (0.0, 0.0)
            } else {
                out.points()[parent_idx]
            };
            (px - tx, py - ty)
        };

        let point_base = out.points().len() as u16;
        let shifted_points: Vec<(f32, f32)> = transformed.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
        let shifted_contours: Vec<u16> = component.contours().iter().map(|&e| e + point_base).collect();
        out.append(shifted_points, component.on_curve().to_vec(), shifted_contours);

        // HaveInstructions' trailing `u16 n` + n bytes of hinting
        // bytecode (only present after the last component) are never
        // read: this decoder has nothing downstream of the component
        // loop that needs the buffer position past this point.
        if !flags.contains(CompoundFlags::MORE_COMPONENTS) {
            break;
        }
    }
    Ok(out)
}
