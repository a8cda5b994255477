//! Left-to-right pen layout: code points → glyph ids → advances →
//! meshes, with an origin the consumer can draw from.

use crate::error::DecodeError;
use crate::font::FontFile;
use crate::tessellate::{tessellate_wireframe, WireframeMesh, DEFAULT_TOLERANCE};

/// A pixel-space pen position. Baseline semantics: glyph geometry must
/// still be Y-flipped by the consumer (`y_px = origin.y - y_fu *
/// scale`); this core never performs that flip itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenOrigin {
    pub x: f32,
    pub y: f32,
}

/// One glyph positioned along the pen's walk.
pub struct PositionedGlyph {
    pub gid: u16,
    pub origin: PenOrigin,
    pub mesh: WireframeMesh,
}

/// Walks `text` left to right starting at `origin`, yielding one
/// `PositionedGlyph` per non-newline character. `\n` advances
/// `origin.y` by the font's line gap and resets `origin.x` to the
/// walk's starting x.
pub struct Pen<'a> {
    font: &'a FontFile,
    font_size_px: f32,
    letter_spacing_px: f32,
    tolerance: f32,
    origin: PenOrigin,
    start_x: f32,
    chars: std::str::Chars<'a>,
}

impl<'a> Pen<'a> {
    pub fn new(font: &'a FontFile, text: &'a str, origin: PenOrigin, font_size_px: f32) -> Self {
        Pen {
            font,
            font_size_px,
            letter_spacing_px: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            origin,
            start_x: origin.x,
            chars: text.chars(),
        }
    }

    pub fn with_letter_spacing(mut self, letter_spacing_px: f32) -> Self {
        self.letter_spacing_px = letter_spacing_px;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn scale(&self) -> f32 {
        self.font_size_px / self.font.units_per_em() as f32
    }
}

impl<'a> Iterator for Pen<'a> {
    type Item = Result<PositionedGlyph, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.chars.next()?;
            if ch == '\n' {
                self.origin.x = self.start_x;
                self.origin.y += self.font.line_metrics().line_gap as f32 * self.scale();
                continue;
            }

            let gid = self.font.map_code_point(ch as u32);
            let origin = self.origin;
            let advance_fu = self.font.hmetric(gid).advance_width as f32;
            self.origin.x += advance_fu * self.scale() + self.letter_spacing_px;

            let outline = match self.font.outline(gid) {
                Ok(o) => o,
                Err(e) => return Some(Err(e)),
            };
            let mesh = tessellate_wireframe(&outline, self.tolerance);
            return Some(Ok(PositionedGlyph { gid, origin, mesh }));
        }
    }
}
