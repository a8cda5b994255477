use crate::tables::directory::Tag;

/// Everything that can go wrong while decoding an sfnt/TrueType font.
///
/// Decode errors are surfaced to the caller verbatim; none of them are
/// recovered locally inside this crate. `FontFile::map_code_point` is
/// the one exception, it returns glyph id 0 for an unmapped code
/// point rather than erroring.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("read past end of buffer at offset {offset} (buffer length {len})")]
    Truncated { offset: usize, len: usize },

    #[error("malformed sfnt header")]
    BadHeader,

    #[error("required table `{0}` missing from font")]
    MissingTable(Tag),

    #[error("loca table offsets are non-monotone or exceed the glyf table's length")]
    LocaInconsistent,

    #[error("no usable format-4 or format-12 cmap subtable")]
    UnsupportedCmap,

    #[error("compound glyph {0} references itself, directly or indirectly")]
    CompoundCycle(u16),

    #[error("compound glyph recursion exceeded the depth cap ({0})")]
    CompoundDepthExceeded(u32),

    #[error("glyph id {gid} is out of range (font has {num_glyphs} glyphs)")]
    GidOutOfRange { gid: u16, num_glyphs: u16 },
}
