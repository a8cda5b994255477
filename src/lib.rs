//! TrueType outline decoding and vector-glyph tessellation for
//! GPU-driven 2D text rendering.
//!
//! Load a font with [`font::FontFile::load`], map code points to glyph
//! ids, fetch a glyph's canonical [`outline::Outline`], then hand it to
//! [`tessellate`] for wireframe or stencil-cover vertex/index buffers.

pub mod error;
pub mod font;
pub mod gpu;
pub mod layout;
pub mod outline;
mod reader;
pub mod tables;
pub mod tessellate;

#[cfg(test)]
mod test_support;

pub use error::DecodeError;
pub use font::FontFile;
