//! Vector-glyph tessellator: adaptive flattening and index/mesh
//! construction.

pub mod flatten;
pub mod mesh;

use crate::outline::Outline;

pub use flatten::{flatten, FlattenedContour, DEFAULT_TOLERANCE};
pub use mesh::{build_stencil_cover, build_wireframe, StencilCoverMesh, WireframeMesh};

/// Flattens `outline` and builds its wireframe mesh in one call.
pub fn tessellate_wireframe(outline: &Outline, tolerance: f32) -> WireframeMesh {
    build_wireframe(&flatten(outline, tolerance))
}

/// Flattens `outline` and builds its stencil-cover mesh in one call.
pub fn tessellate_stencil_cover(outline: &Outline, tolerance: f32, pad: f32) -> StencilCoverMesh {
    build_stencil_cover(&flatten(outline, tolerance), pad)
}
