//! Index builders: flattened contours → line-list and fan-triangulation
//! index arrays, plus the bounding-box cover quad.

use crate::tessellate::flatten::FlattenedContour;

#[derive(Debug, Clone, Default)]
pub struct WireframeMesh {
    /// Interleaved (x, y) pairs in font units.
    pub vertices: Vec<f32>,
    pub line_indices: Vec<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct StencilCoverMesh {
    pub stencil_vertices: Vec<f32>,
    pub fan_indices: Vec<u32>,
    pub cover_vertices: Vec<f32>,
    pub cover_indices: Vec<u32>,
}

/// Builds interleaved vertex positions and closed-polyline indices for
/// wireframe rendering: `(i, i+1)` per edge, plus the closing edge
/// `(end, start)` for each contour.
pub fn build_wireframe(contours: &[FlattenedContour]) -> WireframeMesh {
    let mut vertices = Vec::new();
    let mut line_indices = Vec::new();
    let mut base = 0u32;

    for contour in contours {
        let n = contour.points.len() as u32;
        if n == 0 {
            continue;
        }
        for &(x, y) in &contour.points {
            vertices.push(x);
            vertices.push(y);
        }
        for i in 0..n {
            line_indices.push(base + i);
            line_indices.push(base + (i + 1) % n);
        }
        base += n;
    }

    WireframeMesh { vertices, line_indices }
}

/// Builds a triangle fan per contour (`(s, i, i+1)` for each interior
/// point) for the stencil pass, plus a padded bounding-box cover quad
/// for the cover pass.
pub fn build_stencil_cover(contours: &[FlattenedContour], pad: f32) -> StencilCoverMesh {
    let mut stencil_vertices = Vec::new();
    let mut fan_indices = Vec::new();
    let mut base = 0u32;

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for contour in contours {
        let n = contour.points.len() as u32;
        if n < 3 {
            // Degenerate contours (fewer than 3 points) contribute no
            // stencil coverage but still count toward the bbox.
            for &(x, y) in &contour.points {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
                stencil_vertices.push(x);
                stencil_vertices.push(y);
            }
            base += n;
            continue;
        }
        for &(x, y) in &contour.points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            stencil_vertices.push(x);
            stencil_vertices.push(y);
        }
        for i in 1..n - 1 {
            fan_indices.push(base);
            fan_indices.push(base + i);
            fan_indices.push(base + i + 1);
        }
        base += n;
    }

    let (cover_vertices, cover_indices) = if min_x.is_finite() {
        bbox_cover_quad(min_x - pad, min_y - pad, max_x + pad, max_y + pad)
    } else {
        (Vec::new(), Vec::new())
    };

    StencilCoverMesh { stencil_vertices, fan_indices, cover_vertices, cover_indices }
}

fn bbox_cover_quad(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> (Vec<f32>, Vec<u32>) {
    let vertices = vec![min_x, min_y, max_x, min_y, max_x, max_y, min_x, max_y];
    let indices = vec![0, 1, 2, 0, 2, 3];
    (vertices, indices)
}
