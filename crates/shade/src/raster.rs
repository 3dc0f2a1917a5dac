//! Bounding-box triangle rasterization with barycentric color
//! interpolation.
//!
//! The algorithm scans the triangle's integer bounding box, keeps the
//! pixels that pass a signed-area inclusion test against the three edges,
//! and blends the corner colors with barycentric weights. Cost is
//! O(bounding box area); there is no spatial acceleration, anti-aliasing or
//! sub-pixel coverage, and a pixel is either fully painted or untouched.

use crate::Color;

/// Write-only surface the rasterizer paints into.
///
/// The kernel never reads pixels back and never learns the surface's
/// bounds; anything that accepts an `(x, y, color)` write can be a sink: a
/// window canvas, an image encoder, a test recorder.
pub trait PixelSink {
    fn set(&mut self, x: i32, y: i32, color: Color);
}

/// Fills a triangle into `sink`, interpolating the three corner colors.
///
/// Points are integer surface coordinates, paired index-wise with
/// `colors`. Every blended channel is clamped to `[0, 1]` before the
/// write. Inclusion is closed: pixels exactly on an edge (or on a
/// degenerate, zero-length edge) are painted, so two triangles sharing an
/// edge both cover its pixels and the later draw wins.
///
/// Precondition: the triangle has non-zero area. Collinear points make
/// every barycentric weight NaN; the result of painting such a triangle is
/// unspecified.
pub fn fill_triangle<S: PixelSink>(sink: &mut S, points: [(i32, i32); 3], colors: [Color; 3]) {
    let [(x1, y1), (x2, y2), (x3, y3)] = points;
    let [c1, c2, c3] = colors;

    let min_x = x1.min(x2).min(x3);
    let min_y = y1.min(y2).min(y3);
    let max_x = x1.max(x2).max(x3);
    let max_y = y1.max(y2).max(y3);

    // i64 copies keep every product below exact for any i32 coordinates.
    let (lx1, ly1) = (x1 as i64, y1 as i64);
    let (lx2, ly2) = (x2 as i64, y2 as i64);
    let (lx3, ly3) = (x3 as i64, y3 as i64);

    // Twice the signed triangle area; shared denominator of both weights.
    let denom = ((ly2 - ly3) * (lx1 - lx3) + (lx3 - lx2) * (ly1 - ly3)) as f64;

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            if !point_in_triangle(x, y, x1, y1, x2, y2, x3, y3) {
                continue;
            }

            let (lx, ly) = (x as i64, y as i64);
            let alpha =
                ((ly2 - ly3) * (lx - lx3) + (lx3 - lx2) * (ly - ly3)) as f64 / denom;
            let beta =
                ((ly3 - ly1) * (lx - lx3) + (lx1 - lx3) * (ly - ly3)) as f64 / denom;
            let gamma = 1.0 - alpha - beta;

            let color = Color::new(
                (alpha * c1.r as f64 + beta * c2.r as f64 + gamma * c3.r as f64) as f32,
                (alpha * c1.g as f64 + beta * c2.g as f64 + gamma * c3.g as f64) as f32,
                (alpha * c1.b as f64 + beta * c2.b as f64 + gamma * c3.b as f64) as f32,
            )
            .clamped();

            sink.set(x, y, color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn point_in_triangle(x: i32, y: i32, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> bool {
    let d1 = sign(x, y, x1, y1, x2, y2);
    let d2 = sign(x, y, x2, y2, x3, y3);
    let d3 = sign(x, y, x3, y3, x1, y1);

    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;

    // All three signs agree (zeros count either way): inside or on the
    // boundary.
    !(has_neg && has_pos)
}

// Twice the signed area of the triangle (p, a, b). i64 keeps the products
// exact for any i32 coordinates.
fn sign(px: i32, py: i32, ax: i32, ay: i32, bx: i32, by: i32) -> i64 {
    (px as i64 - bx as i64) * (ay as i64 - by as i64)
        - (ax as i64 - bx as i64) * (py as i64 - by as i64)
}
